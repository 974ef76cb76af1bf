//! Incoming message queue
//!
//! Raw, still-ciphered datagrams in arrival order. Grows only from the
//! radio poll and shrinks only when the viewer dismisses the oldest entry.

use heapless::Deque;
use murmur_protocol::Datagram;

/// Maximum queued datagrams
pub const INBOX_CAPACITY: usize = 16;

/// FIFO of received datagrams
#[derive(Debug, Clone, Default)]
pub struct IncomingQueue {
    entries: Deque<Datagram, INBOX_CAPACITY>,
}

impl IncomingQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            entries: Deque::new(),
        }
    }

    /// Append a datagram
    ///
    /// Hands the datagram back if the queue is full.
    pub fn push(&mut self, datagram: Datagram) -> Result<(), Datagram> {
        self.entries.push_back(datagram)
    }

    /// Oldest entry, if any
    pub fn front(&self) -> Option<&Datagram> {
        self.entries.front()
    }

    /// Remove and return the oldest entry
    pub fn dismiss(&mut self) -> Option<Datagram> {
        self.entries.pop_front()
    }

    /// Number of queued entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if another push would be refused
    pub fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    /// Iterate oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Datagram> {
        self.entries.iter()
    }
}
