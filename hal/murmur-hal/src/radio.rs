//! Packet radio abstraction
//!
//! The radio carries short text datagrams on a shared broadcast channel.
//! Stations only hear datagrams sent on their own group.

/// Highest selectable radio group
pub const MAX_GROUP: u8 = 255;

/// Errors reported by the radio transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RadioError {
    /// Radio has not been enabled
    Disabled,
    /// Datagram exceeds the maximum payload size
    PayloadTooLarge,
    /// Group value rejected by the transport
    InvalidGroup,
    /// Underlying hardware fault
    Hardware,
}

/// Trait for the packet radio transport
///
/// Sending is fire-and-forget; there is no delivery guarantee.
pub trait Radio {
    /// Power up the radio
    fn enable(&mut self) -> Result<(), RadioError>;

    /// Select the shared channel
    fn set_group(&mut self, group: u8) -> Result<(), RadioError>;

    /// Broadcast one datagram
    fn send(&mut self, datagram: &str) -> Result<(), RadioError>;

    /// Poll for a received datagram
    ///
    /// Returns `Ok(Some(len))` after copying one buffered datagram into
    /// `buf`, or `Ok(None)` if nothing is pending. Never blocks.
    fn receive(&mut self, buf: &mut [u8]) -> Result<Option<usize>, RadioError>;
}

impl<T: Radio + ?Sized> Radio for &mut T {
    fn enable(&mut self) -> Result<(), RadioError> {
        (**self).enable()
    }

    fn set_group(&mut self, group: u8) -> Result<(), RadioError> {
        (**self).set_group(group)
    }

    fn send(&mut self, datagram: &str) -> Result<(), RadioError> {
        (**self).send(datagram)
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<Option<usize>, RadioError> {
        (**self).receive(buf)
    }
}
