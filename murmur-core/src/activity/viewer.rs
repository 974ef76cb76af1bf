//! Incoming message viewer (receive mode)
//!
//! Shows queued messages oldest first, decrypted. B dismisses the shown
//! message; touch leaves the rest of the queue untouched. Entries that
//! cannot be decoded are discarded without being shown.
//!
//! Entries are always taken from the front of the queue and the queue is
//! re-checked after every dismissal, so removing an entry can never
//! cause the one behind it to be skipped.

use murmur_hal::MatrixDisplay;

use super::input::InputSample;
use crate::cipher;
use crate::inbox::IncomingQueue;
use crate::state::{Outcome, Step};

/// Viewer states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ViewerState {
    /// Oldest entry not yet presented
    Next,
    /// Oldest entry on the display, waiting for dismiss
    Showing,
    /// Queue exhausted
    Drained,
}

/// Step-through viewer for the incoming queue
#[derive(Debug, Clone)]
pub struct InboxViewer {
    state: ViewerState,
    shown: u16,
    discarded: u16,
}

impl Default for InboxViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl InboxViewer {
    /// Start viewing from the oldest entry
    pub fn new() -> Self {
        Self {
            state: ViewerState::Next,
            shown: 0,
            discarded: 0,
        }
    }

    /// Current state
    pub fn state(&self) -> ViewerState {
        self.state
    }

    /// Messages presented so far
    pub fn shown(&self) -> u16 {
        self.shown
    }

    /// Undecodable entries dropped so far
    pub fn discarded(&self) -> u16 {
        self.discarded
    }

    /// Feed one input sample
    pub fn step<D: MatrixDisplay>(
        &mut self,
        input: InputSample,
        inbox: &mut IncomingQueue,
        display: &mut D,
    ) -> Step {
        if self.state == ViewerState::Next {
            self.present(inbox, display);
        }

        match self.state {
            ViewerState::Showing => {
                if input.b_pressed {
                    inbox.dismiss();
                    self.state = ViewerState::Next;
                    Step::Pending
                } else if input.touched {
                    Step::Done(Outcome::AdvanceMode)
                } else {
                    Step::Pending
                }
            }
            ViewerState::Drained => {
                if input.touched {
                    Step::Done(Outcome::AdvanceMode)
                } else {
                    Step::Done(Outcome::Completed)
                }
            }
            ViewerState::Next => Step::Pending,
        }
    }

    /// Show the oldest decodable entry, dropping bad ones on the way
    fn present<D: MatrixDisplay>(&mut self, inbox: &mut IncomingQueue, display: &mut D) {
        while let Some(entry) = inbox.front() {
            match cipher::decrypt(entry) {
                Ok(plain) => {
                    display.scroll_text(&plain);
                    self.shown = self.shown.saturating_add(1);
                    self.state = ViewerState::Showing;
                    return;
                }
                Err(_err) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Discarding undecodable datagram: {}", _err);
                    inbox.dismiss();
                    self.discarded = self.discarded.saturating_add(1);
                }
            }
        }

        self.state = ViewerState::Drained;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{datagram, idle, press_b, touch, DisplayEvent, RecordingDisplay};

    fn queue_of(entries: &[&str]) -> IncomingQueue {
        let mut inbox = IncomingQueue::new();
        for entry in entries {
            inbox.push(datagram(entry)).unwrap();
        }
        inbox
    }

    fn remaining(inbox: &IncomingQueue) -> std::vec::Vec<std::string::String> {
        inbox.iter().map(|d| d.as_str().into()).collect()
    }

    #[test]
    fn test_empty_queue_completes_immediately() {
        let mut viewer = InboxViewer::new();
        let mut inbox = IncomingQueue::new();
        let mut display = RecordingDisplay::default();

        let step = viewer.step(idle(), &mut inbox, &mut display);
        assert_eq!(step, Step::Done(Outcome::Completed));
        assert!(display.events.is_empty());
    }

    #[test]
    fn test_empty_queue_touch_advances() {
        let mut viewer = InboxViewer::new();
        let mut inbox = IncomingQueue::new();
        let mut display = RecordingDisplay::default();

        let step = viewer.step(touch(), &mut inbox, &mut display);
        assert_eq!(step, Step::Done(Outcome::AdvanceMode));
    }

    #[test]
    fn test_shows_decrypted_oldest_first() {
        let mut viewer = InboxViewer::new();
        let mut inbox = queue_of(&["MATS: TEDC X", "MATS: TA"]);
        let mut display = RecordingDisplay::default();

        assert_eq!(viewer.step(idle(), &mut inbox, &mut display), Step::Pending);
        assert_eq!(viewer.state(), ViewerState::Showing);
        assert_eq!(display.events, [DisplayEvent::Scroll("MATS: HELLOX".into())]);

        // Waiting does not re-scroll or dismiss
        viewer.step(idle(), &mut inbox, &mut display);
        assert_eq!(display.events.len(), 1);
        assert_eq!(inbox.len(), 2);
    }

    #[test]
    fn test_two_dismissals_leave_third() {
        let mut viewer = InboxViewer::new();
        let mut inbox = queue_of(&["A: B", "A: C", "A: D"]);
        let mut display = RecordingDisplay::default();

        viewer.step(idle(), &mut inbox, &mut display);
        viewer.step(press_b(), &mut inbox, &mut display);
        viewer.step(press_b(), &mut inbox, &mut display);
        let step = viewer.step(touch(), &mut inbox, &mut display);

        assert_eq!(step, Step::Done(Outcome::AdvanceMode));
        assert_eq!(remaining(&inbox), ["A: D"]);
        assert_eq!(viewer.shown(), 3);
    }

    #[test]
    fn test_abort_keeps_shown_entry() {
        let mut viewer = InboxViewer::new();
        let mut inbox = queue_of(&["A: B", "A: C", "A: D"]);
        let before = remaining(&inbox);
        let mut display = RecordingDisplay::default();

        viewer.step(idle(), &mut inbox, &mut display);
        let step = viewer.step(touch(), &mut inbox, &mut display);

        assert_eq!(step, Step::Done(Outcome::AdvanceMode));
        assert_eq!(remaining(&inbox), before);
    }

    #[test]
    fn test_dismiss_all_completes() {
        let mut viewer = InboxViewer::new();
        let mut inbox = queue_of(&["A: B", "A: C"]);
        let mut display = RecordingDisplay::default();

        viewer.step(idle(), &mut inbox, &mut display);
        viewer.step(press_b(), &mut inbox, &mut display);
        assert_eq!(viewer.step(press_b(), &mut inbox, &mut display), Step::Pending);
        assert_eq!(
            viewer.step(idle(), &mut inbox, &mut display),
            Step::Done(Outcome::Completed)
        );
        assert!(inbox.is_empty());
        assert_eq!(viewer.state(), ViewerState::Drained);
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let mut viewer = InboxViewer::new();
        let mut inbox = queue_of(&["NO SEPARATOR", "A: b!", "A: C"]);
        let mut display = RecordingDisplay::default();

        viewer.step(idle(), &mut inbox, &mut display);

        assert_eq!(viewer.state(), ViewerState::Showing);
        assert_eq!(viewer.discarded(), 2);
        // A: C decrypts with key A (shift 0)
        assert_eq!(display.events, [DisplayEvent::Scroll("A: C".into())]);
        assert_eq!(remaining(&inbox), ["A: C"]);
    }

    #[test]
    fn test_only_malformed_entries_drain() {
        let mut viewer = InboxViewer::new();
        let mut inbox = queue_of(&["JUNK"]);
        let mut display = RecordingDisplay::default();

        let step = viewer.step(idle(), &mut inbox, &mut display);
        assert_eq!(step, Step::Done(Outcome::Completed));
        assert!(inbox.is_empty());
        assert!(display.events.is_empty());
    }
}
