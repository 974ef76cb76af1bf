//! Radio group adjustment (configure mode)
//!
//! A steps the group down, B steps it up, both wrapping at the ends. The
//! new group is only committed once both buttons are held together;
//! touch abandons the change.

use core::fmt::Write;

use heapless::String;
use murmur_hal::MatrixDisplay;

use super::input::InputSample;
use crate::config::RadioGroup;
use crate::state::{Outcome, Step};

/// Channel config states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelState {
    /// Stepping the pending group
    Adjusting,
    /// Both buttons held; pending group should be applied
    Committed,
    /// Advance-mode touch seen; pending group dropped
    Aborted,
}

/// Interactive group selector
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    state: ChannelState,
    pending: RadioGroup,
}

impl ChannelConfig {
    /// Start adjusting from the current group
    pub fn new(current: RadioGroup) -> Self {
        Self {
            state: ChannelState::Adjusting,
            pending: current,
        }
    }

    /// Current state
    pub fn state(&self) -> ChannelState {
        self.state
    }

    /// Group as adjusted so far
    pub fn pending(&self) -> RadioGroup {
        self.pending
    }

    /// Feed one input sample
    pub fn step<D: MatrixDisplay>(&mut self, input: InputSample, display: &mut D) -> Step {
        match self.state {
            ChannelState::Committed => return Step::Done(Outcome::Completed),
            ChannelState::Aborted => return Step::Done(Outcome::AdvanceMode),
            ChannelState::Adjusting => {}
        }

        // Level-triggered: both buttons must be down at the same time
        if input.both_held() {
            self.state = ChannelState::Committed;
            return Step::Done(Outcome::Completed);
        }

        if input.a_pressed {
            self.pending.decrement();
            show_group(self.pending, display);
        } else if input.b_pressed {
            self.pending.increment();
            show_group(self.pending, display);
        }

        if input.touched {
            self.state = ChannelState::Aborted;
            return Step::Done(Outcome::AdvanceMode);
        }

        Step::Pending
    }
}

fn show_group<D: MatrixDisplay>(group: RadioGroup, display: &mut D) {
    let mut text: String<3> = String::new();
    // u8 is at most three digits
    let _ = write!(text, "{}", group.value());
    display.scroll_text(&text);
}
