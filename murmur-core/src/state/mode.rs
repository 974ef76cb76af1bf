//! Mode definition
//!
//! Modes advance cyclically: Send -> Receive -> Configure -> Send.

use murmur_hal::Icon;

/// Activity selected by the mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Compose and send a message
    Send,
    /// View queued incoming messages
    Receive,
    /// Change the radio group
    Configure,
}

impl Mode {
    /// Map a raw counter value to a mode
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Mode::Send),
            1 => Some(Mode::Receive),
            2 => Some(Mode::Configure),
            _ => None,
        }
    }

    /// Raw counter value of this mode
    pub fn index(self) -> u8 {
        match self {
            Mode::Send => 0,
            Mode::Receive => 1,
            Mode::Configure => 2,
        }
    }

    /// Next mode in the cycle
    pub fn next(self) -> Self {
        match self {
            Mode::Send => Mode::Receive,
            Mode::Receive => Mode::Configure,
            Mode::Configure => Mode::Send,
        }
    }

    /// Indicator shown when the mode's activity starts
    pub fn icon(self) -> Icon {
        match self {
            Mode::Send => Icon::ArrowNorth,
            Mode::Receive => Icon::ArrowSouth,
            Mode::Configure => Icon::Settings,
        }
    }
}

/// Raw mode counter
///
/// The advance signal only ever increments the counter. A value past
/// the last mode reads as [`Mode::Send`] and is folded back to it by the
/// controller on the next tick, without running an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeCounter {
    raw: u8,
}

impl ModeCounter {
    /// Start in send mode
    pub const fn new() -> Self {
        Self { raw: 0 }
    }

    /// Raw counter value
    pub fn raw(&self) -> u8 {
        self.raw
    }

    /// Mode if the counter is in range
    pub fn current(&self) -> Option<Mode> {
        Mode::from_index(self.raw)
    }

    /// Effective mode; out-of-range counts as send
    pub fn mode(&self) -> Mode {
        self.current().unwrap_or(Mode::Send)
    }

    /// Handle the advance-mode signal
    pub fn advance(&mut self) {
        self.raw = self.raw.wrapping_add(1);
    }

    /// Fold an out-of-range counter back to send
    ///
    /// Returns true if the counter was out of range.
    pub fn normalize(&mut self) -> bool {
        if self.current().is_none() {
            self.raw = Mode::Send.index();
            true
        } else {
            false
        }
    }
}
