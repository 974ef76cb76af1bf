//! Session mode state machine
//!
//! The single input surface is multiplexed across three activities. The
//! mode decides which one owns the buttons on the next tick; only the
//! advance-mode touch moves it.

pub mod mode;
pub mod outcome;

pub use mode::{Mode, ModeCounter};
pub use outcome::{Outcome, Step};
