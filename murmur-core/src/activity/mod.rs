//! Activity state machines
//!
//! Each activity owns the buttons while its mode is active. Activities are
//! explicit state machines fed one [`InputSample`] per poll; the
//! controller drives them until they report [`Step::Done`].
//!
//! [`Step::Done`]: crate::state::Step::Done

pub mod channel;
pub mod composer;
pub mod input;
pub mod viewer;

pub use channel::{ChannelConfig, ChannelState};
pub use composer::{ComposerState, MessageComposer};
pub use input::{Controls, InputSample, InputSurface};
pub use viewer::{InboxViewer, ViewerState};
