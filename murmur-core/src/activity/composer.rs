//! Message composition (send mode)
//!
//! One symbol at a time:
//! - B steps the cursor through the alphabet (wrapping after space)
//! - A accepts the symbol under the cursor and resets it to `A`
//! - A and B together finish the message
//! - Touch abandons the message
//!
//! The sealed datagram is `NAME: BODY` with the body ciphered.

use heapless::String;
use murmur_hal::MatrixDisplay;
use murmur_protocol::{Datagram, Message, MAX_BODY_LEN};

use super::input::InputSample;
use crate::alphabet::LetterCursor;
use crate::cipher::{self, CipherError};
use crate::config::SenderName;
use crate::state::{Outcome, Step};

/// Composer states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ComposerState {
    /// Picking the next symbol
    SelectCharacter,
    /// Finish gesture seen; body is final
    Finished,
    /// Advance-mode touch seen; body discarded
    Aborted,
}

/// Character-by-character message builder
#[derive(Debug, Clone)]
pub struct MessageComposer {
    state: ComposerState,
    cursor: LetterCursor,
    body: String<MAX_BODY_LEN>,
    /// Cursor symbol needs to be shown
    dirty: bool,
}

impl Default for MessageComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageComposer {
    /// Start a fresh, empty body
    pub fn new() -> Self {
        Self {
            state: ComposerState::SelectCharacter,
            cursor: LetterCursor::new(),
            body: String::new(),
            dirty: true,
        }
    }

    /// Current state
    pub fn state(&self) -> ComposerState {
        self.state
    }

    /// Body accepted so far
    pub fn body(&self) -> &str {
        self.body.as_str()
    }

    /// Symbol cursor
    pub fn cursor(&self) -> LetterCursor {
        self.cursor
    }

    /// Feed one input sample
    pub fn step<D: MatrixDisplay>(&mut self, input: InputSample, display: &mut D) -> Step {
        match self.state {
            ComposerState::Finished => return Step::Done(Outcome::Completed),
            ComposerState::Aborted => return Step::Done(Outcome::AdvanceMode),
            ComposerState::SelectCharacter => {}
        }

        if self.dirty {
            display.show_symbol(self.cursor.symbol());
            self.dirty = false;
        }

        if input.both_pressed() {
            self.state = ComposerState::Finished;
            return Step::Done(Outcome::Completed);
        }

        if input.a_pressed {
            self.accept();
            return Step::Pending;
        }

        if input.b_pressed {
            self.cursor.advance();
            self.dirty = true;
        }

        if input.touched {
            self.body.clear();
            self.state = ComposerState::Aborted;
            return Step::Done(Outcome::AdvanceMode);
        }

        Step::Pending
    }

    /// Append the cursor symbol and start the next character
    fn accept(&mut self) {
        if self.body.push(self.cursor.symbol()).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Message body full, symbol dropped");
        }
        self.cursor.reset();
        self.dirty = true;
    }

    /// Build the ciphered datagram for a finished message
    ///
    /// Returns `Ok(None)` when nothing should be sent: the message was
    /// aborted or no symbol was ever accepted.
    pub fn seal(&self, name: &SenderName) -> Result<Option<Datagram>, CipherError> {
        if self.state != ComposerState::Finished || self.body.is_empty() {
            return Ok(None);
        }

        let plain = Message::new(name.as_str(), self.body.as_str())?.encode()?;
        cipher::encrypt(&plain).map(Some)
    }
}
