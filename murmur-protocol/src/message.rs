//! Datagram encoding and decoding
//!
//! Format: `<NAME>: <BODY>`
//! - NAME: sender name, never empty, never containing the separator
//! - SEPARATOR: the two characters `": "`
//! - BODY: everything after the first separator

use heapless::String;

/// Name/body separator
pub const SEPARATOR: &str = ": ";

/// Maximum datagram size in bytes (packet radio payload limit)
pub const MAX_DATAGRAM_LEN: usize = 251;

/// Maximum sender name length
pub const MAX_NAME_LEN: usize = 16;

/// Maximum body length that always fits beside a full-length name
pub const MAX_BODY_LEN: usize = MAX_DATAGRAM_LEN - MAX_NAME_LEN - SEPARATOR.len();

/// Owned datagram text
pub type Datagram = String<MAX_DATAGRAM_LEN>;

/// Errors that can occur while splitting or building a datagram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatError {
    /// No `": "` separator in the text
    MissingSeparator,
    /// Nothing before the separator
    EmptyName,
    /// Name would itself contain the separator
    SeparatorInName,
    /// Body would contain the separator and break decoding on the far side
    SeparatorInBody,
    /// Encoded text does not fit in a datagram
    TooLong,
    /// Received bytes are not valid UTF-8
    InvalidUtf8,
}

/// A datagram split into sender name and body
///
/// Borrows from the text it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Message<'a> {
    /// Sender name (also the cipher key base)
    pub name: &'a str,
    /// Message body
    pub body: &'a str,
}

impl<'a> Message<'a> {
    /// Build a message for sending
    ///
    /// Rejects parts that would not decode back to the same pair.
    pub fn new(name: &'a str, body: &'a str) -> Result<Self, FormatError> {
        if name.is_empty() {
            return Err(FormatError::EmptyName);
        }
        if name.contains(SEPARATOR) {
            return Err(FormatError::SeparatorInName);
        }
        if body.contains(SEPARATOR) {
            return Err(FormatError::SeparatorInBody);
        }
        Ok(Self { name, body })
    }

    /// Split datagram text at the first separator
    pub fn parse(text: &'a str) -> Result<Self, FormatError> {
        let (name, body) = text
            .split_once(SEPARATOR)
            .ok_or(FormatError::MissingSeparator)?;

        if name.is_empty() {
            return Err(FormatError::EmptyName);
        }

        Ok(Self { name, body })
    }

    /// Length of the encoded form in bytes
    pub fn encoded_len(&self) -> usize {
        self.name.len() + SEPARATOR.len() + self.body.len()
    }

    /// Encode into an owned datagram
    pub fn encode(&self) -> Result<Datagram, FormatError> {
        let mut out = Datagram::new();
        self.encode_into(&mut out)?;
        Ok(out)
    }

    /// Encode into any heapless string, replacing its contents
    pub fn encode_into<const N: usize>(&self, out: &mut String<N>) -> Result<(), FormatError> {
        if self.encoded_len() > N {
            return Err(FormatError::TooLong);
        }

        out.clear();
        out.push_str(self.name).map_err(|_| FormatError::TooLong)?;
        out.push_str(SEPARATOR).map_err(|_| FormatError::TooLong)?;
        out.push_str(self.body).map_err(|_| FormatError::TooLong)?;
        Ok(())
    }
}

/// Copy raw received bytes into an owned datagram
pub fn datagram_from_bytes(bytes: &[u8]) -> Result<Datagram, FormatError> {
    let text = core::str::from_utf8(bytes).map_err(|_| FormatError::InvalidUtf8)?;
    let mut datagram = Datagram::new();
    datagram.push_str(text).map_err(|_| FormatError::TooLong)?;
    Ok(datagram)
}
