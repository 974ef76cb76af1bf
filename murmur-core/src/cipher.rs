//! Name-keyed substitution cipher
//!
//! A Vigenère-style shift over the 27-symbol alphabet. The key is the
//! sender name carried in the datagram itself, repeated until it covers
//! the body:
//!
//! ```text
//! name  MATS
//! body  H E L L O X
//! key   M A T S M A
//! out   T E D C _ X     (H+M, E+A, L+T, L+S, O+M, X+A  mod 27)
//! ```
//!
//! This keeps payloads from crossing the shared channel as plain text;
//! it is not meant to resist a determined reader.

use murmur_protocol::{Datagram, FormatError, Message, SEPARATOR};

use crate::alphabet::{self, ALPHABET_LEN};

/// Errors from decomposing or shifting a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CipherError {
    /// Text is not a well-formed `NAME: BODY` datagram
    Format(FormatError),
    /// Character outside the alphabet in the name or body
    UnknownSymbol(char),
    /// Result does not fit in a datagram
    Overflow,
}

impl From<FormatError> for CipherError {
    fn from(err: FormatError) -> Self {
        CipherError::Format(err)
    }
}

/// Repeating key derived from a sender name
///
/// Yields exactly `len` characters: the name cycled from its start. A
/// name longer than the body is only consulted up to the body length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherKey<'a> {
    base: &'a str,
    len: usize,
}

impl<'a> CipherKey<'a> {
    /// Derive a key of `len` characters from `base`
    pub fn new(base: &'a str, len: usize) -> Self {
        Self { base, len }
    }

    /// Key base (the unrepeated sender name)
    pub fn base(&self) -> &'a str {
        self.base
    }

    /// Number of key characters consulted
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no key characters are consulted
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Key characters, one per body character
    pub fn chars(&self) -> impl Iterator<Item = char> + 'a {
        self.base.chars().cycle().take(self.len)
    }
}

/// A message split into key, body and name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decomposition<'a> {
    /// Key covering the body
    pub key: CipherKey<'a>,
    /// Body text
    pub body: &'a str,
    /// Sender name
    pub name: &'a str,
}

/// Split a message at its first separator and derive the key
pub fn decompose(message: &str) -> Result<Decomposition<'_>, CipherError> {
    let Message { name, body } = Message::parse(message)?;
    let key = CipherKey::new(name, body.chars().count());
    Ok(Decomposition { key, body, name })
}

/// Shift direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Encrypt the body of a `NAME: BODY` message
pub fn encrypt(plain: &str) -> Result<Datagram, CipherError> {
    shift(plain, Direction::Forward)
}

/// Decrypt the body of a `NAME: BODY` message
pub fn decrypt(ciphered: &str) -> Result<Datagram, CipherError> {
    shift(ciphered, Direction::Backward)
}

fn shift(message: &str, direction: Direction) -> Result<Datagram, CipherError> {
    let parts = decompose(message)?;

    let mut out = Datagram::new();
    out.push_str(parts.name).map_err(|_| CipherError::Overflow)?;
    out.push_str(SEPARATOR).map_err(|_| CipherError::Overflow)?;

    for (symbol, key) in parts.body.chars().zip(parts.key.chars()) {
        let s = alphabet::index_of(symbol).ok_or(CipherError::UnknownSymbol(symbol))?;
        let k = alphabet::index_of(key).ok_or(CipherError::UnknownSymbol(key))?;

        let n = ALPHABET_LEN as u8;
        let shifted = match direction {
            Direction::Forward => (s + k) % n,
            Direction::Backward => (s + n - k) % n,
        };

        out.push(alphabet::symbol_at(shifted))
            .map_err(|_| CipherError::Overflow)?;
    }

    Ok(out)
}
