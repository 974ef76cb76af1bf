//! Configuration type definitions
//!
//! These types hold the settings a session starts from: who we are and
//! which radio group we talk on.

use core::fmt;

use heapless::String;
use murmur_protocol::MAX_NAME_LEN;

use crate::alphabet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Radio group used when none is configured
pub const DEFAULT_GROUP: u8 = 0;

/// Pause after the advance-mode touch, so one touch is not seen twice
pub const SETTLE_DELAY_MS: u32 = 500;

/// Errors that can occur while building a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Sender name is empty
    EmptyName,
    /// Sender name exceeds [`MAX_NAME_LEN`]
    NameTooLong,
    /// Sender name contains a character outside the alphabet
    InvalidSymbol(char),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyName => f.write_str("sender name is empty"),
            ConfigError::NameTooLong => {
                write!(f, "sender name longer than {} symbols", MAX_NAME_LEN)
            }
            ConfigError::InvalidSymbol(c) => write!(f, "sender name contains {:?}", c),
        }
    }
}

/// Sender name
///
/// Uppercased at construction and restricted to alphabet symbols, so it
/// can always serve as a cipher key.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String<MAX_NAME_LEN>", into = "String<MAX_NAME_LEN>")
)]
pub struct SenderName(String<MAX_NAME_LEN>);

impl SenderName {
    /// Normalize and validate a name
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let mut name = String::new();
        for c in raw.chars() {
            let upper = c.to_ascii_uppercase();
            if !alphabet::contains(upper) {
                return Err(ConfigError::InvalidSymbol(c));
            }
            name.push(upper).map_err(|_| ConfigError::NameTooLong)?;
        }

        if name.is_empty() {
            return Err(ConfigError::EmptyName);
        }

        Ok(Self(name))
    }

    /// Name as text
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String<MAX_NAME_LEN>> for SenderName {
    type Error = ConfigError;

    fn try_from(value: String<MAX_NAME_LEN>) -> Result<Self, Self::Error> {
        Self::new(value.as_str())
    }
}

impl From<SenderName> for String<MAX_NAME_LEN> {
    fn from(name: SenderName) -> Self {
        name.0
    }
}

/// Shared radio channel, 0..=255
///
/// Stepping past either end wraps around instead of clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct RadioGroup(u8);

impl RadioGroup {
    /// Create a group
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Raw group value
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Next group, 255 wraps to 0
    pub fn increment(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    /// Previous group, 0 wraps to 255
    pub fn decrement(&mut self) {
        self.0 = self.0.wrapping_sub(1);
    }
}

/// Settings a session starts from
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionConfig {
    /// Our sender name
    pub name: SenderName,
    /// Initial radio group
    pub group: RadioGroup,
    /// Settling delay after an advance-mode touch (ms)
    pub settle_delay_ms: u32,
}

impl SessionConfig {
    /// Create a configuration with the default settling delay
    pub fn new(name: &str, group: u8) -> Result<Self, ConfigError> {
        Ok(Self {
            name: SenderName::new(name)?,
            group: RadioGroup::new(group),
            settle_delay_ms: SETTLE_DELAY_MS,
        })
    }

    /// Override the settling delay
    pub fn with_settle_delay_ms(mut self, delay_ms: u32) -> Self {
        self.settle_delay_ms = delay_ms;
        self
    }
}
