//! Murmur radio wire format
//!
//! Every datagram on the shared channel is a short text string:
//!
//! ```text
//! ┌──────────┬────────┬──────────────────────┐
//! │ NAME     │ ": "   │ BODY                 │
//! │ 1–16 ch  │ 2 ch   │ ciphered or plain    │
//! └──────────┴────────┴──────────────────────┘
//! ```
//!
//! The first occurrence of the separator splits the name from the body.
//! The name doubles as the cipher key base, so it always travels in the
//! clear; only the body is shifted.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod message;

pub use message::{
    datagram_from_bytes, Datagram, FormatError, Message, MAX_BODY_LEN, MAX_DATAGRAM_LEN,
    MAX_NAME_LEN, SEPARATOR,
};
