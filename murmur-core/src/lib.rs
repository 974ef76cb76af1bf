//! Board-agnostic core logic for the Murmur radio chat engine
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Symbol alphabet shared by the input selector and the cipher
//! - Name-keyed substitution cipher for message bodies
//! - Incoming message queue
//! - Activity state machines (compose, view, channel config)
//! - Mode controller multiplexing the three buttons across activities
//! - Session configuration types

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod activity;
pub mod alphabet;
pub mod cipher;
pub mod config;
pub mod controller;
pub mod inbox;
pub mod state;

#[cfg(test)]
mod testing;

pub use controller::{ModeController, Session};
