//! Driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in murmur-hal:
//!
//! - Buttons and touch pad over `embedded-hal` input pins
//! - 5x5 LED matrix frame buffer with font, icons and scrolling
//! - In-memory loopback radio for running several devices on a host

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod button;
pub mod font;
pub mod loopback;
pub mod matrix;

pub use button::{EdgeButton, TouchPin};
pub use loopback::{Ether, LoopbackRadio};
pub use matrix::{Frame, LedMatrix};
