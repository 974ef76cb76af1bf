//! Murmur Hardware Abstraction Layer
//!
//! This crate defines the collaborator traits the chat engine talks to.
//! Board support code implements them for a concrete micro-controller;
//! `murmur-drivers` implements them over generic pins and in-memory
//! buffers for host simulation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  murmur-core (mode controller)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  murmur-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ murmur-       │       │ board support │
//! │   drivers     │       │   crates      │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`input::Button`], [`input::TouchPad`] - User input
//! - [`display::MatrixDisplay`] - 5x5 LED matrix output
//! - [`radio::Radio`] - Packet radio transport

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod input;
pub mod radio;

// Re-export key traits at crate root for convenience
pub use display::{Icon, MatrixDisplay};
pub use input::{Button, TouchPad};
pub use radio::{Radio, RadioError, MAX_GROUP};
