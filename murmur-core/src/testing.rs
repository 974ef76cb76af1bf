//! Test doubles for the hardware traits

use std::collections::VecDeque;
use std::string::String;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use murmur_hal::{Icon, MatrixDisplay, Radio, RadioError};
use murmur_protocol::Datagram;

use crate::activity::{InputSample, InputSurface};

pub fn idle() -> InputSample {
    InputSample::default()
}

pub fn press_a() -> InputSample {
    InputSample {
        a_pressed: true,
        ..InputSample::default()
    }
}

pub fn press_b() -> InputSample {
    InputSample {
        b_pressed: true,
        ..InputSample::default()
    }
}

/// Both edges in one poll, buttons still down
pub fn press_both() -> InputSample {
    InputSample {
        a_pressed: true,
        b_pressed: true,
        a_held: true,
        b_held: true,
        touched: false,
    }
}

/// Both buttons down, no fresh edges
pub fn hold_both() -> InputSample {
    InputSample {
        a_held: true,
        b_held: true,
        ..InputSample::default()
    }
}

pub fn touch() -> InputSample {
    InputSample {
        touched: true,
        ..InputSample::default()
    }
}

pub fn datagram(text: &str) -> Datagram {
    Datagram::try_from(text).unwrap()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
    Icon(Icon),
    Symbol(char),
    Scroll(String),
}

#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub events: Vec<DisplayEvent>,
}

impl MatrixDisplay for RecordingDisplay {
    fn show_icon(&mut self, icon: Icon) {
        self.events.push(DisplayEvent::Icon(icon));
    }

    fn show_symbol(&mut self, symbol: char) {
        self.events.push(DisplayEvent::Symbol(symbol));
    }

    fn scroll_text(&mut self, text: &str) {
        self.events.push(DisplayEvent::Scroll(text.into()));
    }
}

/// Replays a fixed list of samples; running dry is a test bug
#[derive(Debug, Default)]
pub struct ScriptedInputs {
    pub script: VecDeque<InputSample>,
    pub samples_taken: usize,
    pub discards: usize,
    pub pending_a: bool,
    pub pending_b: bool,
}

impl ScriptedInputs {
    pub fn extend(&mut self, samples: &[InputSample]) {
        self.script.extend(samples.iter().copied());
    }
}

impl InputSurface for ScriptedInputs {
    fn sample(&mut self) -> InputSample {
        self.samples_taken += 1;
        self.script
            .pop_front()
            .expect("input script exhausted")
    }

    fn discard_pending(&mut self) {
        self.discards += 1;
        self.pending_a = false;
        self.pending_b = false;
    }
}

#[derive(Debug, Default)]
pub struct MockRadio {
    pub enabled: bool,
    pub groups: Vec<u8>,
    pub sent: Vec<String>,
    pub inbound: VecDeque<Vec<u8>>,
    pub polls: usize,
    pub fail_enable: bool,
    pub fail_send: bool,
}

impl Radio for MockRadio {
    fn enable(&mut self) -> Result<(), RadioError> {
        if self.fail_enable {
            return Err(RadioError::Hardware);
        }
        self.enabled = true;
        Ok(())
    }

    fn set_group(&mut self, group: u8) -> Result<(), RadioError> {
        self.groups.push(group);
        Ok(())
    }

    fn send(&mut self, datagram: &str) -> Result<(), RadioError> {
        if !self.enabled {
            return Err(RadioError::Disabled);
        }
        if self.fail_send {
            return Err(RadioError::Hardware);
        }
        self.sent.push(datagram.into());
        Ok(())
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<Option<usize>, RadioError> {
        self.polls += 1;
        match self.inbound.pop_front() {
            Some(bytes) => {
                let len = bytes.len().min(buf.len());
                buf[..len].copy_from_slice(&bytes[..len]);
                Ok(Some(len))
            }
            None => Ok(None),
        }
    }
}

#[derive(Debug, Default)]
pub struct MockDelay {
    pub calls_ms: Vec<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.calls_ms.push(ms);
    }
}
