//! Mode controller
//!
//! The top-level state machine, called once per tick from the outer loop:
//! - Shows the current mode's icon
//! - Runs that mode's activity until it finishes or is abandoned
//! - Polls the radio once and queues anything received
//!
//! Activities block the tick while they poll inputs. The advance-mode
//! touch is the only way out of an unfinished activity.

use embedded_hal::delay::DelayNs;
use murmur_hal::{MatrixDisplay, Radio, RadioError};
use murmur_protocol::{datagram_from_bytes, MAX_DATAGRAM_LEN};

use crate::activity::{ChannelConfig, InboxViewer, InputSample, InputSurface, MessageComposer};
use crate::config::{RadioGroup, SenderName, SessionConfig};
use crate::inbox::IncomingQueue;
use crate::state::{Mode, ModeCounter, Outcome, Step};

/// Volatile state of one powered-on session
#[derive(Debug, Clone)]
pub struct Session {
    /// Our sender name
    pub name: SenderName,
    /// Radio group committed to the transport
    pub group: RadioGroup,
    /// Mode counter
    pub mode: ModeCounter,
    /// Received datagrams, still ciphered
    pub inbox: IncomingQueue,
    /// Settling delay after an advance-mode touch (ms)
    pub settle_delay_ms: u32,
}

impl Session {
    /// Fresh session in send mode with an empty inbox
    pub fn new(config: SessionConfig) -> Self {
        Self {
            name: config.name,
            group: config.group,
            mode: ModeCounter::new(),
            inbox: IncomingQueue::new(),
            settle_delay_ms: config.settle_delay_ms,
        }
    }
}

/// Top-level controller owning the session and the collaborators
pub struct ModeController<I, D, R, Y> {
    session: Session,
    inputs: I,
    display: D,
    radio: R,
    delay: Y,
    rx_buf: [u8; MAX_DATAGRAM_LEN],
}

impl<I, D, R, Y> ModeController<I, D, R, Y>
where
    I: InputSurface,
    D: MatrixDisplay,
    R: Radio,
    Y: DelayNs,
{
    /// Enable the radio on the configured group and start in send mode
    pub fn new(
        config: SessionConfig,
        inputs: I,
        display: D,
        mut radio: R,
        delay: Y,
    ) -> Result<Self, RadioError> {
        radio.enable()?;
        radio.set_group(config.group.value())?;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Session started as {} on group {}",
            config.name.as_str(),
            config.group.value()
        );

        Ok(Self {
            session: Session::new(config),
            inputs,
            display,
            radio,
            delay,
            rx_buf: [0; MAX_DATAGRAM_LEN],
        })
    }

    /// Session state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Effective mode
    pub fn mode(&self) -> Mode {
        self.session.mode.mode()
    }

    /// Input surface
    pub fn inputs(&self) -> &I {
        &self.inputs
    }

    /// Display collaborator
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Radio collaborator
    pub fn radio(&self) -> &R {
        &self.radio
    }

    /// Run ticks forever
    pub fn run(&mut self) -> ! {
        loop {
            self.tick();
        }
    }

    /// One pass of the outer loop
    pub fn tick(&mut self) {
        match self.session.mode.current() {
            Some(mode) => {
                self.display.show_icon(mode.icon());

                let outcome = match mode {
                    Mode::Send => self.run_send(),
                    Mode::Receive => self.run_receive(),
                    Mode::Configure => self.run_configure(),
                };

                if outcome == Outcome::AdvanceMode {
                    self.advance_mode();
                }
            }
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Mode counter {} out of range, back to send", self.session.mode.raw());
                self.session.mode.normalize();
            }
        }

        self.poll_radio();
    }

    fn run_send(&mut self) -> Outcome {
        self.inputs.discard_pending();

        let mut composer = MessageComposer::new();
        let outcome = drive(&mut self.inputs, |input| {
            composer.step(input, &mut self.display)
        });

        match composer.seal(&self.session.name) {
            Ok(Some(datagram)) => match self.radio.send(&datagram) {
                Ok(()) => {
                    #[cfg(feature = "defmt")]
                    defmt::info!("Sent {} byte message", datagram.len());
                }
                Err(_err) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Radio send failed: {}", _err);
                }
            },
            Ok(None) => {}
            Err(_err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Could not seal message: {}", _err);
            }
        }

        outcome
    }

    fn run_receive(&mut self) -> Outcome {
        self.inputs.discard_pending();

        let mut viewer = InboxViewer::new();
        drive(&mut self.inputs, |input| {
            viewer.step(input, &mut self.session.inbox, &mut self.display)
        })
    }

    fn run_configure(&mut self) -> Outcome {
        self.inputs.discard_pending();

        let mut channel = ChannelConfig::new(self.session.group);
        let outcome = drive(&mut self.inputs, |input| {
            channel.step(input, &mut self.display)
        });

        if outcome == Outcome::Completed {
            let group = channel.pending();
            match self.radio.set_group(group.value()) {
                Ok(()) => {
                    self.session.group = group;
                    #[cfg(feature = "defmt")]
                    defmt::info!("Radio group set to {}", group.value());
                }
                Err(_err) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Radio rejected group {}: {}", group.value(), _err);
                }
            }
        }

        outcome
    }

    fn advance_mode(&mut self) {
        self.session.mode.advance();

        #[cfg(feature = "defmt")]
        defmt::info!("Mode -> {}", self.session.mode.mode());

        self.delay.delay_ms(self.session.settle_delay_ms);
    }

    /// Take at most one datagram from the radio
    fn poll_radio(&mut self) {
        // Leave it buffered in the transport until there is room
        if self.session.inbox.is_full() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Inbox full, radio poll skipped");
            return;
        }

        let len = match self.radio.receive(&mut self.rx_buf) {
            Ok(Some(len)) => len.min(MAX_DATAGRAM_LEN),
            Ok(None) => return,
            Err(_err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Radio receive failed: {}", _err);
                return;
            }
        };

        match datagram_from_bytes(&self.rx_buf[..len]) {
            Ok(datagram) if datagram.is_empty() => {}
            Ok(datagram) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Queued datagram ({} bytes)", datagram.len());
                // Cannot fail: fullness checked above
                let _ = self.session.inbox.push(datagram);
            }
            Err(_err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Dropping unreadable datagram: {}", _err);
            }
        }
    }
}

/// Feed input samples to an activity until it finishes
fn drive<I, F>(inputs: &mut I, mut step: F) -> Outcome
where
    I: InputSurface,
    F: FnMut(InputSample) -> Step,
{
    loop {
        if let Step::Done(outcome) = step(inputs.sample()) {
            return outcome;
        }
    }
}
