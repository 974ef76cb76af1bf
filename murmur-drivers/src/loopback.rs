//! In-memory packet radio
//!
//! An [`Ether`] is a shared broadcast medium. Each attached
//! [`LoopbackRadio`] is one station. A datagram sent by a station is
//! copied into the receive buffer of every other enabled station on the
//! same group. Like the real transport, a station buffers only a few
//! datagrams; anything arriving while its buffer is full is lost.

use core::cell::RefCell;

use heapless::{Deque, Vec};
use murmur_hal::{Radio, RadioError};
use murmur_protocol::{Datagram, MAX_DATAGRAM_LEN};

/// Stations one medium can carry
pub const MAX_STATIONS: usize = 8;

/// Datagrams buffered per station
pub const RX_QUEUE_LEN: usize = 3;

#[derive(Debug, Default)]
struct Station {
    enabled: bool,
    group: u8,
    rx: Deque<Datagram, RX_QUEUE_LEN>,
    dropped: u32,
}

/// Shared broadcast medium
#[derive(Debug, Default)]
pub struct Ether {
    stations: RefCell<Vec<Station, MAX_STATIONS>>,
}

impl Ether {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station, powered off on group 0
    ///
    /// Returns `None` once [`MAX_STATIONS`] are attached.
    pub fn attach(&self) -> Option<LoopbackRadio<'_>> {
        let mut stations = self.stations.borrow_mut();
        let id = stations.len();
        stations.push(Station::default()).ok()?;
        Some(LoopbackRadio { ether: self, id })
    }

    /// Datagrams lost to full receive buffers at a station
    pub fn dropped(&self, id: usize) -> u32 {
        self.stations.borrow().get(id).map_or(0, |s| s.dropped)
    }

    fn broadcast(&self, from: usize, datagram: &Datagram) -> Result<(), RadioError> {
        let mut stations = self.stations.borrow_mut();
        let sender = stations.get(from).ok_or(RadioError::Hardware)?;
        if !sender.enabled {
            return Err(RadioError::Disabled);
        }
        let group = sender.group;

        for (id, station) in stations.iter_mut().enumerate() {
            if id == from || !station.enabled || station.group != group {
                continue;
            }
            if station.rx.push_back(datagram.clone()).is_err() {
                station.dropped = station.dropped.saturating_add(1);
                #[cfg(feature = "defmt")]
                defmt::debug!("Station {} buffer full, datagram lost", id);
            }
        }

        Ok(())
    }
}

/// One station on an [`Ether`]
#[derive(Debug)]
pub struct LoopbackRadio<'a> {
    ether: &'a Ether,
    id: usize,
}

impl LoopbackRadio<'_> {
    /// Station index on the medium
    pub fn id(&self) -> usize {
        self.id
    }

    fn with_station<T>(
        &self,
        f: impl FnOnce(&mut Station) -> Result<T, RadioError>,
    ) -> Result<T, RadioError> {
        let mut stations = self.ether.stations.borrow_mut();
        let station = stations.get_mut(self.id).ok_or(RadioError::Hardware)?;
        f(station)
    }
}

impl Radio for LoopbackRadio<'_> {
    fn enable(&mut self) -> Result<(), RadioError> {
        self.with_station(|s| {
            s.enabled = true;
            Ok(())
        })
    }

    fn set_group(&mut self, group: u8) -> Result<(), RadioError> {
        self.with_station(|s| {
            s.group = group;
            Ok(())
        })
    }

    fn send(&mut self, datagram: &str) -> Result<(), RadioError> {
        if datagram.len() > MAX_DATAGRAM_LEN {
            return Err(RadioError::PayloadTooLarge);
        }
        let datagram = Datagram::try_from(datagram).map_err(|_| RadioError::PayloadTooLarge)?;
        self.ether.broadcast(self.id, &datagram)
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<Option<usize>, RadioError> {
        self.with_station(|s| {
            if !s.enabled {
                return Err(RadioError::Disabled);
            }
            let Some(datagram) = s.rx.pop_front() else {
                return Ok(None);
            };
            let bytes = datagram.as_bytes();
            let dest = buf.get_mut(..bytes.len()).ok_or(RadioError::PayloadTooLarge)?;
            dest.copy_from_slice(bytes);
            Ok(Some(bytes.len()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use embedded_hal::delay::DelayNs;
    use murmur_core::activity::{InputSample, InputSurface};
    use murmur_core::config::SessionConfig;
    use murmur_core::state::Mode;
    use murmur_core::ModeController;

    use crate::matrix::LedMatrix;

    fn recv(radio: &mut LoopbackRadio<'_>) -> Option<std::string::String> {
        let mut buf = [0u8; MAX_DATAGRAM_LEN];
        radio
            .receive(&mut buf)
            .unwrap()
            .map(|len| core::str::from_utf8(&buf[..len]).unwrap().into())
    }

    #[test]
    fn test_broadcast_reaches_same_group_only() {
        let ether = Ether::new();
        let mut a = ether.attach().unwrap();
        let mut b = ether.attach().unwrap();
        let mut c = ether.attach().unwrap();
        for radio in [&mut a, &mut b, &mut c] {
            radio.enable().unwrap();
        }
        c.set_group(9).unwrap();

        a.send("A: B").unwrap();

        assert_eq!(recv(&mut b).as_deref(), Some("A: B"));
        assert_eq!(recv(&mut b), None);
        assert_eq!(recv(&mut c), None);
        // No echo to the sender
        assert_eq!(recv(&mut a), None);
    }

    #[test]
    fn test_disabled_station_hears_nothing() {
        let ether = Ether::new();
        let mut a = ether.attach().unwrap();
        let mut b = ether.attach().unwrap();

        assert_eq!(a.send("A: B"), Err(RadioError::Disabled));
        a.enable().unwrap();
        a.send("A: B").unwrap();

        assert_eq!(b.receive(&mut [0; 8]), Err(RadioError::Disabled));
        b.enable().unwrap();
        assert_eq!(recv(&mut b), None);
    }

    #[test]
    fn test_receive_buffer_overflow_drops() {
        let ether = Ether::new();
        let mut a = ether.attach().unwrap();
        let mut b = ether.attach().unwrap();
        a.enable().unwrap();
        b.enable().unwrap();

        for text in ["A: B", "A: C", "A: D", "A: E"] {
            a.send(text).unwrap();
        }

        assert_eq!(ether.dropped(b.id()), 1);
        assert_eq!(recv(&mut b).as_deref(), Some("A: B"));
        assert_eq!(recv(&mut b).as_deref(), Some("A: C"));
        assert_eq!(recv(&mut b).as_deref(), Some("A: D"));
        assert_eq!(recv(&mut b), None);
    }

    #[test]
    fn test_payload_limit() {
        let ether = Ether::new();
        let mut a = ether.attach().unwrap();
        a.enable().unwrap();

        let long = "A".repeat(MAX_DATAGRAM_LEN + 1);
        assert_eq!(a.send(&long), Err(RadioError::PayloadTooLarge));
        assert_eq!(a.send(&long[..MAX_DATAGRAM_LEN]), Ok(()));
    }

    #[test]
    fn test_small_buffer_rejected() {
        let ether = Ether::new();
        let mut a = ether.attach().unwrap();
        let mut b = ether.attach().unwrap();
        a.enable().unwrap();
        b.enable().unwrap();

        a.send("HELLO: THERE").unwrap();
        assert_eq!(b.receive(&mut [0; 4]), Err(RadioError::PayloadTooLarge));
    }

    #[test]
    fn test_station_limit() {
        let ether = Ether::new();
        let radios: std::vec::Vec<_> = (0..MAX_STATIONS).map(|_| ether.attach()).collect();
        assert!(radios.iter().all(Option::is_some));
        assert!(ether.attach().is_none());
    }

    /// Replays a fixed list of samples
    #[derive(Default)]
    struct Script(VecDeque<InputSample>);

    impl Script {
        fn then(&mut self, sample: InputSample) -> &mut Self {
            self.0.push_back(sample);
            self
        }

        fn repeat(&mut self, sample: InputSample, times: usize) -> &mut Self {
            for _ in 0..times {
                self.0.push_back(sample);
            }
            self
        }
    }

    impl InputSurface for Script {
        fn sample(&mut self) -> InputSample {
            self.0.pop_front().expect("input script exhausted")
        }

        fn discard_pending(&mut self) {}
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    const A: InputSample = InputSample {
        a_pressed: true,
        b_pressed: false,
        a_held: false,
        b_held: false,
        touched: false,
    };
    const B: InputSample = InputSample {
        a_pressed: false,
        b_pressed: true,
        a_held: false,
        b_held: false,
        touched: false,
    };
    const BOTH: InputSample = InputSample {
        a_pressed: true,
        b_pressed: true,
        a_held: true,
        b_held: true,
        touched: false,
    };
    const TOUCH: InputSample = InputSample {
        a_pressed: false,
        b_pressed: false,
        a_held: false,
        b_held: false,
        touched: true,
    };
    const IDLE: InputSample = InputSample {
        a_pressed: false,
        b_pressed: false,
        a_held: false,
        b_held: false,
        touched: false,
    };

    #[test]
    fn test_two_devices_exchange_message() {
        let ether = Ether::new();

        // Alice types "HI": H is 7 steps from A, I is 8
        let mut alice_inputs = Script::default();
        alice_inputs
            .repeat(B, 7)
            .then(A)
            .repeat(B, 8)
            .then(A)
            .then(BOTH);

        // Bob idles in send mode long enough to hear it, then views it
        let mut bob_inputs = Script::default();
        bob_inputs.then(BOTH).then(TOUCH).then(IDLE).then(TOUCH);

        let mut alice = ModeController::new(
            SessionConfig::new("alice", 0).unwrap(),
            alice_inputs,
            LedMatrix::new(),
            ether.attach().unwrap(),
            NoDelay,
        )
        .unwrap();
        let mut bob = ModeController::new(
            SessionConfig::new("bob", 0).unwrap(),
            bob_inputs,
            LedMatrix::new(),
            ether.attach().unwrap(),
            NoDelay,
        )
        .unwrap();

        alice.tick();

        bob.tick();
        bob.tick();
        assert_eq!(bob.mode(), Mode::Receive);
        // H+A=H, I+L=T
        assert_eq!(
            bob.session().inbox.front().map(|d| d.as_str()),
            Some("ALICE: HT")
        );

        bob.tick();
        assert_eq!(bob.display().scrolling_text(), Some("ALICE: HI"));
        assert_eq!(bob.mode(), Mode::Configure);
        assert_eq!(bob.session().inbox.len(), 1);
    }

    #[test]
    fn test_devices_on_other_groups_are_isolated() {
        let ether = Ether::new();

        let mut alice_inputs = Script::default();
        alice_inputs.then(A).then(BOTH);
        let mut bob_inputs = Script::default();
        bob_inputs.then(BOTH);

        let mut alice = ModeController::new(
            SessionConfig::new("alice", 0).unwrap(),
            alice_inputs,
            LedMatrix::new(),
            ether.attach().unwrap(),
            NoDelay,
        )
        .unwrap();
        let mut bob = ModeController::new(
            SessionConfig::new("bob", 1).unwrap(),
            bob_inputs,
            LedMatrix::new(),
            ether.attach().unwrap(),
            NoDelay,
        )
        .unwrap();

        alice.tick();
        bob.tick();

        assert!(bob.session().inbox.is_empty());
        assert_eq!(bob.session().group.value(), 1);
    }
}
