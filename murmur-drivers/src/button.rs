//! Pin-backed buttons and touch pad
//!
//! Both read a generic `embedded-hal` input pin. A pin read error is
//! treated as "not pressed" so a flaky line can never trigger an action.

use embedded_hal::digital::InputPin;
use murmur_hal::{Button, TouchPad};

fn read_level<P: InputPin>(pin: &mut P, active_low: bool) -> bool {
    let level = if active_low { pin.is_low() } else { pin.is_high() };

    match level {
        Ok(active) => active,
        Err(_) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("Input pin read failed");
            false
        }
    }
}

/// Push button with press latching
///
/// A press is latched on each released to pressed transition seen while
/// polling and held until `was_pressed` consumes it. Call [`poll`] often
/// enough to catch short presses.
///
/// [`poll`]: EdgeButton::poll
pub struct EdgeButton<P> {
    pin: P,
    /// If true, pressed = pin LOW
    active_low: bool,
    /// Level at the previous poll
    down: bool,
    latched: bool,
}

impl<P: InputPin> EdgeButton<P> {
    /// Create a new button
    ///
    /// # Arguments
    /// - `pin`: The GPIO input the button is wired to
    /// - `active_low`: If true, the button pulls the pin LOW when pressed
    pub fn new(pin: P, active_low: bool) -> Self {
        Self {
            pin,
            active_low,
            down: false,
            latched: false,
        }
    }

    /// Button pulling the line low (internal pull-up)
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Button driving the line high
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Sample the pin and latch a fresh press
    pub fn poll(&mut self) {
        let down = read_level(&mut self.pin, self.active_low);
        if down && !self.down {
            self.latched = true;
        }
        self.down = down;
    }

    /// Release the pin
    pub fn free(self) -> P {
        self.pin
    }
}

impl<P: InputPin> Button for EdgeButton<P> {
    fn was_pressed(&mut self) -> bool {
        self.poll();
        core::mem::take(&mut self.latched)
    }

    fn is_pressed(&mut self) -> bool {
        self.poll();
        self.down
    }

    fn discard_pending(&mut self) {
        self.poll();
        self.latched = false;
    }
}

/// Level-triggered touch pad on a digital pin
pub struct TouchPin<P> {
    pin: P,
    inverted: bool,
}

impl<P: InputPin> TouchPin<P> {
    /// Touch reads HIGH unless `inverted`
    pub fn new(pin: P, inverted: bool) -> Self {
        Self { pin, inverted }
    }
}

impl<P: InputPin> TouchPad for TouchPin<P> {
    fn is_touched(&mut self) -> bool {
        read_level(&mut self.pin, self.inverted)
    }
}
