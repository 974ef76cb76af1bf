//! Input sampling
//!
//! Buttons A and B and the touch pad are read together once per poll, so
//! "both pressed within the same check" has a precise meaning.

use murmur_hal::{Button, TouchPad};

/// Snapshot of the input surface at one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputSample {
    /// Button A pressed since the previous poll
    pub a_pressed: bool,
    /// Button B pressed since the previous poll
    pub b_pressed: bool,
    /// Button A currently held
    pub a_held: bool,
    /// Button B currently held
    pub b_held: bool,
    /// Touch pad currently touched (advance mode)
    pub touched: bool,
}

impl InputSample {
    /// Both buttons freshly pressed in this poll
    pub fn both_pressed(&self) -> bool {
        self.a_pressed && self.b_pressed
    }

    /// Both buttons held down right now
    pub fn both_held(&self) -> bool {
        self.a_held && self.b_held
    }
}

/// Source of input samples
pub trait InputSurface {
    /// Read every input once
    fn sample(&mut self) -> InputSample;

    /// Drop latched button presses left over from before
    fn discard_pending(&mut self);
}

impl<T: InputSurface + ?Sized> InputSurface for &mut T {
    fn sample(&mut self) -> InputSample {
        (**self).sample()
    }

    fn discard_pending(&mut self) {
        (**self).discard_pending()
    }
}

/// The device's two buttons and touch pad
pub struct Controls<A, B, T> {
    /// Left button
    pub button_a: A,
    /// Right button
    pub button_b: B,
    /// Logo touch pad
    pub touch: T,
}

impl<A: Button, B: Button, T: TouchPad> Controls<A, B, T> {
    /// Bundle the inputs
    pub fn new(button_a: A, button_b: B, touch: T) -> Self {
        Self {
            button_a,
            button_b,
            touch,
        }
    }
}

impl<A: Button, B: Button, T: TouchPad> InputSurface for Controls<A, B, T> {
    fn sample(&mut self) -> InputSample {
        InputSample {
            a_pressed: self.button_a.was_pressed(),
            b_pressed: self.button_b.was_pressed(),
            a_held: self.button_a.is_pressed(),
            b_held: self.button_b.is_pressed(),
            touched: self.touch.is_touched(),
        }
    }

    fn discard_pending(&mut self) {
        self.button_a.discard_pending();
        self.button_b.discard_pending();
    }
}
