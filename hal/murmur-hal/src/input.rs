//! User input abstractions
//!
//! The device has two push buttons and one touch pad. Buttons report both
//! an edge ("pressed since last asked") and a level ("held right now");
//! the touch pad only reports a level.

/// Push button
///
/// Takes `&mut self` for both queries because reading a pin usually
/// requires mutable access, and the edge query consumes the latch.
pub trait Button {
    /// Returns true if the button was pressed since the last call
    ///
    /// Calling this clears the latched press.
    fn was_pressed(&mut self) -> bool;

    /// Returns true while the button is held down
    fn is_pressed(&mut self) -> bool;

    /// Drop any latched press without reporting it
    fn discard_pending(&mut self) {
        let _ = self.was_pressed();
    }
}

/// Touch sensitive pad
pub trait TouchPad {
    /// Returns true while the pad is touched
    fn is_touched(&mut self) -> bool;
}

impl<T: Button + ?Sized> Button for &mut T {
    fn was_pressed(&mut self) -> bool {
        (**self).was_pressed()
    }

    fn is_pressed(&mut self) -> bool {
        (**self).is_pressed()
    }

    fn discard_pending(&mut self) {
        (**self).discard_pending()
    }
}

impl<T: TouchPad + ?Sized> TouchPad for &mut T {
    fn is_touched(&mut self) -> bool {
        (**self).is_touched()
    }
}
