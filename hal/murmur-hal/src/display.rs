//! LED matrix display abstraction

/// Fixed glyphs the engine can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Icon {
    /// Arrow pointing up (send mode)
    ArrowNorth,
    /// Arrow pointing down (receive mode)
    ArrowSouth,
    /// Cog-like pattern (configure mode)
    Settings,
}

/// Trait for the 5x5 LED matrix
///
/// None of these calls block. Scrolling text keeps running in the
/// background until it finishes or is replaced by the next call.
pub trait MatrixDisplay {
    /// Show a fixed icon
    fn show_icon(&mut self, icon: Icon);

    /// Show a single character
    fn show_symbol(&mut self, symbol: char);

    /// Scroll a text string across the matrix
    fn scroll_text(&mut self, text: &str);
}

impl<T: MatrixDisplay + ?Sized> MatrixDisplay for &mut T {
    fn show_icon(&mut self, icon: Icon) {
        (**self).show_icon(icon)
    }

    fn show_symbol(&mut self, symbol: char) {
        (**self).show_symbol(symbol)
    }

    fn scroll_text(&mut self, text: &str) {
        (**self).scroll_text(text)
    }
}
