//! 5x5 LED matrix frame buffer
//!
//! `LedMatrix` keeps the frame the board should be showing. Row scanning
//! is left to the board; it reads [`LedMatrix::frame`] on its refresh
//! timer and calls [`LedMatrix::step`] at the scroll rate.
//!
//! Scrolling text enters from the right, moves one column per step and
//! leaves to the left, with one blank column between characters.

use heapless::{String, Vec};
use murmur_hal::{Icon, MatrixDisplay};
use murmur_protocol::MAX_DATAGRAM_LEN;

use crate::font::{self, Glyph};

/// Matrix width and height
pub const SIZE: usize = 5;

/// Columns taken by one character including the gap
const CHAR_WIDTH: usize = SIZE + 1;

/// One full matrix image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Bit 4 of each row is the leftmost column
    rows: [u8; SIZE],
}

impl Frame {
    /// All LEDs off
    pub const fn blank() -> Self {
        Self { rows: [0; SIZE] }
    }

    pub fn from_glyph(glyph: Glyph) -> Self {
        Self { rows: glyph }
    }

    /// Row bitmaps, top first
    pub fn rows(&self) -> [u8; SIZE] {
        self.rows
    }

    /// Whether the LED at (row, col) is on
    pub fn is_lit(&self, row: usize, col: usize) -> bool {
        row < SIZE && col < SIZE && self.rows[row] & (1 << (SIZE - 1 - col)) != 0
    }

    /// Number of LEDs on
    pub fn lit_count(&self) -> u32 {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }

    /// Light `col` from a column mask (bit r = row r)
    fn set_column(&mut self, col: usize, mask: u8) {
        for row in 0..SIZE {
            if mask & (1 << row) != 0 {
                self.rows[row] |= 1 << (SIZE - 1 - col);
            }
        }
    }
}

/// Column `col` of a glyph as a mask (bit r = row r)
fn glyph_column(glyph: &Glyph, col: usize) -> u8 {
    glyph
        .iter()
        .enumerate()
        .fold(0, |mask, (row, bits)| {
            if bits & (1 << (SIZE - 1 - col)) != 0 {
                mask | (1 << row)
            } else {
                mask
            }
        })
}

/// Text currently moving across the matrix
#[derive(Debug, Clone)]
struct Scroll {
    text: String<MAX_DATAGRAM_LEN>,
    glyphs: Vec<Glyph, MAX_DATAGRAM_LEN>,
    /// Leftmost strip column on screen
    offset: usize,
}

impl Scroll {
    fn new(text: &str) -> Self {
        let mut scroll = Self {
            text: String::new(),
            glyphs: Vec::new(),
            offset: 0,
        };
        for c in text.chars() {
            if scroll.text.push(c).is_err() || scroll.glyphs.push(font::glyph(c)).is_err() {
                #[cfg(feature = "defmt")]
                defmt::warn!("Scroll text truncated");
                break;
            }
        }
        scroll
    }

    /// Strip columns: SIZE blank lead-in, then each glyph plus a gap
    fn strip_len(&self) -> usize {
        SIZE + self.glyphs.len() * CHAR_WIDTH
    }

    fn strip_column(&self, index: usize) -> u8 {
        let Some(k) = index.checked_sub(SIZE) else {
            return 0;
        };
        let col = k % CHAR_WIDTH;
        match self.glyphs.get(k / CHAR_WIDTH) {
            Some(glyph) if col < SIZE => glyph_column(glyph, col),
            _ => 0,
        }
    }

    fn render(&self) -> Frame {
        let mut frame = Frame::blank();
        for col in 0..SIZE {
            frame.set_column(col, self.strip_column(self.offset + col));
        }
        frame
    }
}

/// Frame buffer implementing [`MatrixDisplay`]
#[derive(Debug, Clone, Default)]
pub struct LedMatrix {
    frame: Frame,
    scroll: Option<Scroll>,
}

impl LedMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Image to show right now
    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_some()
    }

    /// Text being scrolled, if any
    pub fn scrolling_text(&self) -> Option<&str> {
        self.scroll.as_ref().map(|s| s.text.as_str())
    }

    /// Advance a running scroll by one column
    ///
    /// Returns false once the text has left the matrix (the frame is then
    /// blank) or when nothing is scrolling.
    pub fn step(&mut self) -> bool {
        let Some(scroll) = self.scroll.as_mut() else {
            return false;
        };

        if scroll.offset >= scroll.strip_len() {
            self.scroll = None;
            self.frame = Frame::blank();
            return false;
        }

        self.frame = scroll.render();
        scroll.offset += 1;
        true
    }
}

impl MatrixDisplay for LedMatrix {
    fn show_icon(&mut self, icon: Icon) {
        self.scroll = None;
        self.frame = Frame::from_glyph(font::icon(icon));
    }

    fn show_symbol(&mut self, symbol: char) {
        self.scroll = None;
        self.frame = Frame::from_glyph(font::glyph(symbol));
    }

    fn scroll_text(&mut self, text: &str) {
        self.frame = Frame::blank();
        self.scroll = Some(Scroll::new(text));
    }
}
