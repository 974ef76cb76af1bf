//! Fixed 27-symbol alphabet
//!
//! Index order is `A`..`Z` followed by space. All cipher arithmetic is
//! taken modulo [`ALPHABET_LEN`].

/// Number of symbols
pub const ALPHABET_LEN: usize = 27;

/// Symbols in index order
pub const SYMBOLS: [char; ALPHABET_LEN] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ',
];

/// Index of the last symbol
pub const LAST_INDEX: u8 = (ALPHABET_LEN - 1) as u8;

/// Look up the index of a symbol
pub fn index_of(symbol: char) -> Option<u8> {
    match symbol {
        'A'..='Z' => Some(symbol as u8 - b'A'),
        ' ' => Some(LAST_INDEX),
        _ => None,
    }
}

/// Symbol at an index, wrapping past the end
pub fn symbol_at(index: u8) -> char {
    SYMBOLS[index as usize % ALPHABET_LEN]
}

/// Check whether a character belongs to the alphabet
pub fn contains(symbol: char) -> bool {
    index_of(symbol).is_some()
}

/// Cursor over the alphabet used while picking one character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LetterCursor {
    index: u8,
}

impl LetterCursor {
    /// Create a cursor at the first symbol
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Current index
    pub fn index(&self) -> u8 {
        self.index
    }

    /// Symbol under the cursor
    pub fn symbol(&self) -> char {
        symbol_at(self.index)
    }

    /// Move to the next symbol, wrapping to the first after the last
    pub fn advance(&mut self) {
        self.index = if self.index >= LAST_INDEX {
            0
        } else {
            self.index + 1
        };
    }

    /// Go back to the first symbol
    pub fn reset(&mut self) {
        self.index = 0;
    }
}
