//! Observation patterns and their enumeration.
//!
//! A pattern of width `n` is an assignment of `n` binary observations. It is
//! identified by its numeric value in `0..2^n`, with position 0 as the most
//! significant bit, so the value reads like a zero-padded binary string:
//! value `2` of width 2 is `10`, meaning `x1 = 1, x2 = 0`.

use std::fmt;

use crate::types::Lit;

/// Maximum number of observations a pattern may carry.
pub const MAX_LITERALS: usize = 20;

/// A single observation pattern.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Pattern {
    value: u32,
    width: u32,
}

impl Pattern {
    /// Creates the pattern with the given numeric value and width.
    ///
    /// # Panics
    ///
    /// Panics if `width` is not in `1..=MAX_LITERALS` or `value >= 2^width`.
    pub fn new(value: u32, width: usize) -> Self {
        assert!(
            (1..=MAX_LITERALS).contains(&width),
            "Pattern width must be in 1..={}, got {}",
            MAX_LITERALS,
            width
        );
        assert!(value < (1 << width), "Pattern value {} does not fit in {} bits", value, width);
        Pattern {
            value,
            width: width as u32,
        }
    }

    /// Creates a pattern from its bits, most significant first.
    pub fn from_bits(bits: &[bool]) -> Self {
        let value = bits.iter().fold(0u32, |acc, &b| (acc << 1) | b as u32);
        Pattern::new(value, bits.len())
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Returns the bit at the given position (0 = most significant).
    pub fn bit(&self, position: usize) -> bool {
        assert!(position < self.width(), "Position {} out of range for width {}", position, self.width);
        (self.value >> (self.width() - 1 - position)) & 1 == 1
    }

    /// Iterates over the bits, most significant first.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.width()).map(move |i| self.bit(i))
    }

    /// The full conjunction of literals identifying exactly this pattern.
    pub fn literals(&self) -> impl Iterator<Item = Lit> + '_ {
        self.bits().enumerate().map(|(i, b)| Lit::from_bit(i, b))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.value, width = self.width())
    }
}

/// The space of all `2^n` patterns of a fixed width.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PatternSpace {
    width: usize,
}

impl PatternSpace {
    /// # Panics
    ///
    /// Panics if `width` is not in `1..=MAX_LITERALS`.
    pub fn new(width: usize) -> Self {
        assert!(
            (1..=MAX_LITERALS).contains(&width),
            "Pattern width must be in 1..={}, got {}",
            MAX_LITERALS,
            width
        );
        PatternSpace { width }
    }

    /// Number of patterns in the space, `2^width`.
    pub fn len(&self) -> usize {
        1 << self.width
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Patterns in ascending numeric order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Pattern> + '_ {
        (0..self.len() as u32).map(move |v| Pattern::new(v, self.width))
    }

    /// Collects all patterns in ascending numeric order.
    pub fn patterns(&self) -> Vec<Pattern> {
        self.iter().collect()
    }
}
