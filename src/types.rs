//! Type-safe wrappers for observation variables and literals.
//!
//! Observation positions are 0-indexed internally (position `i` is the `i`-th bit
//! of a pattern, most significant first), but variables are presented 1-indexed,
//! so position 0 is rendered as `x1`.
use std::fmt;

/// A variable identifier (1-indexed).
///
/// Variable `x{i}` refers to observation position `i - 1`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u32);

impl Var {
    /// Creates the variable for the given 0-indexed observation position.
    pub fn from_position(position: usize) -> Self {
        Var(position as u32 + 1)
    }

    /// Returns the 0-indexed observation position of this variable.
    pub fn position(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// A literal: a variable together with its polarity.
///
/// Literals order by variable first, so sorting a conjunction puts its
/// literals in observation order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Lit {
    var: Var,
    negated: bool,
}

impl Lit {
    pub fn new(var: Var, negated: bool) -> Self {
        Lit { var, negated }
    }

    /// Literal satisfied when the bit at `position` equals `bit`.
    pub fn from_bit(position: usize, bit: bool) -> Self {
        Lit::new(Var::from_position(position), !bit)
    }

    /// `+i` is `x{i}`, `-i` is `!x{i}`.
    ///
    /// # Panics
    ///
    /// Panics if `value == 0`.
    #[cfg(test)]
    pub(crate) fn from_signed(value: i32) -> Self {
        assert_ne!(value, 0, "Variable IDs must be >= 1");
        Lit::new(Var(value.unsigned_abs()), value < 0)
    }

    pub fn var(self) -> Var {
        self.var
    }

    /// Whether this literal holds under the given bit value of its variable.
    pub fn holds(self, bit: bool) -> bool {
        bit != self.negated
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "!{}", self.var)
        } else {
            write!(f, "{}", self.var)
        }
    }
}
