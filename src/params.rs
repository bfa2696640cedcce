//! Validated analysis parameters.
//!
//! This is the boundary between user input and the analysis core: a [`Params`]
//! value can only be constructed with every probability strictly inside
//! `(0, 1)`, so the core never divides by zero.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::pattern::MAX_LITERALS;

/// Number of observations in the default setting.
pub const DEFAULT_LITERALS: usize = 6;

/// Errors produced while parsing or validating parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("expected {expected} values for {name}, got {actual}")]
    WrongCount {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{name} must contain between 1 and {max} values, got {actual}")]
    BadLength {
        name: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("cannot parse '{token}' as a number")]
    NotANumber { token: String },

    #[error("{name} must be in the range (0, 1), got {value}")]
    OutOfRange { name: &'static str, value: f64 },
}

/// Parameters of a single analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    p_s: Vec<f64>,
    p_n: f64,
    p_lo: f64,
}

impl Params {
    /// Validates and builds a parameter set.
    ///
    /// - `p_s`: per-observation detection probabilities under the signal hypothesis;
    ///   its length is the number of observations.
    /// - `p_n`: shared detection probability under the noise hypothesis.
    /// - `p_lo`: cumulative false-alarm budget.
    pub fn new(p_s: Vec<f64>, p_n: f64, p_lo: f64) -> Result<Self, ParamError> {
        if p_s.is_empty() || p_s.len() > MAX_LITERALS {
            return Err(ParamError::BadLength {
                name: "p_S",
                max: MAX_LITERALS,
                actual: p_s.len(),
            });
        }
        for &p in &p_s {
            check_open_unit("p_S", p)?;
        }
        check_open_unit("p_N", p_n)?;
        check_open_unit("P_lo", p_lo)?;
        Ok(Params { p_s, p_n, p_lo })
    }

    pub fn p_s(&self) -> &[f64] {
        &self.p_s
    }

    pub fn p_n(&self) -> f64 {
        self.p_n
    }

    pub fn p_lo(&self) -> f64 {
        self.p_lo
    }

    /// Number of observations.
    pub fn literals(&self) -> usize {
        self.p_s.len()
    }
}

impl Default for Params {
    fn default() -> Self {
        Params {
            p_s: vec![0.29, 0.53, 0.04, 0.04, 0.53, 0.29],
            p_n: 0.09,
            p_lo: 0.0006,
        }
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p_S = {:?}, p_N = {}, P_lo = {}", self.p_s, self.p_n, self.p_lo)
    }
}

/// Checks that `value` lies strictly inside `(0, 1)`.
pub fn check_open_unit(name: &'static str, value: f64) -> Result<f64, ParamError> {
    // NaN fails both comparisons.
    if value > 0.0 && value < 1.0 {
        Ok(value)
    } else {
        Err(ParamError::OutOfRange { name, value })
    }
}

fn parse_number(token: &str) -> Result<f64, ParamError> {
    f64::from_str(token).map_err(|_| ParamError::NotANumber {
        token: token.to_string(),
    })
}

/// Parses a single probability in `(0, 1)`.
pub fn parse_probability(name: &'static str, input: &str) -> Result<f64, ParamError> {
    check_open_unit(name, parse_number(input.trim())?)
}

/// Parses exactly `expected` whitespace-separated probabilities, each in `(0, 1)`.
pub fn parse_probabilities(name: &'static str, input: &str, expected: usize) -> Result<Vec<f64>, ParamError> {
    let values = input
        .split_whitespace()
        .map(parse_number)
        .collect::<Result<Vec<_>, _>>()?;
    if values.len() != expected {
        return Err(ParamError::WrongCount {
            name,
            expected,
            actual: values.len(),
        });
    }
    for &v in &values {
        check_open_unit(name, v)?;
    }
    Ok(values)
}
