//! Likelihood ratios and false-alarm probabilities of observation patterns.
//!
//! Observations are independent Bernoulli trials. Under the signal hypothesis
//! observation `i` fires with probability `p_S[i]`; under the noise hypothesis
//! every observation fires with the same probability `p_N`.
//!
//! ```text
//! LR(b)  = Π_i  b[i] ? p_S[i] / p_N : (1 - p_S[i]) / (1 - p_N)
//! P_N(b) = Π_i  b[i] ? p_N : (1 - p_N)
//! ```

use rayon::prelude::*;

use crate::params::Params;
use crate::pattern::{Pattern, PatternSpace};

/// Metrics of a single pattern.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Metrics {
    pub pattern: Pattern,
    /// Probability ratio of the pattern under signal vs noise.
    pub likelihood_ratio: f64,
    /// Probability of the pattern under noise.
    pub false_alarm_probability: f64,
}

fn assert_open_unit(name: &str, p: f64) {
    assert!(p > 0.0 && p < 1.0, "{} must be in the range (0, 1), got {}", name, p);
}

/// Likelihood ratio of `pattern` under signal probabilities `p_s` vs noise probability `p_n`.
///
/// # Panics
///
/// Panics if the pattern width differs from `p_s.len()`, or if any probability
/// is outside `(0, 1)`.
pub fn likelihood_ratio(pattern: &Pattern, p_s: &[f64], p_n: f64) -> f64 {
    assert_eq!(
        pattern.width(),
        p_s.len(),
        "Pattern width {} does not match {} probabilities",
        pattern.width(),
        p_s.len()
    );
    assert_open_unit("p_N", p_n);
    for &p in p_s {
        assert_open_unit("p_S", p);
    }
    let q_n = 1.0 - p_n;
    pattern
        .bits()
        .zip(p_s)
        .fold(1.0, |acc, (bit, &p)| acc * if bit { p / p_n } else { (1.0 - p) / q_n })
}

/// Probability of observing `pattern` when every bit fires independently with probability `p_n`.
///
/// # Panics
///
/// Panics if `p_n` is outside `(0, 1)`.
pub fn false_alarm_probability(pattern: &Pattern, p_n: f64) -> f64 {
    assert_open_unit("p_N", p_n);
    let q_n = 1.0 - p_n;
    pattern.bits().fold(1.0, |acc, bit| acc * if bit { p_n } else { q_n })
}

impl Metrics {
    pub fn compute(pattern: Pattern, params: &Params) -> Self {
        Metrics {
            pattern,
            likelihood_ratio: likelihood_ratio(&pattern, params.p_s(), params.p_n()),
            false_alarm_probability: false_alarm_probability(&pattern, params.p_n()),
        }
    }
}

/// Computes metrics for every pattern of the space, in ascending pattern order.
///
/// Patterns are evaluated in parallel; the result order does not depend on scheduling.
pub fn evaluate(params: &Params) -> Vec<Metrics> {
    let space = PatternSpace::new(params.literals());
    space
        .patterns()
        .into_par_iter()
        .map(|pattern| Metrics::compute(pattern, params))
        .collect()
}
