//! # lrt-pdnf: likelihood-ratio decision rules as Boolean formulas
//!
//! **`lrt-pdnf`** turns a binary hypothesis test over `n` independent binary
//! observations into a Boolean decision formula.
//!
//! ## The decision rule
//!
//! Each observation `x_i` fires with probability `p_S[i]` under the *signal*
//! hypothesis and with the shared probability `p_N` under the *noise* hypothesis.
//! Every one of the `2^n` observation patterns gets a likelihood ratio (signal vs
//! noise) and a false-alarm probability (its probability under noise).
//!
//! Patterns are ranked by likelihood ratio, and the longest prefix of the ranking
//! whose total false-alarm probability stays within the budget `P_lo` is selected.
//! The selection is written as a perfect disjunctive normal form (one minterm per
//! selected pattern), which is then shrunk by greedy merging of adjacent terms.
//!
//! ## Basic Usage
//!
//! ```rust
//! use lrt_pdnf::params::Params;
//! use lrt_pdnf::report::analyze;
//!
//! let params = Params::new(vec![0.8, 0.2], 0.5, 0.6).unwrap();
//! let report = analyze(&params);
//!
//! assert_eq!(report.full.to_string(), "(x1 & !x2) || (!x1 & !x2)");
//! assert_eq!(report.minimized.to_string(), "(!x2)");
//! ```
//!
//! ## Core Components
//!
//! - **[`pattern`]**: observation patterns and the pattern space.
//! - **[`likelihood`]**: likelihood ratios and false-alarm probabilities.
//! - **[`ranking`]**: ranking and threshold-bounded selection.
//! - **[`formula`]** and **[`term`]**: disjunctive formulas.
//! - **[`minimize`]**: greedy formula minimization.
//! - **[`report`]**: the whole pipeline and its text report.

pub mod formula;
pub mod likelihood;
pub mod minimize;
pub mod params;
pub mod pattern;
pub mod ranking;
pub mod report;
pub mod term;
pub mod types;
