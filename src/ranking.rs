//! Ranking patterns by likelihood ratio and selecting the false-alarm-bounded prefix.
//!
//! Patterns are sorted by descending likelihood ratio. Walking the sorted list,
//! false-alarm probabilities are accumulated; a pattern is selected while the
//! running total stays within the threshold `P_lo`. Since the running total only
//! grows, the selection is always a prefix of the ranking.

use std::fmt;

use log::{debug, info};

use crate::likelihood::Metrics;
use crate::pattern::Pattern;

/// Number of significant decimal digits compared when ranking likelihood ratios.
///
/// Products that are equal in exact arithmetic may differ in the last bits
/// (e.g. `0.2/0.5 * 0.8/0.5` vs `0.8/0.5 * 0.2/0.5`); rounding makes them tie,
/// and ties keep the ascending pattern order.
///
/// Two such values can still land on different sides of a rounding boundary
/// when the exact ratio sits at a half-unit of the 12th digit; they are then
/// ranked by their rounded keys rather than as a tie.
pub const RANK_DIGITS: i32 = 12;

/// A pattern at its position in the ranking.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RankedEntry {
    pub pattern: Pattern,
    pub likelihood_ratio: f64,
    pub false_alarm_probability: f64,
    /// Sum of false-alarm probabilities of this and all higher-ranked patterns.
    pub cumulative: f64,
    /// Whether `cumulative` is above the threshold.
    pub exceeds_threshold: bool,
}

impl RankedEntry {
    pub fn is_selected(&self) -> bool {
        !self.exceeds_threshold
    }
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Code: {} | Likelihood Ratio: {:.6} | False Alarm Probability: {:.6} | Cumulative Probability: {:.6} | Exceeds Threshold: {}",
            self.pattern,
            self.likelihood_ratio,
            self.false_alarm_probability,
            self.cumulative,
            if self.exceeds_threshold { "True" } else { "False" },
        )
    }
}

/// The full ranking together with the length of its selected prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    entries: Vec<RankedEntry>,
    selected: usize,
}

impl Ranking {
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    /// The selected prefix of the ranking.
    pub fn selected(&self) -> &[RankedEntry] {
        &self.entries[..self.selected]
    }

    /// Patterns of the selected prefix, in ranked order.
    pub fn selected_patterns(&self) -> impl Iterator<Item = Pattern> + '_ {
        self.selected().iter().map(|e| e.pattern)
    }

    /// Total false-alarm probability of the selected prefix.
    pub fn selected_false_alarm(&self) -> f64 {
        self.selected().last().map_or(0.0, |e| e.cumulative)
    }
}

/// Rounds `x` to [`RANK_DIGITS`] significant digits.
fn rank_key(x: f64) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    let magnitude = x.abs().log10().floor() as i32;
    let scale = 10f64.powi(RANK_DIGITS - 1 - magnitude);
    if !scale.is_finite() || scale == 0.0 {
        return x;
    }
    (x * scale).round() / scale
}

/// Ranks `metrics` by descending likelihood ratio and cuts the ranking at `threshold`.
///
/// `metrics` is expected in ascending pattern order, which becomes the tie-break order.
pub fn rank(metrics: &[Metrics], threshold: f64) -> Ranking {
    let mut keyed: Vec<(f64, &Metrics)> = metrics.iter().map(|m| (rank_key(m.likelihood_ratio), m)).collect();
    // `sort_by` is stable.
    keyed.sort_by(|a, b| b.0.total_cmp(&a.0));

    let mut cumulative = 0.0;
    let mut selected = 0;
    let mut entries = Vec::with_capacity(keyed.len());
    for (_, m) in keyed {
        cumulative += m.false_alarm_probability;
        let exceeds_threshold = cumulative > threshold;
        if !exceeds_threshold {
            selected += 1;
        } else if selected == entries.len() {
            debug!(
                "rank: cut at rank {} (pattern {}, cumulative {} > {})",
                entries.len(),
                m.pattern,
                cumulative,
                threshold
            );
        }
        entries.push(RankedEntry {
            pattern: m.pattern,
            likelihood_ratio: m.likelihood_ratio,
            false_alarm_probability: m.false_alarm_probability,
            cumulative,
            exceeds_threshold,
        });
    }

    info!("rank: selected {} of {} patterns at threshold {}", selected, entries.len(), threshold);
    Ranking { entries, selected }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::likelihood::evaluate;
    use crate::params::Params;

    #[test]
    fn test_rank_key_ties() {
        let a = 0.2 / 0.5 * (0.8 / 0.5);
        let b = (1.0 - 0.8) / 0.5 * ((1.0 - 0.2) / 0.5);
        assert_eq!(rank_key(a), rank_key(b));
        assert!(rank_key(0.64) > rank_key(0.6399));
        assert_eq!(rank_key(0.0), 0.0);
    }

    #[test]
    fn test_toy_ranking() {
        let params = Params::new(vec![0.8, 0.2], 0.5, 0.6).unwrap();
        let ranking = rank(&evaluate(&params), params.p_lo());

        let order: Vec<String> = ranking.entries().iter().map(|e| e.pattern.to_string()).collect();
        assert_eq!(order, vec!["10", "00", "11", "01"]);

        let cumulative: Vec<f64> = ranking.entries().iter().map(|e| e.cumulative).collect();
        assert_eq!(cumulative, vec![0.25, 0.5, 0.75, 1.0]);

        let exceeds: Vec<bool> = ranking.entries().iter().map(|e| e.exceeds_threshold).collect();
        assert_eq!(exceeds, vec![false, false, true, true]);

        let selected: Vec<u32> = ranking.selected_patterns().map(|p| p.value()).collect();
        assert_eq!(selected, vec![0b10, 0b00]);
        assert_eq!(ranking.selected_false_alarm(), 0.5);
    }

    #[test]
    fn test_ranking_monotone() {
        let ranking = rank(&evaluate(&Params::default()), 0.0006);
        let entries = ranking.entries();
        assert_eq!(entries.len(), 64);
        for w in entries.windows(2) {
            assert!(rank_key(w[0].likelihood_ratio) >= rank_key(w[1].likelihood_ratio));
            assert!(w[0].cumulative <= w[1].cumulative);
        }
        let last = entries.last().unwrap().cumulative;
        assert!((last - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_selection_is_longest_prefix() {
        let metrics = evaluate(&Params::default());
        for threshold in [1e-6, 0.0006, 0.01, 0.3, 0.9] {
            let ranking = rank(&metrics, threshold);
            let entries = ranking.entries();
            let n = ranking.selected().len();
            assert!(entries[..n].iter().all(|e| e.cumulative <= threshold));
            assert!(entries[n..].iter().all(|e| e.exceeds_threshold));
            assert!(entries[..n].iter().all(|e| e.is_selected()));
        }
    }

    #[test]
    fn test_threshold_below_top_selects_nothing() {
        let metrics = evaluate(&Params::default());
        let ranking = rank(&metrics, 1e-12);
        assert!(ranking.selected().is_empty());
        assert_eq!(ranking.selected_false_alarm(), 0.0);
        assert!(ranking.entries().iter().all(|e| e.exceeds_threshold));
    }

    #[test]
    fn test_entry_display() {
        let params = Params::new(vec![0.8, 0.2], 0.5, 0.6).unwrap();
        let ranking = rank(&evaluate(&params), params.p_lo());
        assert_eq!(
            ranking.entries()[0].to_string(),
            "Code: 10 | Likelihood Ratio: 2.560000 | False Alarm Probability: 0.250000 | Cumulative Probability: 0.250000 | Exceeds Threshold: False"
        );
    }
}
