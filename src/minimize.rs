//! Greedy minimization of disjunctive formulas.
//!
//! Terms are merged pairwise: two terms over the same variables that disagree
//! in polarity on exactly one variable are replaced by their common part,
//! `(A & x) || (A & !x) => A`. Scanning goes over pairs `(i, j)`, `i < j`; the
//! first mergeable pair found replaces term `i` by the merge, drops term `j`,
//! and the scan restarts from the beginning. The loop stops at the first full
//! pass without a merge.
//!
//! The result depends on term order and is not necessarily a minimal formula:
//! a merge is committed as soon as it is found, without considering which
//! other merges it rules out. It is, however, always equivalent to the input.
//!
//! # Example
//!
//! ```
//! use lrt_pdnf::formula::Formula;
//! use lrt_pdnf::minimize::minimize;
//! use lrt_pdnf::pattern::Pattern;
//!
//! let full = Formula::full(&[Pattern::new(0b10, 2), Pattern::new(0b00, 2)]);
//! assert_eq!(minimize(full).to_string(), "(!x2)");
//! ```

use std::collections::HashSet;

use log::{debug, info};

use crate::formula::Formula;
use crate::term::Term;

/// Removes repeated terms, keeping first occurrences in order.
fn dedup(terms: Vec<Term>) -> Vec<Term> {
    let mut seen = HashSet::new();
    terms.into_iter().filter(|t| seen.insert(t.clone())).collect()
}

/// Finds the first pair `(i, j)` that can be merged, along with the merged term.
///
/// Identical terms count as mergeable: the copy at `j` is absorbed by `i`.
fn find_merge(terms: &[Term]) -> Option<(usize, usize, Term)> {
    for i in 0..terms.len() {
        for j in (i + 1)..terms.len() {
            if terms[i] == terms[j] {
                return Some((i, j, terms[i].clone()));
            }
            if let Some(merged) = terms[i].merge(&terms[j]) {
                return Some((i, j, merged));
            }
        }
    }
    None
}

/// Minimizes `formula` by greedy pairwise merging, see the module docs.
pub fn minimize(formula: Formula) -> Formula {
    let before = formula.len();
    let mut terms = dedup(formula.into_terms());

    let mut merges = 0;
    while let Some((i, j, merged)) = find_merge(&terms) {
        debug!("minimize: {} + {} => {}", terms[i], terms[j], merged);
        terms[i] = merged;
        terms.remove(j);
        merges += 1;
    }

    info!("minimize: {} terms => {} terms after {} merges", before, terms.len(), merges);
    Formula::new(terms)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::likelihood::evaluate;
    use crate::params::Params;
    use crate::pattern::{Pattern, PatternSpace};
    use crate::ranking::rank;
    use crate::types::Lit;

    fn term(lits: &[i32]) -> Term {
        Term::new(lits.iter().map(|&l| Lit::from_signed(l)))
    }

    fn minterms(values: &[u32], width: usize) -> Formula {
        let patterns: Vec<Pattern> = values.iter().map(|&v| Pattern::new(v, width)).collect();
        Formula::full(&patterns)
    }

    #[test]
    fn test_controlled_pair() {
        let f = Formula::new(vec![term(&[1, 2]), term(&[-1, 2])]);
        assert_eq!(minimize(f).to_string(), "(x2)");
    }

    #[test]
    fn test_two_differences_do_not_merge() {
        let f = Formula::new(vec![term(&[1, 2]), term(&[-1, -2])]);
        let m = minimize(f.clone());
        assert_eq!(m, f);
    }

    #[test]
    fn test_toy_scenario() {
        let m = minimize(minterms(&[0b10, 0b00], 2));
        assert_eq!(m.to_string(), "(!x2)");
    }

    #[test]
    fn test_duplicates_removed() {
        let f = Formula::new(vec![term(&[1, 2]), term(&[1, -2]), term(&[1, 2])]);
        let m = minimize(f);
        assert_eq!(m.to_string(), "(x1)");
    }

    #[test]
    fn test_empty_formula() {
        let m = minimize(Formula::default());
        assert!(m.is_empty());
        assert_eq!(m.to_string(), "false");
    }

    #[test]
    fn test_full_cube_collapses() {
        // All eight minterms of three variables collapse to a single term.
        let m = minimize(minterms(&[0, 1, 2, 3, 4, 5, 6, 7], 3));
        assert_eq!(m.len(), 1);
        assert!(m.terms()[0].is_tautology());
        assert_eq!(m.to_string(), "true");
    }

    #[test]
    fn test_order_dependent() {
        // Same function, different term order, different result sizes.
        let greedy_first = minimize(minterms(&[0b001, 0b011, 0b000, 0b111], 3));
        let greedy_second = minimize(minterms(&[0b000, 0b001, 0b011, 0b111], 3));
        assert_eq!(greedy_first.to_string(), "(!x1 & x3) || (!x1 & !x2 & !x3) || (x1 & x2 & x3)");
        assert_eq!(greedy_second.to_string(), "(!x1 & !x2) || (x2 & x3)");
        assert_eq!(greedy_first.models(3), greedy_second.models(3));
    }

    #[test]
    fn test_idempotent() {
        let metrics = evaluate(&Params::default());
        for threshold in [0.0006, 0.01, 0.2, 0.7] {
            let full = Formula::from_ranking(&rank(&metrics, threshold));
            let once = minimize(full);
            let twice = minimize(once.clone());
            assert_eq!(once, twice, "threshold = {}", threshold);
        }
    }

    #[test]
    fn test_preserves_function() {
        let metrics = evaluate(&Params::default());
        for threshold in [0.0006, 0.05, 0.5, 0.95] {
            let ranking = rank(&metrics, threshold);
            let full = Formula::from_ranking(&ranking);
            let min = minimize(full.clone());
            assert!(min.len() <= full.len());
            for p in PatternSpace::new(6).iter() {
                assert_eq!(full.eval(&p), min.eval(&p), "pattern {} at threshold {}", p, threshold);
            }
            assert_eq!(min.sat_count(6), ranking.selected().len());
        }
    }
}
