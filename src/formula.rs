//! Disjunctive formulas over observation patterns.
//!
//! The full formula (PDNF) of a selection has one minterm per selected pattern,
//! in ranked order:
//!
//! ```text
//! (x1 & !x2) || (!x1 & !x2)
//! ```
//!
//! The formula with no terms is the constant `false`.

use std::fmt;

use crate::pattern::{Pattern, PatternSpace};
use crate::ranking::Ranking;
use crate::term::Term;

/// An ordered disjunction of conjunctive terms.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Formula {
    terms: Vec<Term>,
}

impl Formula {
    pub fn new(terms: Vec<Term>) -> Self {
        Formula { terms }
    }

    /// The full formula: one minterm per pattern, in the given order.
    pub fn full<'a>(patterns: impl IntoIterator<Item = &'a Pattern>) -> Self {
        Formula {
            terms: patterns.into_iter().map(Term::from_pattern).collect(),
        }
    }

    /// The full formula of the selected prefix of `ranking`.
    pub fn from_ranking(ranking: &Ranking) -> Self {
        Formula {
            terms: ranking.selected().iter().map(|e| Term::from_pattern(&e.pattern)).collect(),
        }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn into_terms(self) -> Vec<Term> {
        self.terms
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the formula has no terms, i.e. is the constant `false`.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total number of literals over all terms.
    pub fn literal_count(&self) -> usize {
        self.terms.iter().map(|t| t.arity()).sum()
    }

    /// Evaluates the disjunction on `pattern`.
    pub fn eval(&self, pattern: &Pattern) -> bool {
        self.terms.iter().any(|t| t.eval(pattern))
    }

    /// Patterns of width `width` satisfying the formula, in ascending order.
    pub fn models(&self, width: usize) -> Vec<Pattern> {
        PatternSpace::new(width).iter().filter(|p| self.eval(p)).collect()
    }

    /// Number of patterns of width `width` satisfying the formula.
    pub fn sat_count(&self, width: usize) -> usize {
        PatternSpace::new(width).iter().filter(|p| self.eval(p)).count()
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "false");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " || ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}
