//! Conjunctive terms.

use std::fmt;

use crate::pattern::Pattern;
use crate::types::Lit;

/// A conjunction of literals over distinct variables, kept sorted by variable.
///
/// A term built from a pattern mentions every variable. Merging removes
/// variables, so a term may mention only a subset of them ("don't care" for the rest).
/// The empty term is the constant `true`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Term {
    lits: Vec<Lit>,
}

impl Term {
    /// Builds a term from literals.
    ///
    /// # Panics
    ///
    /// Panics if a variable occurs more than once.
    pub fn new(lits: impl IntoIterator<Item = Lit>) -> Self {
        let mut lits: Vec<Lit> = lits.into_iter().collect();
        lits.sort();
        assert!(
            lits.windows(2).all(|w| w[0].var() != w[1].var()),
            "Term mentions a variable twice: {:?}",
            lits
        );
        Term { lits }
    }

    /// The minterm identifying exactly `pattern`.
    pub fn from_pattern(pattern: &Pattern) -> Self {
        Term {
            lits: pattern.literals().collect(),
        }
    }

    /// Number of literals.
    pub fn arity(&self) -> usize {
        self.lits.len()
    }

    pub fn is_tautology(&self) -> bool {
        self.lits.is_empty()
    }

    /// Evaluates the conjunction on `pattern`.
    pub fn eval(&self, pattern: &Pattern) -> bool {
        self.lits.iter().all(|l| l.holds(pattern.bit(l.var().position())))
    }

    /// Merges two terms that mention the same variables and disagree in
    /// polarity on exactly one of them, dropping that variable.
    ///
    /// Returns `None` if the variable sets differ, or if the terms disagree on
    /// zero or on two or more variables.
    pub fn merge(&self, other: &Term) -> Option<Term> {
        if self.lits.len() != other.lits.len() {
            return None;
        }
        let mut diff = None;
        for (i, (a, b)) in self.lits.iter().zip(&other.lits).enumerate() {
            if a.var() != b.var() {
                return None;
            }
            if a != b {
                if diff.is_some() {
                    return None;
                }
                diff = Some(i);
            }
        }
        let i = diff?;
        let mut lits = self.lits.clone();
        lits.remove(i);
        Some(Term { lits })
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lits.is_empty() {
            return write!(f, "true");
        }
        write!(f, "(")?;
        for (i, lit) in self.lits.iter().enumerate() {
            if i > 0 {
                write!(f, " & ")?;
            }
            write!(f, "{}", lit)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn term(lits: &[i32]) -> Term {
        Term::new(lits.iter().map(|&l| Lit::from_signed(l)))
    }

    #[test]
    fn test_from_pattern() {
        let t = Term::from_pattern(&Pattern::new(0b101100, 6));
        assert_eq!(t.to_string(), "(x1 & !x2 & x3 & x4 & !x5 & !x6)");
        assert_eq!(t.arity(), 6);
    }

    #[test]
    fn test_new_sorts() {
        assert_eq!(term(&[2, -1]), term(&[-1, 2]));
        assert_eq!(term(&[2, -1]).to_string(), "(!x1 & x2)");
    }

    #[test]
    #[should_panic(expected = "twice")]
    fn test_duplicate_var_panics() {
        term(&[1, -1]);
    }

    #[test]
    fn test_merge_one_difference() {
        let merged = term(&[1, 2]).merge(&term(&[-1, 2])).unwrap();
        assert_eq!(merged, term(&[2]));
        assert_eq!(merged.to_string(), "(x2)");
    }

    #[test]
    fn test_merge_rejects_two_differences() {
        assert_eq!(term(&[1, 2]).merge(&term(&[-1, -2])), None);
    }

    #[test]
    fn test_merge_rejects_identical() {
        assert_eq!(term(&[1, 2]).merge(&term(&[1, 2])), None);
    }

    #[test]
    fn test_merge_rejects_different_vars() {
        // Same arity, but different variables: not adjacent.
        assert_eq!(term(&[2, 3]).merge(&term(&[1, 3])), None);
        assert_eq!(term(&[1, 2]).merge(&term(&[1])), None);
    }

    #[test]
    fn test_merge_to_tautology() {
        let t = term(&[1]).merge(&term(&[-1])).unwrap();
        assert!(t.is_tautology());
        assert_eq!(t.to_string(), "true");
        assert!(t.eval(&Pattern::new(0, 1)));
    }

    #[test]
    fn test_eval() {
        let t = term(&[1, -3]);
        assert!(t.eval(&Pattern::new(0b100, 3)));
        assert!(t.eval(&Pattern::new(0b110, 3)));
        assert!(!t.eval(&Pattern::new(0b101, 3)));
        assert!(!t.eval(&Pattern::new(0b000, 3)));
    }
}
