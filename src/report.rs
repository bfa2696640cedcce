//! End-to-end analysis and its textual report.

use std::fmt;

use log::info;

use crate::formula::Formula;
use crate::likelihood::evaluate;
use crate::minimize::minimize;
use crate::params::Params;
use crate::ranking::{rank, Ranking};

/// Result of a single analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub params: Params,
    pub ranking: Ranking,
    /// One minterm per selected pattern, in ranked order.
    pub full: Formula,
    pub minimized: Formula,
}

/// Runs the whole pipeline: evaluate, rank, build the full formula, minimize it.
pub fn analyze(params: &Params) -> Report {
    info!("analyze: {}", params);
    let metrics = evaluate(params);
    let ranking = rank(&metrics, params.p_lo());
    let full = Formula::from_ranking(&ranking);
    let minimized = minimize(full.clone());
    info!(
        "analyze: {} literals in {} terms => {} literals in {} terms",
        full.literal_count(),
        full.len(),
        minimized.literal_count(),
        minimized.len()
    );
    Report {
        params: params.clone(),
        ranking,
        full,
        minimized,
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.ranking.entries() {
            writeln!(f, "{}", entry)?;
        }
        writeln!(f)?;
        writeln!(f, "Perfect Disjunctive Normal Form (PDNF):")?;
        writeln!(f, "{}", self.full)?;
        writeln!(f)?;
        writeln!(f, "Minimized PDNF:")?;
        write!(f, "{}", self.minimized)
    }
}
