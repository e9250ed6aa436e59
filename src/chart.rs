//! Coverage chart construction and essential prime implicant extraction.
//!
//! The chart maps each *required* minterm to the ordered list of prime
//! implicants covering it. Don't-cares influence which merges are legal
//! during tabulation, but they never become chart columns: nothing is
//! obliged to cover them.
//!
//! A minterm with exactly one covering PI makes that PI *essential*. Once
//! the essential set is extracted, the chart is re-derived for the minterms
//! still uncovered; charts are rebuilt rather than patched in place.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use log::debug;

use crate::term::{Bit, Term};

/// Coverage chart: required minterm index to the PIs covering it.
///
/// A `BTreeMap` keeps column iteration deterministic.
pub type CoverageChart = BTreeMap<u32, Vec<Term>>;

/// Builds the coverage chart for the given prime implicants.
///
/// Every required minterm gets a column, even when no PI covers it: an
/// empty column is an upstream bug that the exact-cover solver reports
/// rather than silently dropping the minterm.
pub fn build_chart(pis: &[Term], required: &BTreeSet<u32>) -> CoverageChart {
    let mut chart: CoverageChart = required.iter().map(|&m| (m, Vec::new())).collect();
    for pi in pis {
        for &m in pi.covered() {
            if let Some(column) = chart.get_mut(&m) {
                column.push(pi.clone());
            }
        }
    }
    chart
}

/// Extracts essential prime implicants and the residual chart.
///
/// Returns the essential PIs (each uniquely covering some minterm, added
/// idempotently by pattern) and the chart restricted to minterms not
/// covered by any essential PI. The essential set depends only on the
/// chart contents, not on column processing order.
pub fn analyze_coverage(pis: &[Term], required: &BTreeSet<u32>) -> (Vec<Term>, CoverageChart) {
    let chart = build_chart(pis, required);

    let mut essential: Vec<Term> = Vec::new();
    let mut essential_patterns: HashSet<Vec<Bit>> = HashSet::new();
    let mut satisfied: BTreeSet<u32> = BTreeSet::new();

    for (&m, column) in &chart {
        if let [pi] = column.as_slice() {
            if essential_patterns.insert(pi.bits().to_vec()) {
                debug!("essential prime implicant: {} (sole cover of minterm {})", pi, m);
                satisfied.extend(pi.covered().iter().copied());
                essential.push(pi.clone());
            }
        }
    }

    let residual: CoverageChart = chart
        .into_iter()
        .filter(|(m, _)| !satisfied.contains(m))
        .collect();
    debug!(
        "coverage: {} essential, {} residual minterms",
        essential.len(),
        residual.len()
    );

    (essential, residual)
}

/// The distinct PIs present in a chart, in first-appearance order.
///
/// These are the candidates for dominance elimination and Petrick
/// selection.
pub fn residual_pis(chart: &CoverageChart) -> Vec<Term> {
    let mut seen: HashSet<Vec<Bit>> = HashSet::new();
    let mut pis = Vec::new();
    for column in chart.values() {
        for pi in column {
            if seen.insert(pi.bits().to_vec()) {
                pis.push(pi.clone());
            }
        }
    }
    pis
}
