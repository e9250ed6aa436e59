//! Row and column dominance reduction of the residual chart.
//!
//! Two eliminations are alternated until a fixed point:
//!
//! - **Column dominance**: when minterm `a`'s covering set is a superset of
//!   minterm `b`'s, column `a` is redundant — any PI forced in to cover the
//!   smaller column `b` necessarily covers `a` as well. The *dominating*
//!   column is removed.
//! - **Row dominance**: when PI `p` covers a strict superset of the
//!   still-uncovered minterms that PI `q` covers, `q` is redundant and is
//!   removed. Rows with equal coverage both survive, so symmetric
//!   alternatives reach the exact-cover solver.
//!
//! After the fixed point, any minterm left with exactly one covering PI
//! forces that PI into the cover ("best fit", essential-extraction
//! re-applied to the shrunken chart); the whole sequence repeats until
//! nothing changes.

use std::collections::{BTreeSet, HashSet};

use log::debug;

use crate::chart::CoverageChart;
use crate::term::{Bit, Term};

/// Result of dominance reduction.
#[derive(Debug, Clone)]
pub struct Reduction {
    /// The reduced chart. Empty iff the best-fit picks (together with the
    /// previously extracted essentials) cover everything.
    pub chart: CoverageChart,
    /// The PIs still competing for the remaining columns.
    pub pis: Vec<Term>,
    /// PIs forced into the cover by singleton columns, in selection order.
    pub best_fit: Vec<Term>,
}

/// Reduces the residual chart to a fixed point of dominance eliminations
/// and best-fit extraction.
pub fn reduce(chart: CoverageChart, pis: Vec<Term>) -> Reduction {
    let mut reduction = Reduction {
        chart,
        pis,
        best_fit: Vec::new(),
    };

    // Each pass either removes a column, a row, or selects a best-fit PI,
    // so this bound is unreachable unless an elimination oscillates.
    let bound = reduction.pis.len() + reduction.chart.len() + 1;
    for _ in 0..bound {
        let mut changed = false;
        for _ in 0..bound {
            let columns = eliminate_dominating_columns(&mut reduction.chart);
            let rows = eliminate_dominated_rows(&mut reduction.chart, &mut reduction.pis);
            if !columns && !rows {
                break;
            }
            changed = true;
        }
        if !extract_best_fit(&mut reduction) && !changed {
            break;
        }
    }

    reduction
}

fn column_patterns(column: &[Term]) -> BTreeSet<Vec<Bit>> {
    column.iter().map(|pi| pi.bits().to_vec()).collect()
}

/// Removes every column whose covering set is a superset of another live
/// column's. Keys are snapshotted before mutation.
fn eliminate_dominating_columns(chart: &mut CoverageChart) -> bool {
    let keys: Vec<u32> = chart.keys().copied().collect();
    let mut changed = false;

    for &a in &keys {
        if !chart.contains_key(&a) {
            continue;
        }
        let set_a = column_patterns(&chart[&a]);
        for &b in &keys {
            if a == b || !chart.contains_key(&b) {
                continue;
            }
            let set_b = column_patterns(&chart[&b]);
            if set_a.is_superset(&set_b) {
                debug!("column dominance: minterm {} dominated by {}, removed", b, a);
                chart.remove(&a);
                changed = true;
                break;
            }
        }
    }

    changed
}

/// Removes every PI whose still-uncovered coverage is a strict subset of
/// another PI's, both from the candidate list and from every column.
fn eliminate_dominated_rows(chart: &mut CoverageChart, pis: &mut Vec<Term>) -> bool {
    let columns: BTreeSet<u32> = chart.keys().copied().collect();
    let residual_cover = |pi: &Term| -> BTreeSet<u32> {
        pi.covered().intersection(&columns).copied().collect()
    };

    let covers: Vec<BTreeSet<u32>> = pis.iter().map(residual_cover).collect();
    let mut removed: HashSet<Vec<Bit>> = HashSet::new();
    let mut keep = vec![true; pis.len()];

    for (i, q) in pis.iter().enumerate() {
        let dominated = pis.iter().enumerate().any(|(j, _)| {
            i != j && keep[j] && covers[j].is_superset(&covers[i]) && covers[j] != covers[i]
        });
        if dominated {
            debug!("row dominance: {} ({}) removed", q.pattern(), q);
            removed.insert(q.bits().to_vec());
            keep[i] = false;
        }
    }

    if removed.is_empty() {
        return false;
    }

    pis.retain(|pi| !removed.contains(pi.bits()));
    for column in chart.values_mut() {
        column.retain(|pi| !removed.contains(pi.bits()));
    }
    true
}

/// Selects PIs that are the sole cover of some remaining column and
/// removes them (and everything they cover) from the chart.
fn extract_best_fit(reduction: &mut Reduction) -> bool {
    let mut changed = false;

    loop {
        let pick = reduction
            .chart
            .iter()
            .find_map(|(&m, column)| match column.as_slice() {
                [pi] => Some((m, pi.clone())),
                _ => None,
            });
        let Some((m, pi)) = pick else {
            break;
        };

        debug!("best fit: {} (sole cover of minterm {})", pi, m);
        let covered = pi.covered().clone();
        reduction.chart.retain(|m, _| !covered.contains(m));
        reduction.pis.retain(|p| p != &pi);
        if !reduction.best_fit.contains(&pi) {
            reduction.best_fit.push(pi);
        }
        changed = true;
    }

    changed
}
