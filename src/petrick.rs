//! Exact-cover solving via Petrick's method.
//!
//! When dominance reduction leaves a (cyclic) chart behind, the remaining
//! covering requirement is written as a product of sums over PI indices:
//! one sum clause per uncovered minterm, listing the PIs that cover it.
//! Multiplying the clauses out yields every irredundant cover; absorption
//! and cost ranking then keep only the minimal ones.
//!
//! Cost policy: minimum number of product terms first, then minimum total
//! literal count among the term-count winners. Every returned cover is of
//! equal, globally minimal cost.

use std::collections::HashMap;

use log::debug;

use crate::chart::CoverageChart;
use crate::error::Error;
use crate::term::{Bit, Term};

/// Enumerates all cost-minimal covers of the reduced chart.
///
/// Returns one inner vector per minimal cover. The outer vector is empty
/// iff the chart is empty, which signals that the already-selected
/// (essential and best-fit) PIs cover everything.
///
/// # Errors
///
/// Returns [`Error::UncoverableMinterm`] if some column has no covering
/// PI. A correctly built chart cannot produce this; it indicates an
/// upstream bug rather than an unsatisfiable input.
pub fn solve_exact_cover(chart: &CoverageChart) -> Result<Vec<Vec<Term>>, Error> {
    if chart.is_empty() {
        return Ok(Vec::new());
    }

    // Stable index per distinct residual PI pattern.
    let mut index_of: HashMap<Vec<Bit>, usize> = HashMap::new();
    let mut unique: Vec<Term> = Vec::new();
    let mut pos: Vec<Vec<usize>> = Vec::new();

    for (&minterm, column) in chart {
        if column.is_empty() {
            return Err(Error::UncoverableMinterm { minterm });
        }
        let clause = column
            .iter()
            .map(|pi| {
                *index_of.entry(pi.bits().to_vec()).or_insert_with(|| {
                    unique.push(pi.clone());
                    unique.len() - 1
                })
            })
            .collect();
        pos.push(clause);
    }
    debug!("petrick: {} clauses over {} PIs", pos.len(), unique.len());

    let products = expand_to_sop(&pos);
    let minimal = absorb(products);

    // Rank by term count, then by total literal count.
    let min_terms = minimal.iter().map(Vec::len).min().unwrap_or(0);
    let cheapest: Vec<&Vec<usize>> = minimal.iter().filter(|p| p.len() == min_terms).collect();

    let literal_cost =
        |p: &[usize]| -> usize { p.iter().map(|&i| unique[i].literal_count()).sum() };
    let min_literals = cheapest
        .iter()
        .map(|p| literal_cost(p))
        .min()
        .unwrap_or(0);

    let solutions: Vec<Vec<Term>> = cheapest
        .into_iter()
        .filter(|p| literal_cost(p) == min_literals)
        .map(|p| p.iter().map(|&i| unique[i].clone()).collect())
        .collect();

    for (i, solution) in solutions.iter().enumerate() {
        let rendered: Vec<String> = solution.iter().map(|t| t.to_string()).collect();
        debug!("petrick solution {}: {}", i + 1, rendered.join(" + "));
    }
    Ok(solutions)
}

/// Expands a product of sums into a sum of products by iterative
/// distribution. Indices already present in a product are merged, and the
/// product list is deduplicated after every clause to bound growth.
fn expand_to_sop(pos: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let mut products: Vec<Vec<usize>> = pos[0].iter().map(|&i| vec![i]).collect();

    for clause in &pos[1..] {
        let mut next: Vec<Vec<usize>> = Vec::new();
        for product in &products {
            for &i in clause {
                let mut grown = product.clone();
                if !grown.contains(&i) {
                    grown.push(i);
                }
                grown.sort_unstable();
                next.push(grown);
            }
        }
        next.sort();
        next.dedup();
        products = next;
    }

    products
}

/// Drops every product that is a strict superset of another (absorption:
/// `X + XY = X`). Input products are sorted and unique.
fn absorb(products: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    let is_subset = |small: &[usize], big: &[usize]| small.iter().all(|i| big.contains(i));
    products
        .iter()
        .filter(|p| {
            !products
                .iter()
                .any(|q| q.len() < p.len() && is_subset(q, p))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use test_log::test;

    use super::*;
    use crate::chart::analyze_coverage;
    use crate::implicants::generate_prime_implicants;

    fn terms(values: &[u32], width: usize) -> Vec<Term> {
        values
            .iter()
            .map(|&v| Term::minterm(v, width).unwrap())
            .collect()
    }

    #[test]
    fn test_empty_chart_means_epi_only() {
        let chart = CoverageChart::new();
        assert_eq!(solve_exact_cover(&chart).unwrap(), Vec::<Vec<Term>>::new());
    }

    #[test]
    fn test_empty_column_is_invariant_failure() {
        let mut chart = CoverageChart::new();
        chart.insert(3, Vec::new());
        assert_eq!(
            solve_exact_cover(&chart).unwrap_err(),
            Error::UncoverableMinterm { minterm: 3 }
        );
    }

    #[test]
    fn test_cyclic_w3_two_minimal_covers() {
        // The classic cyclic case: exactly two 3-term covers,
        // {00-, -10, 1-1} and {0-0, -01, 11-}.
        let required: BTreeSet<u32> = [0, 1, 2, 5, 6, 7].into_iter().collect();
        let pis = generate_prime_implicants(&terms(&[0, 1, 2, 5, 6, 7], 3), &[]);
        let (_, residual) = analyze_coverage(&pis, &required);
        let solutions = solve_exact_cover(&residual).unwrap();
        assert_eq!(solutions.len(), 2);

        let as_sets: BTreeSet<BTreeSet<String>> = solutions
            .iter()
            .map(|s| s.iter().map(|t| t.pattern()).collect())
            .collect();
        let expected: BTreeSet<BTreeSet<String>> = [
            ["00-", "-10", "1-1"],
            ["0-0", "-01", "11-"],
        ]
        .iter()
        .map(|s| s.iter().map(|p| p.to_string()).collect())
        .collect();
        assert_eq!(as_sets, expected);

        // Every returned cover actually covers all six minterms.
        for solution in &solutions {
            let covered: BTreeSet<u32> = solution
                .iter()
                .flat_map(|t| t.covered().iter().copied())
                .collect();
            assert_eq!(covered, required);
        }
    }

    #[test]
    fn test_absorption() {
        let products = vec![vec![0], vec![0, 1], vec![1, 2]];
        let minimal = absorb(products);
        assert_eq!(minimal, vec![vec![0], vec![1, 2]]);
    }

    #[test]
    fn test_expand_merges_repeated_index() {
        // (0 + 1)(0 + 2) -> 0, 02, 01, 012; with absorption only 0, 12.
        let pos = vec![vec![0, 1], vec![0, 2]];
        let products = expand_to_sop(&pos);
        assert!(products.contains(&vec![0]));
        assert!(!products.contains(&vec![0, 0]));
        let minimal = absorb(products);
        assert_eq!(minimal, vec![vec![0], vec![1, 2]]);
    }

    #[test]
    fn test_literal_tiebreak() {
        // Two single-PI covers of one column: the solver must keep only
        // the cheaper (fewer literals) alternative.
        let wide = Term::combine(
            &Term::combine(&terms(&[0], 3)[0], &terms(&[1], 3)[0]),
            &Term::combine(&terms(&[2], 3)[0], &terms(&[3], 3)[0]),
        ); // 0-- with 1 literal
        let narrow = Term::combine(&terms(&[0], 3)[0], &terms(&[4], 3)[0]); // -00, 2 literals
        let mut chart = CoverageChart::new();
        chart.insert(0, vec![narrow, wide.clone()]);

        let solutions = solve_exact_cover(&chart).unwrap();
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0], vec![wide]);
    }
}
