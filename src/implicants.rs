//! Prime implicant generation by iterative tabulation.
//!
//! The classic Quine-McCluskey first stage: all input terms (minterms and
//! don't-cares) are partitioned into groups by Hamming weight, and terms
//! from adjacent groups are merged whenever they differ in exactly one
//! defined position. Terms that survive a full pass without merging are
//! prime implicants.
//!
//! Don't-cares participate in merging like any other term; whether a row
//! must actually be covered is decided later by the coverage chart.

use std::collections::{BTreeMap, HashSet};

use log::debug;

use crate::term::{Bit, Term};

/// Computes the complete set of prime implicants for the given terms.
///
/// The result is deterministic: terms are processed in weight-group order
/// and merged implicants are deduplicated by pattern, keeping the union of
/// the covered minterm sets.
///
/// Returns an empty vector for empty input.
pub fn generate_prime_implicants(minterms: &[Term], dont_cares: &[Term]) -> Vec<Term> {
    let all: Vec<Term> = minterms.iter().chain(dont_cares).cloned().collect();
    let Some(first) = all.first() else {
        return Vec::new();
    };
    let width = first.width();

    // Initial weight groups. Duplicate input patterns are unified up front.
    let mut groups: Vec<Vec<Term>> = vec![Vec::new(); width + 1];
    {
        let mut seen: BTreeMap<Vec<Bit>, Term> = BTreeMap::new();
        for term in all {
            debug_assert_eq!(term.width(), width, "All terms must share one width");
            seen.entry(term.bits().to_vec())
                .and_modify(|t| t.absorb_covered(&term))
                .or_insert(term);
        }
        for term in seen.into_values() {
            let w = term.weight();
            groups[w].push(term);
        }
    }

    let mut primes: Vec<Term> = Vec::new();
    let mut prime_patterns: HashSet<Vec<Bit>> = HashSet::new();

    // Each round replaces one defined bit with a dash, so at most `width`
    // rounds can perform a merge.
    for round in 0..=width {
        let mut used: HashSet<Vec<Bit>> = HashSet::new();
        let mut produced: BTreeMap<Vec<Bit>, Term> = BTreeMap::new();

        for w in 0..width {
            for a in &groups[w] {
                for b in &groups[w + 1] {
                    if !Term::can_combine(a, b) {
                        continue;
                    }
                    let merged = Term::combine(a, b);
                    used.insert(a.bits().to_vec());
                    used.insert(b.bits().to_vec());
                    produced
                        .entry(merged.bits().to_vec())
                        .and_modify(|t| t.absorb_covered(&merged))
                        .or_insert(merged);
                }
            }
        }

        // Terms that merged with nothing this round are prime.
        for group in &groups {
            for term in group {
                if !used.contains(term.bits()) && prime_patterns.insert(term.bits().to_vec()) {
                    debug!("prime implicant: {} ({})", term.pattern(), term);
                    primes.push(term.clone());
                }
            }
        }

        if produced.is_empty() {
            break;
        }
        debug!("round {}: {} merged terms", round + 1, produced.len());

        let mut next: Vec<Vec<Term>> = vec![Vec::new(); width + 1];
        for term in produced.into_values() {
            let w = term.weight();
            next[w].push(term);
        }
        groups = next;
    }

    primes
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use test_log::test;

    use super::*;
    use crate::error::Error;

    fn terms(values: &[u32], width: usize) -> Vec<Term> {
        values
            .iter()
            .map(|&v| Term::minterm(v, width).unwrap())
            .collect()
    }

    fn patterns(pis: &[Term]) -> BTreeSet<String> {
        pis.iter().map(|t| t.pattern()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(generate_prime_implicants(&[], &[]).is_empty());
    }

    #[test]
    fn test_single_minterm_is_prime() {
        let pis = generate_prime_implicants(&terms(&[5], 3), &[]);
        assert_eq!(patterns(&pis), BTreeSet::from(["101".to_string()]));
    }

    #[test]
    fn test_adjacent_pair_merges() {
        let pis = generate_prime_implicants(&terms(&[0, 1], 3), &[]);
        assert_eq!(patterns(&pis), BTreeSet::from(["00-".to_string()]));
        assert_eq!(pis[0].covered(), &BTreeSet::from([0, 1]));
    }

    #[test]
    fn test_textbook_w4() {
        // W=4, m = {0,1,2,5,6,7,8,9,10,14}: six prime implicants.
        let pis = generate_prime_implicants(&terms(&[0, 1, 2, 5, 6, 7, 8, 9, 10, 14], 4), &[]);
        let expected: BTreeSet<String> = ["-00-", "-0-0", "--10", "0-01", "01-1", "011-"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(patterns(&pis), expected);

        let quad = pis.iter().find(|t| t.pattern() == "-00-").unwrap();
        assert_eq!(quad.covered(), &BTreeSet::from([0, 1, 8, 9]));
        let quad = pis.iter().find(|t| t.pattern() == "--10").unwrap();
        assert_eq!(quad.covered(), &BTreeSet::from([2, 6, 10, 14]));
    }

    #[test]
    fn test_cyclic_w3() {
        // The classic cyclic chart: every PI pairs exactly two minterms.
        let pis = generate_prime_implicants(&terms(&[0, 1, 2, 5, 6, 7], 3), &[]);
        let expected: BTreeSet<String> = ["00-", "0-0", "-01", "-10", "1-1", "11-"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(patterns(&pis), expected);
    }

    #[test]
    fn test_dont_cares_enable_merges() {
        // m = {1}, d = {0}: the don't-care lets 001 merge up to 00-.
        let pis = generate_prime_implicants(&terms(&[1], 3), &terms(&[0], 3));
        assert_eq!(patterns(&pis), BTreeSet::from(["00-".to_string()]));
    }

    #[test]
    fn test_merge_paths_unify() {
        // {0,1,2,3} forms the quad 00-- (W=4) reachable via two distinct
        // intermediate pairs; it must come out once, covering all four.
        let pis = generate_prime_implicants(&terms(&[0, 1, 2, 3], 4), &[]);
        assert_eq!(patterns(&pis), BTreeSet::from(["00--".to_string()]));
        assert_eq!(pis[0].covered(), &BTreeSet::from([0, 1, 2, 3]));
    }

    #[test]
    fn test_full_cube_collapses() {
        // All rows of W=2 merge into the single all-dash implicant.
        let pis = generate_prime_implicants(&terms(&[0, 1, 2, 3], 2), &[]);
        assert_eq!(patterns(&pis), BTreeSet::from(["--".to_string()]));
        assert_eq!(pis[0].covered(), &BTreeSet::from([0, 1, 2, 3]));
    }

    #[test]
    fn test_width_validation_upstream() {
        // Range errors are caught at Term construction, before generation.
        assert_eq!(
            Term::minterm(4, 2).unwrap_err(),
            Error::ValueOutOfRange { value: 4, width: 2 }
        );
    }
}
