//! The minimization pipeline.
//!
//! [`Minimizer`] owns the validated term sets of one run and composes the
//! pipeline stages: prime implicant generation, coverage analysis,
//! dominance reduction, exact-cover solving, and expression assembly.
//! Nothing is shared between runs; every stage threads explicit values.
//!
//! # Example
//!
//! ```
//! use qm_rs::minimize::{Minimized, Minimizer};
//!
//! let m = Minimizer::new(4, &[0, 1, 2, 5, 6, 7, 8, 9, 10, 14], &[]).unwrap();
//! match m.minimize().unwrap() {
//!     Minimized::Sop(solutions) => {
//!         assert_eq!(solutions.expressions, vec!["B'C' + CD' + A'BD"]);
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use std::collections::BTreeSet;
use std::fmt;

use log::debug;

use crate::chart;
use crate::dominance;
use crate::error::Error;
use crate::expression::assemble_expressions;
use crate::implicants::generate_prime_implicants;
use crate::petrick;
use crate::term::{Term, MAX_WIDTH};

/// The outcome of one minimization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Minimized {
    /// No minterms: the function is constant 0.
    Zero,
    /// Minterms and don't-cares fill the whole truth table: the function
    /// is constant 1 and no SOP minimization is attempted.
    One,
    /// A proper sum-of-products result.
    Sop(Solutions),
}

impl Minimized {
    /// The minimized expression strings, one per cost-minimal solution.
    ///
    /// The constants render as `"0"` and `"1"`.
    pub fn expressions(&self) -> Vec<String> {
        match self {
            Minimized::Zero => vec!["0".to_string()],
            Minimized::One => vec!["1".to_string()],
            Minimized::Sop(solutions) => solutions.expressions.clone(),
        }
    }
}

/// All cost-minimal solutions of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solutions {
    /// Essential PIs plus best-fit picks, in selection order.
    pub essential: Vec<Term>,
    /// One residual cover per minimal solution; empty iff `essential`
    /// alone covers every required minterm.
    pub covers: Vec<Vec<Term>>,
    /// One rendered SOP expression per solution (never empty).
    pub expressions: Vec<String>,
}

/// A single minimization run over validated term sets.
pub struct Minimizer {
    width: usize,
    minterms: Vec<Term>,
    dont_cares: Vec<Term>,
}

impl Minimizer {
    /// Creates a run from minterm and don't-care indices.
    ///
    /// Duplicate indices within a list are unified. An index present in
    /// both lists is rejected with [`Error::ConflictingTerm`]; width and
    /// range violations are rejected before any generation work begins.
    pub fn new(width: usize, minterms: &[u32], dont_cares: &[u32]) -> Result<Self, Error> {
        if width == 0 || width > MAX_WIDTH {
            return Err(Error::InvalidWidth { width });
        }
        let minterm_set: BTreeSet<u32> = minterms.iter().copied().collect();
        let dont_care_set: BTreeSet<u32> = dont_cares.iter().copied().collect();
        if let Some(&value) = minterm_set.intersection(&dont_care_set).next() {
            return Err(Error::ConflictingTerm { value });
        }
        Ok(Self {
            width,
            minterms: build_terms(&minterm_set, width)?,
            dont_cares: build_terms(&dont_care_set, width)?,
        })
    }

    /// Creates a run from *maxterm* indices.
    ///
    /// The minterm set is the complement of the maxterms and don't-cares
    /// against the full truth table of `width` variables.
    pub fn from_maxterms(width: usize, maxterms: &[u32], dont_cares: &[u32]) -> Result<Self, Error> {
        if width == 0 || width > MAX_WIDTH {
            return Err(Error::InvalidWidth { width });
        }
        let rows = 1u64 << width;
        let maxterm_set: BTreeSet<u32> = maxterms.iter().copied().collect();
        let dont_care_set: BTreeSet<u32> = dont_cares.iter().copied().collect();
        for &value in maxterm_set.iter().chain(&dont_care_set) {
            if value as u64 >= rows {
                return Err(Error::ValueOutOfRange { value, width });
            }
        }
        if let Some(&value) = maxterm_set.intersection(&dont_care_set).next() {
            return Err(Error::ConflictingTerm { value });
        }
        let minterm_set: BTreeSet<u32> = (0..rows as u32)
            .filter(|v| !maxterm_set.contains(v) && !dont_care_set.contains(v))
            .collect();
        Ok(Self {
            width,
            minterms: build_terms(&minterm_set, width)?,
            dont_cares: build_terms(&dont_care_set, width)?,
        })
    }

    /// The number of variables of this run.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The required minterms, ascending.
    pub fn minterms(&self) -> &[Term] {
        &self.minterms
    }

    /// The don't-care terms, ascending.
    pub fn dont_cares(&self) -> &[Term] {
        &self.dont_cares
    }

    /// Runs the full pipeline and returns every cost-minimal result.
    pub fn minimize(&self) -> Result<Minimized, Error> {
        let required: BTreeSet<u32> =
            self.minterms.iter().filter_map(Term::value).collect();
        if required.is_empty() {
            debug!("no minterms: constant 0");
            return Ok(Minimized::Zero);
        }
        let rows = 1u64 << self.width;
        if (self.minterms.len() + self.dont_cares.len()) as u64 == rows {
            debug!("all {} rows are minterms or don't-cares: constant 1", rows);
            return Ok(Minimized::One);
        }

        let pis = generate_prime_implicants(&self.minterms, &self.dont_cares);
        debug!("{} prime implicants", pis.len());

        let (mut essential, residual) = chart::analyze_coverage(&pis, &required);
        let candidates = chart::residual_pis(&residual);
        let reduction = dominance::reduce(residual, candidates);
        for pi in reduction.best_fit {
            if !essential.contains(&pi) {
                essential.push(pi);
            }
        }

        let covers = petrick::solve_exact_cover(&reduction.chart)?;
        verify_coverage(&required, &essential, &covers)?;

        let expressions = assemble_expressions(&essential, &covers);
        debug!("{} minimal solution(s)", expressions.len());
        Ok(Minimized::Sop(Solutions {
            essential,
            covers,
            expressions,
        }))
    }
}

impl fmt::Debug for Minimizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Minimizer")
            .field("width", &self.width)
            .field("minterms", &self.minterms.len())
            .field("dont_cares", &self.dont_cares.len())
            .finish()
    }
}

fn build_terms(values: &BTreeSet<u32>, width: usize) -> Result<Vec<Term>, Error> {
    values.iter().map(|&v| Term::minterm(v, width)).collect()
}

/// Confirms that every solution, together with the selected PIs, covers
/// the full required minterm set.
fn verify_coverage(
    required: &BTreeSet<u32>,
    essential: &[Term],
    covers: &[Vec<Term>],
) -> Result<(), Error> {
    let base: BTreeSet<u32> = essential
        .iter()
        .flat_map(|t| t.covered().iter().copied())
        .collect();
    let check = |extra: &[Term]| -> Result<(), Error> {
        let mut covered = base.clone();
        for term in extra {
            covered.extend(term.covered().iter().copied());
        }
        match required.difference(&covered).next() {
            Some(&minterm) => Err(Error::UncoverableMinterm { minterm }),
            None => Ok(()),
        }
    };
    if covers.is_empty() {
        check(&[])
    } else {
        covers.iter().try_for_each(|cover| check(cover))
    }
}
