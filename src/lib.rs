//! # qm-rs: Quine-McCluskey logic minimization in Rust
//!
//! **`qm-rs`** is an exact two-level minimizer for Boolean functions given as
//! minterms (or maxterms) plus don't-care terms. It produces one or more
//! minimal **sum-of-products (SOP)** expressions using the Quine-McCluskey
//! tabulation method with Petrick's exact-cover refinement.
//!
//! ## How does it work?
//!
//! Minimization runs as a strictly forward pipeline:
//!
//! 1. **Tabulation**: terms are grouped by Hamming weight and repeatedly
//!    merged whenever two terms differ in exactly one bit, yielding the
//!    complete set of **prime implicants (PIs)**.
//! 2. **Coverage analysis**: a chart maps every required minterm to the PIs
//!    covering it; a minterm with a single coverer makes that PI
//!    **essential**.
//! 3. **Dominance reduction**: redundant chart columns and dominated PI rows
//!    are eliminated to a fixed point, and newly forced ("best fit") PIs are
//!    extracted.
//! 4. **Petrick's method**: whatever cyclic chart remains is solved exactly,
//!    enumerating *all* covers of globally minimal cost (term count, then
//!    literal count).
//!
//! ## Key Properties
//!
//! - **Exact**: every returned expression achieves the global minimum; no
//!   heuristics.
//! - **All solutions**: ties are enumerated, not broken arbitrarily.
//! - **Value-oriented**: terms are immutable after construction and charts
//!   are rebuilt rather than patched, so there is no hidden mutable state
//!   between pipeline stages.
//! - **Up to 20 variables**, named `A`, `B`, `C`, ... with the first
//!   variable as the most significant bit.
//!
//! ## Basic Usage
//!
//! ```rust
//! use qm_rs::minimize::{Minimized, Minimizer};
//!
//! // f(A, B, C) = Σm(0, 1, 2, 3, 7)
//! let minimizer = Minimizer::new(3, &[0, 1, 2, 3, 7], &[]).unwrap();
//!
//! match minimizer.minimize().unwrap() {
//!     Minimized::Sop(solutions) => {
//!         assert_eq!(solutions.expressions, vec!["A' + BC"]);
//!     }
//!     Minimized::Zero => println!("f = 0"),
//!     Minimized::One => println!("f = 1"),
//! }
//! ```
//!
//! Degenerate inputs produce explicit results instead of errors: no
//! minterms at all yields [`Minimized::Zero`][crate::minimize::Minimized],
//! and a function whose minterms and don't-cares fill the whole truth table
//! yields `Minimized::One`.
//!
//! ## Core Components
//!
//! - **[`term`]**: the [`Term`][crate::term::Term] value type (fixed-width
//!   `0`/`1`/`-` pattern plus covered minterms).
//! - **[`implicants`]**: prime implicant generation.
//! - **[`chart`]**: coverage chart and essential PI extraction.
//! - **[`dominance`]**: row/column dominance reduction and best-fit picks.
//! - **[`petrick`]**: exact-cover enumeration of minimal residual covers.
//! - **[`expression`]**: final SOP expression assembly.
//! - **[`minimize`]**: the [`Minimizer`][crate::minimize::Minimizer] driver
//!   tying the stages together.

pub mod chart;
pub mod dominance;
pub mod error;
pub mod expression;
pub mod implicants;
pub mod minimize;
pub mod petrick;
pub mod term;
