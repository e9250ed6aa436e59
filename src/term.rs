//! Fixed-width terms (minterms and merged implicants).
//!
//! A [`Term`] is the basic value of the minimization engine: a pattern of
//! `0`/`1`/`-` symbols of fixed width, together with the set of original
//! minterm indices it covers. Terms are immutable after construction;
//! merging two terms produces a new one.
//!
//! # Invariants
//!
//! - The pattern length equals the width of the run (1..=20 variables).
//! - The covered set is non-empty: a singleton for an original minterm,
//!   the union of both sources for a merged implicant.
//! - Two terms are equal iff their patterns are equal. Merged implicants
//!   reached via different merge paths therefore unify.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::Error;

/// Maximum supported number of variables.
pub const MAX_WIDTH: usize = 20;

/// A single position of a term pattern.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Bit {
    /// The variable appears complemented.
    Zero,
    /// The variable appears uncomplemented.
    One,
    /// The variable was merged out.
    Dash,
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bit::Zero => write!(f, "0"),
            Bit::One => write!(f, "1"),
            Bit::Dash => write!(f, "-"),
        }
    }
}

/// A minterm or merged implicant of fixed width.
///
/// The first variable corresponds to the most significant bit.
/// Equality, ordering and hashing consider the pattern only.
#[derive(Debug, Clone)]
pub struct Term {
    value: Option<u32>,
    bits: Vec<Bit>,
    covered: BTreeSet<u32>,
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl Eq for Term {}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Term {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.bits.cmp(&other.bits)
    }
}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl Term {
    /// Creates a term for the original minterm `value` of the given width.
    ///
    /// The pattern is the zero-padded binary representation of `value`,
    /// most significant bit first; the covered set is `{value}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWidth`] for widths outside `1..=20` and
    /// [`Error::ValueOutOfRange`] for `value >= 2^width`.
    pub fn minterm(value: u32, width: usize) -> Result<Self, Error> {
        if width == 0 || width > MAX_WIDTH {
            return Err(Error::InvalidWidth { width });
        }
        if (value as u64) >= (1u64 << width) {
            return Err(Error::ValueOutOfRange { value, width });
        }
        let bits = (0..width)
            .rev()
            .map(|i| if (value >> i) & 1 == 1 { Bit::One } else { Bit::Zero })
            .collect();
        Ok(Self {
            value: Some(value),
            bits,
            covered: BTreeSet::from([value]),
        })
    }

    /// Checks whether two terms can merge.
    ///
    /// Two terms combine iff they differ in exactly one position and that
    /// position is defined (`0` or `1`) in both. A `-` is a literal symbol
    /// that must match identically: it marks a variable merged out in an
    /// earlier round.
    pub fn can_combine(a: &Term, b: &Term) -> bool {
        assert_eq!(a.width(), b.width(), "Terms must have the same width");
        let mut diff = None;
        for (i, (&x, &y)) in a.bits.iter().zip(&b.bits).enumerate() {
            if x != y {
                if diff.is_some() {
                    return false;
                }
                diff = Some(i);
            }
        }
        match diff {
            Some(i) => a.bits[i] != Bit::Dash && b.bits[i] != Bit::Dash,
            None => false,
        }
    }

    /// Merges two combinable terms into a new implicant.
    ///
    /// The differing position becomes `-`, the covered sets are unioned,
    /// and the result carries no decimal value.
    ///
    /// # Panics
    ///
    /// Panics if `can_combine(a, b)` does not hold. Silently accepting a
    /// malformed merge would corrupt the prime implicant set.
    pub fn combine(a: &Term, b: &Term) -> Term {
        assert!(
            Term::can_combine(a, b),
            "Terms {} and {} differ in more than one position",
            a.pattern(),
            b.pattern()
        );
        let bits = a
            .bits
            .iter()
            .zip(&b.bits)
            .map(|(&x, &y)| if x == y { x } else { Bit::Dash })
            .collect();
        Term {
            value: None,
            bits,
            covered: a.covered.union(&b.covered).copied().collect(),
        }
    }

    /// Folds a same-pattern duplicate into this term's covered set.
    ///
    /// Used during tabulation to unify implicants reached via different
    /// merge paths.
    pub(crate) fn absorb_covered(&mut self, other: &Term) {
        debug_assert_eq!(self.bits, other.bits, "Patterns must match");
        self.covered.extend(other.covered.iter().copied());
    }

    /// The width (number of variables) of this term.
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// The decimal value for an original minterm, `None` for a merged implicant.
    pub fn value(&self) -> Option<u32> {
        self.value
    }

    /// The pattern positions of this term.
    pub fn bits(&self) -> &[Bit] {
        &self.bits
    }

    /// The set of original minterm indices this term covers.
    pub fn covered(&self) -> &BTreeSet<u32> {
        &self.covered
    }

    /// The number of `1` positions (Hamming weight of the pattern).
    pub fn weight(&self) -> usize {
        self.bits.iter().filter(|&&b| b == Bit::One).count()
    }

    /// The number of defined (non-`-`) positions, i.e. literals in the product.
    pub fn literal_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b != Bit::Dash).count()
    }

    /// The pattern as a `0`/`1`/`-` string, e.g. `"10-0"`.
    pub fn pattern(&self) -> String {
        self.bits.iter().map(|b| b.to_string()).collect()
    }

    /// Renders this term as a product of literals.
    ///
    /// Variable `i` is named `'A' + i` (the first variable is the most
    /// significant bit): `1` yields the plain literal, `0` the primed
    /// literal, `-` is omitted. A term with no defined position renders
    /// as `"1"`.
    pub fn expression(&self) -> String {
        let mut expr = String::new();
        for (i, &bit) in self.bits.iter().enumerate() {
            let var = (b'A' + i as u8) as char;
            match bit {
                Bit::One => expr.push(var),
                Bit::Zero => {
                    expr.push(var);
                    expr.push('\'');
                }
                Bit::Dash => {}
            }
        }
        if expr.is_empty() {
            expr.push('1');
        }
        expr
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_minterm_pattern() {
        let t = Term::minterm(5, 4).unwrap();
        assert_eq!(t.pattern(), "0101");
        assert_eq!(t.value(), Some(5));
        assert_eq!(t.covered(), &BTreeSet::from([5]));
        assert_eq!(t.weight(), 2);
        assert_eq!(t.literal_count(), 4);
    }

    #[test]
    fn test_minterm_zero_padded() {
        let t = Term::minterm(1, 3).unwrap();
        assert_eq!(t.pattern(), "001");
    }

    #[test]
    fn test_minterm_rejects_bad_width() {
        assert_eq!(
            Term::minterm(0, 0).unwrap_err(),
            Error::InvalidWidth { width: 0 }
        );
        assert_eq!(
            Term::minterm(0, 21).unwrap_err(),
            Error::InvalidWidth { width: 21 }
        );
    }

    #[test]
    fn test_minterm_rejects_out_of_range() {
        assert_eq!(
            Term::minterm(8, 3).unwrap_err(),
            Error::ValueOutOfRange { value: 8, width: 3 }
        );
        assert!(Term::minterm(7, 3).is_ok());
    }

    #[test]
    fn test_can_combine_one_bit() {
        let a = Term::minterm(0, 3).unwrap(); // 000
        let b = Term::minterm(1, 3).unwrap(); // 001
        assert!(Term::can_combine(&a, &b));
    }

    #[test]
    fn test_can_combine_rejects_two_bits() {
        let a = Term::minterm(0, 3).unwrap(); // 000
        let b = Term::minterm(3, 3).unwrap(); // 011
        assert!(!Term::can_combine(&a, &b));
    }

    #[test]
    fn test_can_combine_rejects_equal() {
        let a = Term::minterm(5, 3).unwrap();
        let b = Term::minterm(5, 3).unwrap();
        assert!(!Term::can_combine(&a, &b));
    }

    #[test]
    fn test_can_combine_dash_must_match() {
        // 00- vs 01- merge fine (dashes aligned), but 00- vs 000 must not:
        // the single difference would be against a dash.
        let a = Term::combine(
            &Term::minterm(0, 3).unwrap(),
            &Term::minterm(1, 3).unwrap(),
        ); // 00-
        let b = Term::combine(
            &Term::minterm(2, 3).unwrap(),
            &Term::minterm(3, 3).unwrap(),
        ); // 01-
        assert!(Term::can_combine(&a, &b));

        let c = Term::minterm(0, 3).unwrap(); // 000
        assert!(!Term::can_combine(&a, &c));
    }

    #[test]
    fn test_combine_unions_covered() {
        let a = Term::minterm(0, 3).unwrap();
        let b = Term::minterm(1, 3).unwrap();
        let m = Term::combine(&a, &b);
        assert_eq!(m.pattern(), "00-");
        assert_eq!(m.value(), None);
        assert_eq!(m.covered(), &BTreeSet::from([0, 1]));
    }

    #[test]
    #[should_panic(expected = "differ in more than one position")]
    fn test_combine_malformed_panics() {
        let a = Term::minterm(0, 3).unwrap();
        let b = Term::minterm(3, 3).unwrap();
        let _ = Term::combine(&a, &b);
    }

    #[test]
    fn test_equality_by_pattern_only() {
        // 0,1 -> 00- and 1,0 -> 00- via the other order: same pattern.
        let a = Term::combine(
            &Term::minterm(0, 3).unwrap(),
            &Term::minterm(1, 3).unwrap(),
        );
        let b = Term::combine(
            &Term::minterm(1, 3).unwrap(),
            &Term::minterm(0, 3).unwrap(),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_expression() {
        let t = Term::minterm(5, 4).unwrap(); // 0101
        assert_eq!(t.expression(), "A'BC'D");

        let m = Term::combine(
            &Term::minterm(5, 4).unwrap(),
            &Term::minterm(7, 4).unwrap(),
        ); // 01-1
        assert_eq!(m.expression(), "A'BD");
        assert_eq!(m.to_string(), "A'BD");
    }

    #[test]
    fn test_expression_full_width() {
        let t = Term::minterm(0, 2).unwrap();
        assert_eq!(t.expression(), "A'B'");
        let t = Term::minterm(3, 2).unwrap();
        assert_eq!(t.expression(), "AB");
    }
}
