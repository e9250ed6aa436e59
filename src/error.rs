//! Error types for the minimization engine.

use std::fmt;

/// Errors reported by the minimization engine.
///
/// Degenerate but well-defined inputs (no minterms, all rows covered) are
/// *not* errors: they produce explicit result values instead
/// (see [`Minimized`][crate::minimize::Minimized]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested width is zero or exceeds the supported maximum.
    InvalidWidth {
        /// The rejected width.
        width: usize,
    },
    /// A term value does not fit into the truth table of the given width.
    ValueOutOfRange {
        /// The rejected term value.
        value: u32,
        /// The width of the run.
        width: usize,
    },
    /// The same row index was listed both as required and as a don't-care.
    ConflictingTerm {
        /// The conflicting row index.
        value: u32,
    },
    /// A residual minterm is covered by no prime implicant.
    ///
    /// This cannot happen for a correctly built coverage chart; it signals
    /// an internal invariant violation upstream of the exact-cover solver.
    UncoverableMinterm {
        /// The uncovered minterm index.
        minterm: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidWidth { width } => {
                write!(f, "Invalid width {} (supported range: 1..=20)", width)
            }
            Error::ValueOutOfRange { value, width } => {
                write!(
                    f,
                    "Term value {} out of range for width {} (valid range: 0..{})",
                    value,
                    width,
                    1u64 << width
                )
            }
            Error::ConflictingTerm { value } => {
                write!(f, "Term {} is both a minterm and a don't-care", value)
            }
            Error::UncoverableMinterm { minterm } => {
                write!(
                    f,
                    "Minterm {} is covered by no prime implicant (internal invariant violation)",
                    minterm
                )
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_width() {
        let err = Error::InvalidWidth { width: 21 };
        assert!(err.to_string().contains("Invalid width 21"));
    }

    #[test]
    fn test_display_value_out_of_range() {
        let err = Error::ValueOutOfRange { value: 16, width: 4 };
        let msg = err.to_string();
        assert!(msg.contains("16"));
        assert!(msg.contains("0..16"));
    }

    #[test]
    fn test_display_conflicting_term() {
        let err = Error::ConflictingTerm { value: 5 };
        assert!(err.to_string().contains("both a minterm and a don't-care"));
    }
}
