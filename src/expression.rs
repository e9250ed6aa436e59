//! Final sum-of-products expression assembly.
//!
//! Combines the essential (and best-fit) PIs with each minimal residual
//! cover into one expression string per solution. A PI that is already
//! essential is skipped when it reappears inside a cover, so no product
//! term is emitted twice.

use std::collections::HashSet;

use crate::term::{Bit, Term};

/// Renders one SOP expression per minimal cover.
///
/// With no covers (empty residual chart), the essential PIs alone form the
/// single expression. With neither essentials nor covers, the result is
/// the constant-false marker `"0"`.
pub fn assemble_expressions(essential: &[Term], covers: &[Vec<Term>]) -> Vec<String> {
    if covers.is_empty() {
        return vec![render(essential, &[])];
    }
    covers
        .iter()
        .map(|cover| render(essential, cover))
        .collect()
}

fn render(essential: &[Term], cover: &[Term]) -> String {
    let known: HashSet<Vec<Bit>> = essential.iter().map(|t| t.bits().to_vec()).collect();
    let mut terms: Vec<String> = essential.iter().map(Term::expression).collect();
    for pi in cover {
        if !known.contains(pi.bits()) {
            terms.push(pi.expression());
        }
    }
    if terms.is_empty() {
        return "0".to_string();
    }
    terms.join(" + ")
}
