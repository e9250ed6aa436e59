//! Walkthrough of a cyclic coverage chart.
//!
//! The function f(A,B,C) = Σm(0,1,2,5,6,7) has no essential prime
//! implicants and no dominance to exploit, so the whole cover selection
//! falls to Petrick's method, which finds two equally minimal covers.

use std::collections::BTreeSet;

use qm_rs::chart::{analyze_coverage, residual_pis};
use qm_rs::implicants::generate_prime_implicants;
use qm_rs::minimize::{Minimized, Minimizer};
use qm_rs::term::Term;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let minterms: Vec<u32> = vec![0, 1, 2, 5, 6, 7];
    let width = 3;

    let terms: Vec<Term> = minterms
        .iter()
        .map(|&v| Term::minterm(v, width))
        .collect::<Result<_, _>>()?;
    let pis = generate_prime_implicants(&terms, &[]);
    println!("prime implicants:");
    for pi in &pis {
        println!("- {} ({})", pi.pattern(), pi);
    }

    let required: BTreeSet<u32> = minterms.iter().copied().collect();
    let (essential, residual) = analyze_coverage(&pis, &required);
    println!("essential: {} PIs", essential.len());
    println!("residual chart:");
    for (m, column) in &residual {
        let names: Vec<String> = column.iter().map(|pi| pi.pattern()).collect();
        println!("- minterm {}: {}", m, names.join(", "));
    }
    println!("residual candidates: {}", residual_pis(&residual).len());

    let minimizer = Minimizer::new(width, &minterms, &[])?;
    if let Minimized::Sop(solutions) = minimizer.minimize()? {
        for (i, expr) in solutions.expressions.iter().enumerate() {
            println!("F{} = {}", i + 1, expr);
        }
    }

    Ok(())
}
