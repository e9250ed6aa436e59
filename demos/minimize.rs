use clap::Parser;

use qm_rs::minimize::{Minimized, Minimizer};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Number of variables (1..=20).
    #[arg(value_name = "INT", default_value = "4")]
    width: usize,

    /// Required minterm indices.
    #[clap(
        long,
        value_name = "INT",
        value_delimiter = ',',
        default_value = "0,1,2,5,6,7,8,9,10,14"
    )]
    minterms: Vec<u32>,

    /// Don't-care indices.
    #[clap(long, value_name = "INT", value_delimiter = ',')]
    dont_cares: Vec<u32>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    println!("args = {:?}", args);

    let minimizer = Minimizer::new(args.width, &args.minterms, &args.dont_cares)?;
    println!("minimizer = {:?}", minimizer);

    match minimizer.minimize()? {
        Minimized::Zero => println!("f = 0"),
        Minimized::One => println!("f = 1"),
        Minimized::Sop(solutions) => {
            println!("selected implicants:");
            for term in &solutions.essential {
                println!("- {} ({})", term.pattern(), term);
            }
            for (i, expr) in solutions.expressions.iter().enumerate() {
                println!("F{} = {}", i + 1, expr);
            }
        }
    }

    Ok(())
}
