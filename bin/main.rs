use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use minmodel::formula::Formula;
use minmodel::oracle::OracleKind;
use minmodel::solver::{Algorithm, Outcome, Solver, SolverOptions};

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    None,
}

impl LogLevel {
    fn to_trace(&self) -> Option<tracing::Level> {
        Some(match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::None => return None,
        })
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to DIMACS file with the CNF formula
    #[arg(short, long, value_name = "dimacs.cnf")]
    dimacs_path: PathBuf,

    /// Strategy computing the minimal model.
    #[arg(short, long, value_enum, default_value_t = Algorithm::Mm)]
    solver: Algorithm,

    /// Carry the mr-reduced formula from one iteration to the next.
    #[arg(short, long)]
    mr: bool,

    /// SAT oracle searching for models.
    #[arg(short, long, value_enum, default_value_t = OracleKind::Varisat)]
    oracle: OracleKind,

    /// SAT oracle for the minimality check of MR. Defaults to `--oracle`.
    #[arg(short, long, value_enum)]
    check_oracle: Option<OracleKind>,

    /// Verbosity level. See `tracing::Level` for more information.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    verbosity: LogLevel,

    /// Print model counts and timing.
    #[arg(short, long)]
    print_statistics: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if let Some(level) = args.verbosity.to_trace() {
        tracing_subscriber::fmt().with_max_level(level).init();
    }

    let f = File::open(&args.dimacs_path)
        .with_context(|| format!("could not open {}", args.dimacs_path.display()))?;
    let formula = Formula::from_dimacs(&mut BufReader::new(f))
        .context("could not read formula from the DIMACS file")?;

    let options = SolverOptions::builder()
        .algorithm(args.solver)
        .mr(args.mr)
        .oracle(args.oracle)
        .maybe_check_oracle(args.check_oracle)
        .build();

    let mut solver = Solver::new(options);
    solver.append_formula(&formula);

    match solver
        .compute_minimal_model()
        .context("could not compute minimal model")?
    {
        Outcome::Minimal(model) => {
            println!("s SATISFIABLE");
            let literals: Vec<String> = model
                .literals()
                .iter()
                .map(ToString::to_string)
                .collect();
            if literals.is_empty() {
                println!("v 0");
            } else {
                println!("v {} 0", literals.join(" "));
            }
        }
        Outcome::Unsat => println!("s UNSATISFIABLE"),
    }

    if args.print_statistics {
        println!("{}", solver.statistics());
    }

    Ok(())
}
