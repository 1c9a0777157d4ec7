//! Example of reading a DIMACS formula and interrupting a long computation.
use std::thread;
use std::time::Duration;

use minmodel::{
    error::Error,
    formula::Formula,
    oracle::OracleKind,
    solver::{Algorithm, Solver, SolverOptions},
};

static DIMACS: &str = "\
c At most one of 1 and 2, 3 needs 1.
p cnf 3 3
1 2 3 0
-1 -2 0
-3 1 0
";

fn main() {
    let formula = Formula::from_dimacs(&mut DIMACS.as_bytes()).unwrap();
    println!("read formula:\n{formula}");

    let options = SolverOptions::builder()
        .algorithm(Algorithm::Mr)
        .mr(true)
        .oracle(OracleKind::Varisat)
        .check_oracle(OracleKind::Dpll)
        .build();
    let mut solver = Solver::new(options);
    solver.append_formula(&formula);

    // The formula is tiny, the interrupt usually arrives too late.
    let interrupter = solver.interrupter().clone();
    let handle = thread::spawn(move || {
        thread::sleep(Duration::from_millis(100));
        interrupter.interrupt();
    });

    match solver.compute_minimal_model() {
        Ok(outcome) => println!("{:?}", outcome.model().map(ToString::to_string)),
        Err(Error::Interrupted) => println!("interrupted"),
        Err(err) => panic!("{err}"),
    }
    handle.join().unwrap();
}
