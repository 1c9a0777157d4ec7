//! Example of computing a minimal model with both strategies.
use minmodel::{
    clause,
    solver::{Algorithm, Outcome, Solver, SolverOptions},
};

fn main() {
    for algorithm in [Algorithm::Mm, Algorithm::Mr] {
        let options = SolverOptions::builder().algorithm(algorithm).build();
        let mut solver = Solver::new(options);

        // A || B, A => C, C => D
        solver.add_clause(clause![1, 2]);
        solver.add_clause(clause![-1, 3]);
        solver.add_clause(clause![-3, 4]);

        match solver.compute_minimal_model().unwrap() {
            Outcome::Minimal(model) => {
                // Either {B} or {A, C, D}.
                assert!(model.satisfies(solver.formula().clauses()));
                println!("{algorithm}: {model}");
            }
            Outcome::Unsat => unreachable!("formula is satisfiable"),
        }

        println!("{}\n", solver.statistics());
    }
}
