#[allow(clippy::module_inception)]
mod solver_test {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use crate::{
        clause,
        formula::Formula,
        literal::{Atom, Clause, Literal, Polarity},
        model::Model,
        oracle::{Interrupter, OracleKind},
        solver::{Algorithm, MrSolver, Outcome, Solver, SolverOptions},
    };

    fn random_formula(rng: &mut StdRng) -> Formula {
        let nv: Atom = rng.random_range(1..=6);
        let mut formula = Formula::with_atoms(nv);
        for _ in 0..rng.random_range(0..9) {
            let clause: Clause = (0..rng.random_range(1..=3))
                .map(|_| {
                    let atom = rng.random_range(1..=nv);
                    Literal::new(atom, Polarity::from(!rng.random_bool(1.0 / 3.0)))
                })
                .collect();
            formula.add_clause(clause);
        }
        formula
    }

    fn all_options() -> Vec<SolverOptions> {
        let mut options = Vec::new();
        for algorithm in [Algorithm::Mm, Algorithm::Mr] {
            for mr in [false, true] {
                for oracle in [OracleKind::Dpll, OracleKind::Varisat] {
                    options.push(
                        SolverOptions::builder()
                            .algorithm(algorithm)
                            .mr(mr)
                            .oracle(oracle)
                            .build(),
                    );
                }
            }
        }
        options
    }

    fn solve(options: SolverOptions, formula: &Formula) -> (Outcome, Solver) {
        let mut solver = Solver::new(options);
        solver.append_formula(formula);
        let outcome = solver.compute_minimal_model().unwrap();
        (outcome, solver)
    }

    /// All models of `formula`, by brute force.
    fn models(formula: &Formula) -> Vec<Model> {
        let nv = formula.nv();
        (0..1u32 << nv)
            .map(|bits| {
                let true_atoms: BTreeSet<Atom> =
                    (1..=nv).filter(|atom| (bits >> (atom - 1)) & 1 == 1).collect();
                Model::from_true_atoms(nv, &true_atoms)
            })
            .filter(|model| model.satisfies(formula.clauses()))
            .collect()
    }

    fn is_minimal(model: &Model, formula: &Formula) -> bool {
        let true_atoms = model.true_atoms();
        model.satisfies(formula.clauses())
            && models(formula).iter().all(|other| {
                let other = other.true_atoms();
                other == true_atoms || !other.is_subset(&true_atoms)
            })
    }

    fn model(literals: &[i32]) -> Model {
        Model::new(
            literals
                .iter()
                .map(|&literal| Literal::try_from(literal).unwrap())
                .collect(),
        )
    }

    #[test]
    fn implication_scenario() {
        let formula = Formula::from_clauses([clause![1, 2], clause![-1, 3]]);
        for options in all_options() {
            let (outcome, _) = solve(options.clone(), &formula);
            let m = outcome.model().unwrap();

            assert!(is_minimal(m, &formula), "{options:?}: {m}");
            assert!(!(m.is_true(1) && m.is_true(2)), "{options:?}: {m}");
        }
    }

    #[test]
    fn unit_scenario() {
        let formula = Formula::from_clauses([clause![1]]);
        for options in all_options() {
            let (outcome, _) = solve(options.clone(), &formula);
            assert_eq!(outcome, Outcome::Minimal(model(&[1])), "{options:?}");
        }
    }

    #[test]
    fn contradiction_scenario() {
        let formula = Formula::from_clauses([clause![1], clause![-1]]);
        for options in all_options() {
            let (outcome, _) = solve(options.clone(), &formula);
            assert!(!outcome.is_satisfiable(), "{options:?}");
            assert!(outcome.model().is_none(), "{options:?}");
        }
    }

    #[test]
    fn empty_formula() {
        let formula = Formula::with_atoms(3);
        for options in all_options() {
            let (outcome, _) = solve(options.clone(), &formula);
            assert_eq!(outcome, Outcome::Minimal(model(&[-1, -2, -3])), "{options:?}");
        }

        let (outcome, _) = solve(SolverOptions::default(), &Formula::new());
        assert_eq!(outcome, Outcome::Minimal(Model::default()));
    }

    #[test]
    fn disjunctive_cycle() {
        // 1 and 2 support each other, 3 or 4 starts the cycle.
        let formula = Formula::from_clauses([
            clause![-1, 2],
            clause![-2, 1],
            clause![3, 4, 1],
            clause![-3, -4],
        ]);
        for options in all_options() {
            let (outcome, _) = solve(options.clone(), &formula);
            let m = outcome.model().unwrap();
            assert!(is_minimal(m, &formula), "{options:?}: {m}");
            assert_eq!(m.true_atoms().len(), if m.is_true(1) { 2 } else { 1 });
        }
    }

    #[test]
    fn random_formulas() {
        let mut rng = StdRng::seed_from_u64(0x9e37_79b9_7f4a_7c15);
        for _ in 0..150 {
            let formula = random_formula(&mut rng);
            let satisfiable = !models(&formula).is_empty();

            for options in all_options() {
                let (outcome, solver) = solve(options.clone(), &formula);
                assert_eq!(
                    outcome.is_satisfiable(),
                    satisfiable,
                    "{options:?}\n{formula}"
                );

                if let Some(m) = outcome.model() {
                    assert_eq!(m.len(), formula.nv() as usize);
                    assert!(is_minimal(m, &formula), "{options:?}: {m}\n{formula}");
                }

                assert!(solver.compute_model_count() >= 1);
                if options.algorithm == Algorithm::Mr {
                    assert!(solver.check_model_count().is_some());
                }
            }
        }
    }

    #[test]
    fn accepted_models_are_minimal() {
        let mut rng = StdRng::seed_from_u64(0x0123_4567_89ab_cdef);
        for _ in 0..150 {
            let formula = random_formula(&mut rng);
            for model in models(&formula) {
                let mut checker = MrSolver::new(&SolverOptions::default(), Interrupter::new());
                if checker.check(formula.clauses(), formula.nv(), &model).unwrap() {
                    assert!(is_minimal(&model, &formula), "{model}\n{formula}");
                }
            }
        }
    }

    #[test]
    fn dimacs_input() {
        let dimacs = "c implication chain\np cnf 4 3\n1 2 0\n-1 3 0\n-3 4 0\n";
        let formula = Formula::from_dimacs(&mut dimacs.as_bytes()).unwrap();

        for options in all_options() {
            let (outcome, _) = solve(options.clone(), &formula);
            let m = outcome.model().unwrap();
            assert!(is_minimal(m, &formula), "{options:?}: {m}");
        }
    }
}
