// tests/solver_test.rs
use ito_paths::models::{Gbm, OuProcess};
use ito_paths::solvers::{EulerMaruyama, Milstein, Solver, SolverConfig, SolverState};
use ito_paths::{SdeError, Sivp};
use ndarray::{Array1, ArrayView1};

fn gbm_problem() -> Sivp {
    Gbm::new(100.0, 0.05, 0.2).sivp(0.0, 1.0).unwrap()
}

#[test]
fn test_lifecycle_runs_to_completion() {
    let config = SolverConfig {
        num_paths: 10,
        num_steps: 50,
        seed: 42,
    };
    let mut solver = Solver::new(EulerMaruyama::new(), gbm_problem(), config).unwrap();

    assert_eq!(solver.state(), SolverState::Initialized);
    assert_eq!(solver.current_step(), 0);

    solver.iterate().unwrap();
    assert_eq!(solver.state(), SolverState::Advancing);

    while solver.state() != SolverState::Complete {
        solver.iterate().unwrap();
    }
    assert_eq!(solver.current_step(), 50);

    // Further iteration is an error, not a silent no-op
    match solver.iterate() {
        Err(SdeError::OutOfSteps { num_steps }) => assert_eq!(num_steps, 50),
        other => panic!("expected OutOfSteps, got {:?}", other),
    }
}

#[test]
fn test_initial_column_holds_initial_condition() {
    let config = SolverConfig {
        num_paths: 7,
        num_steps: 20,
        seed: 1,
    };
    let solver = Solver::new(EulerMaruyama::new(), gbm_problem(), config).unwrap();

    for &x0 in solver.states().column(0) {
        assert_eq!(x0, 100.0);
    }
}

#[test]
fn test_invalid_configuration_at_construction() {
    let bad_paths = SolverConfig {
        num_paths: 0,
        num_steps: 10,
        seed: 1,
    };
    assert!(matches!(
        Solver::new(EulerMaruyama::new(), gbm_problem(), bad_paths),
        Err(SdeError::InvalidConfiguration { .. })
    ));

    let bad_steps = SolverConfig {
        num_paths: 10,
        num_steps: 0,
        seed: 1,
    };
    assert!(matches!(
        Solver::new(EulerMaruyama::new(), gbm_problem(), bad_steps),
        Err(SdeError::InvalidConfiguration { .. })
    ));
}

#[test]
fn test_determinism_across_instances() {
    let config = SolverConfig {
        num_paths: 25,
        num_steps: 40,
        seed: 777,
    };
    let solver1 = Solver::new(EulerMaruyama::new(), gbm_problem(), config).unwrap();
    let solver2 = Solver::new(EulerMaruyama::new(), gbm_problem(), config).unwrap();

    assert_eq!(
        solver1.brownian().increments(),
        solver2.brownian().increments()
    );
    assert_eq!(solver1.brownian().path(), solver2.brownian().path());
}

#[test]
fn test_schemes_share_the_same_draw() {
    let config = SolverConfig {
        num_paths: 25,
        num_steps: 40,
        seed: 777,
    };
    let euler = Solver::new(EulerMaruyama::new(), gbm_problem(), config).unwrap();
    let milstein = Solver::new(Milstein::new(), gbm_problem(), config).unwrap();

    // Same seed and configuration: both schemes consume identical noise
    assert_eq!(
        euler.brownian().increments(),
        milstein.brownian().increments()
    );
}

#[test]
fn test_solve_is_repeatable_on_one_draw() {
    let config = SolverConfig {
        num_paths: 5,
        num_steps: 30,
        seed: 9,
    };
    let mut solver = Solver::new(Milstein::new(), gbm_problem(), config).unwrap();

    let first = solver.solve().unwrap();
    let second = solver.solve().unwrap();

    assert_eq!(first.states(), second.states());
    assert_eq!(first.times(), second.times());
}

#[test]
fn test_reset_redraws_randomness() {
    let config = SolverConfig {
        num_paths: 5,
        num_steps: 30,
        seed: 9,
    };
    let mut solver = Solver::new(EulerMaruyama::new(), gbm_problem(), config).unwrap();

    let before = solver.brownian().increments().to_owned();
    let first = solver.solve().unwrap();
    assert_eq!(solver.state(), SolverState::Complete);

    solver.reset().unwrap();
    assert_eq!(solver.state(), SolverState::Initialized);
    assert_eq!(solver.current_step(), 0);
    assert_ne!(solver.brownian().increments(), before.view());

    let second = solver.solve().unwrap();
    assert_ne!(first.states(), second.states());
}

#[test]
fn test_zero_volatility_matches_deterministic_euler() {
    // dX = 0.5 X dt with no noise: the solver must reproduce plain Euler
    let problem = Sivp::new(
        1.0,
        0.0,
        1.0,
        |_t, x: ArrayView1<'_, f64>| x.mapv(|v| 0.5 * v),
        |_t, x: ArrayView1<'_, f64>| Array1::zeros(x.len()),
    )
    .unwrap();

    let num_steps = 100;
    let config = SolverConfig {
        num_paths: 4,
        num_steps,
        seed: 3,
    };
    let mut solver = Solver::new(EulerMaruyama::new(), problem, config).unwrap();
    let solution = solver.solve().unwrap();

    let dt = 1.0 / num_steps as f64;
    let mut expected = 1.0;
    for k in 0..=num_steps {
        for p in 0..4 {
            let got = solution.states()[[p, k]];
            assert!(
                (got - expected).abs() < 1e-12,
                "path {} step {}: {} != {}",
                p,
                k,
                got,
                expected
            );
        }
        expected += 0.5 * expected * dt;
    }
}

#[test]
fn test_milstein_requires_derivative() {
    // GBM coefficients but no volatility derivative attached
    let problem = Sivp::new(
        1.0,
        0.0,
        1.0,
        |_t, x: ArrayView1<'_, f64>| x.mapv(|v| 0.5 * v),
        |_t, x: ArrayView1<'_, f64>| x.to_owned(),
    )
    .unwrap();

    let config = SolverConfig {
        num_paths: 3,
        num_steps: 10,
        seed: 5,
    };
    let mut solver = Solver::new(Milstein::new(), problem, config).unwrap();

    assert!(matches!(
        solver.iterate(),
        Err(SdeError::MissingDerivative { scheme: "Milstein" })
    ));
    assert!(matches!(
        solver.solve(),
        Err(SdeError::MissingDerivative { scheme: "Milstein" })
    ));
}

#[test]
fn test_shape_mismatch_detected() {
    // Drift ignores the batch and always returns two values
    let problem = Sivp::new(
        1.0,
        0.0,
        1.0,
        |_t, _x: ArrayView1<'_, f64>| Array1::zeros(2),
        |_t, x: ArrayView1<'_, f64>| Array1::zeros(x.len()),
    )
    .unwrap();

    let config = SolverConfig {
        num_paths: 3,
        num_steps: 10,
        seed: 5,
    };
    let mut solver = Solver::new(EulerMaruyama::new(), problem, config).unwrap();

    match solver.iterate() {
        Err(SdeError::ShapeMismatch {
            coefficient,
            expected,
            actual,
        }) => {
            assert_eq!(coefficient, "drift");
            assert_eq!(expected, 3);
            assert_eq!(actual, 2);
        }
        other => panic!("expected ShapeMismatch, got {:?}", other),
    }
}

#[test]
fn test_solution_accessors() {
    let ou = OuProcess::new(0.5, 0.1, 0.2);
    let config = SolverConfig {
        num_paths: 6,
        num_steps: 25,
        seed: 4,
    };
    let mut solver = Solver::new(EulerMaruyama::new(), ou.sivp(1.0, 0.0, 2.0).unwrap(), config)
        .unwrap();
    let solution = solver.solve().unwrap();

    assert_eq!(solution.num_paths(), 6);
    assert_eq!(solution.num_steps(), 25);
    assert_eq!(solution.path(0).len(), 26);
    assert_eq!(solution.terminal_values().len(), 6);
    assert_eq!(solution.mean_path().len(), 26);
    assert_eq!(solution.times()[0], 0.0);
    assert!((solution.times()[25] - 2.0).abs() < 1e-12);
}
