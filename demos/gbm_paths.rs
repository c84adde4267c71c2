// demos/gbm_paths.rs
use ito_paths::models::Gbm;
use ito_paths::output;
use ito_paths::solvers::{EulerMaruyama, Milstein, Scheme, Solver, SolverConfig};

fn main() {
    let gbm = Gbm::new(100.0, 0.05, 0.2);
    let config = SolverConfig {
        num_paths: 10,
        num_steps: 250,
        seed: 42,
    };

    println!("=== GBM path simulation demo ===");
    println!(
        "dS = {} S dt + {} S dB, S0 = {}, horizon [0, 1]",
        gbm.mu, gbm.sigma, gbm.s0
    );
    println!(
        "{} paths, {} steps, seed {}\n",
        config.num_paths, config.num_steps, config.seed
    );

    run_scheme(EulerMaruyama::new(), gbm, config, "euler_paths.csv");
    run_scheme(Milstein::new(), gbm, config, "milstein_paths.csv");
}

fn run_scheme<S: Scheme>(scheme: S, gbm: Gbm, config: SolverConfig, csv: &str) {
    let name = scheme.name();
    let problem = gbm.sivp(0.0, 1.0).expect("valid horizon");
    let mut solver = Solver::new(scheme, problem, config).expect("valid configuration");

    let start = std::time::Instant::now();
    let solution = solver.solve().expect("solver runs to completion");
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let terminal = solution.terminal_values();
    let mean = terminal.iter().sum::<f64>() / terminal.len() as f64;
    let min = terminal.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = terminal.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    println!("--- {} ---", name);
    println!("terminal mean: {:.4}  min: {:.4}  max: {:.4}", mean, min, max);
    println!("solved in {:.2} ms", elapsed_ms);

    match output::write_solution_to_csv(csv, &solution) {
        Ok(()) => println!("wrote {}\n", csv),
        Err(e) => eprintln!("failed to write {}: {}\n", csv, e),
    }
}
