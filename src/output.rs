// src/output.rs
use crate::solution::PathSolution;
use std::fs::File;
use std::io::{self, Write};

/// Write a completed solution to CSV, one row per grid time with the
/// time in the first column and one column per path.
pub fn write_solution_to_csv(filename: &str, solution: &PathSolution) -> io::Result<()> {
    let mut file = File::create(filename)?;

    write!(file, "t")?;
    for i in 0..solution.num_paths() {
        write!(file, ",path_{}", i)?;
    }
    writeln!(file)?;

    let times = solution.times();
    let states = solution.states();
    for (k, t) in times.iter().enumerate() {
        write!(file, "{}", t)?;
        for value in states.column(k) {
            write!(file, ",{}", value)?;
        }
        writeln!(file)?;
    }
    Ok(())
}
