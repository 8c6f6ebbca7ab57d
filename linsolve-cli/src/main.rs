//! linsolve: Solve a dense linear system by Gauss-Jordan elimination.
//!
//! CLI entry point using clap for argument parsing.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use linsolve_core::AugmentedMatrix;
use linsolve_io::LinearSystem;

#[derive(Parser)]
#[command(
    name = "linsolve",
    version,
    about = "Solve a dense linear system by Gauss-Jordan elimination",
    long_about = "Reads a coefficient matrix and a constants vector from two text files,\n\
                  reduces the augmented matrix to reduced row-echelon form in place,\n\
                  and prints the matrix before and after along with the unknowns it\n\
                  could isolate."
)]
struct Cli {
    /// Coefficients file: one equation row per line, comma-separated values
    #[arg(long)]
    coefficients: PathBuf,

    /// Constants file: one value per line
    #[arg(long)]
    constants: PathBuf,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let system = LinearSystem::load(&cli.coefficients, &cli.constants)?;
    tracing::info!(
        "Read {} equation rows from {}",
        system.coefficients.len(),
        cli.coefficients.display()
    );

    let mut matrix = AugmentedMatrix::new(system.coefficients, system.constants)?;

    println!("{matrix}");
    matrix.reduce_with(|row, state| {
        tracing::debug!("after pass over row {row}:\n{state}");
    });
    println!("{matrix}");

    report(&matrix);
    Ok(())
}

/// Entries smaller than this are float residue from the reduction, not
/// structure.
const RESIDUE: f64 = 1e-9;

/// Read what the reduced matrix says about each unknown. Interpretation
/// lives here: the reduction itself never judges rank or consistency.
fn report(matrix: &AugmentedMatrix) {
    let rows = matrix.to_rows();
    let constants = matrix.constants();

    for (i, row) in rows.iter().enumerate() {
        let nonzero: Vec<usize> = row
            .iter()
            .enumerate()
            .filter(|(_, v)| v.abs() > RESIDUE)
            .map(|(col, _)| col)
            .collect();

        match nonzero.as_slice() {
            [] if constants[i].abs() > RESIDUE => {
                tracing::warn!(
                    "row {} reduced to 0 = {}: the system is inconsistent",
                    i,
                    constants[i]
                );
            }
            [] => {
                tracing::warn!(
                    "row {} reduced to all zeros: the system is under-determined",
                    i
                );
            }
            [col] => println!("x{} = {}", col + 1, constants[i]),
            _ => {
                tracing::info!("row {} still couples several unknowns", i);
            }
        }
    }
}
