//! Parsers for the two linear-system input files.
//!
//! The coefficients file holds one equation row per line as comma-separated
//! values (`2, 1` then `1, 3`); the constants file holds one value per line
//! (`5` then `10`).
//!
//! Whitespace around tokens is ignored and blank lines are skipped. A token
//! that does not parse as a number is a hard error carrying the file
//! position — an equation coefficient has no missing-value semantics.

use std::path::Path;

use anyhow::{Context, Result};

/// Raw numeric input for one linear system, as read from disk.
///
/// Plain sequences only; rectangularity and row-count checks happen when
/// the augmented matrix is constructed from them.
#[derive(Debug, Clone)]
pub struct LinearSystem {
    /// Coefficient rows in file order.
    pub coefficients: Vec<Vec<f64>>,
    /// Constants in file order, one per equation row.
    pub constants: Vec<f64>,
}

impl LinearSystem {
    /// Read a coefficients file and a constants file.
    pub fn load(coefficients: &Path, constants: &Path) -> Result<Self> {
        Ok(Self {
            coefficients: parse_coefficients(coefficients)?,
            constants: parse_constants(constants)?,
        })
    }
}

/// Parse the coefficients file: comma-separated values, one equation row
/// per line.
pub fn parse_coefficients(path: &Path) -> Result<Vec<Vec<f64>>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read coefficients file: {}", path.display()))?;

    let mut rows = Vec::new();
    for (line_num, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut row = Vec::with_capacity(line.matches(',').count() + 1);
        for (field_num, token) in line.split(',').enumerate() {
            let token = token.trim();
            let value: f64 = token.parse().with_context(|| {
                format!(
                    "{}: line {}, field {}: not a number: {:?}",
                    path.display(),
                    line_num + 1,
                    field_num + 1,
                    token
                )
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Parse the constants file: one value per line.
pub fn parse_constants(path: &Path) -> Result<Vec<f64>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read constants file: {}", path.display()))?;

    let mut values = Vec::new();
    for (line_num, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let value: f64 = line.parse().with_context(|| {
            format!(
                "{}: line {}: not a number: {:?}",
                path.display(),
                line_num + 1,
                line
            )
        })?;
        values.push(value);
    }

    Ok(values)
}
