//! Matrix output for the command-line interface

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use vrplib_distances::DistanceMatrix;

/// Output encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON array of rows
    Json,
    /// Whitespace-separated values, one row per line
    Text,
}

/// Output destination types
#[derive(Debug, PartialEq)]
pub enum OutputDestination {
    File(String),
    Stdout,
}

/// Resolve output destination from CLI arguments
pub fn resolve_output(output: &str) -> OutputDestination {
    if output.is_empty() || output == "-" {
        OutputDestination::Stdout
    } else {
        OutputDestination::File(output.to_string())
    }
}

/// Write `matrix` to `dest`, refusing to replace an existing file unless `force` is set
pub fn write_to(dest: &OutputDestination, matrix: &DistanceMatrix, format: OutputFormat, precision: Option<usize>, force: bool) -> Result<()> {
    match dest {
        OutputDestination::Stdout => {
            let stdout = io::stdout();
            write_matrix(&mut stdout.lock(), matrix, format, precision)?;
        }
        OutputDestination::File(path) => {
            if Path::new(path).exists() && !force {
                bail!("{path} already exists (use --force to overwrite)");
            }
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)
                .with_context(|| format!("Failed to create {path}"))?;
            let mut writer = BufWriter::new(file);
            write_matrix(&mut writer, matrix, format, precision)?;
            writer.flush().with_context(|| format!("Failed to write {path}"))?;
        }
    }
    Ok(())
}

pub fn write_matrix(writer: &mut impl Write, matrix: &DistanceMatrix, format: OutputFormat, precision: Option<usize>) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, matrix)?;
            writeln!(writer)?;
        }
        OutputFormat::Text => {
            for row in matrix.rows() {
                let line: Vec<String> = row
                    .iter()
                    .map(|d| match precision {
                        Some(p) => format!("{d:.p$}"),
                        None => d.to_string(),
                    })
                    .collect();
                writeln!(writer, "{}", line.join(" "))?;
            }
        }
    }
    Ok(())
}
