//! # vrplib-distances CLI
//!
//! Command-line interface for the vrplib-distances library.
//! Reads the edge weight fields of one instance as JSON and prints the dense matrix.

use anyhow::Result;
use clap::Parser;
use log::{debug, error, info};

mod cli;

use cli::{resolve_output, EdgeWeightDocument, OutputDestination, OutputFormat};

/// Command-line interface for vrplib-distances
#[derive(Parser)]
#[command(name = "vrplib-distances")]
#[command(about = "Reconstructs dense VRP distance matrices from VRPLIB edge weight sections")]
#[command(long_about = "Reads the edge weight fields of one VRPLIB instance as a JSON object and
writes the full symmetric distance matrix:
  vrplib-distances instance.json               # JSON matrix to stdout
  vrplib-distances instance.json out.json      # JSON matrix to a file
  vrplib-distances - --format text < in.json   # read stdin, plain text rows

Input fields:
  edge_weight_type     EUC_2D | FLOOR_2D | EXACT_2D | EXPLICIT
  edge_weight_format   LOWER_ROW | FULL_MATRIX (EXPLICIT only)
  node_coord           [[x, y], ...] (coordinate types only)
  edge_weight          nested rows (EXPLICIT only)
  comment              instance comment; 'Eilon' selects the column-wise layout
Other fields are ignored.")]
#[command(version = env!("VRPLIB_DISTANCES_VERSION"))]
struct Cli {
    /// JSON edge weight document, or "-" for stdin
    input: String,

    /// Output file path, or "-" for stdout
    #[arg(default_value = "")]
    output: String,

    /// Output encoding
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Decimal places for text output (default: shortest exact representation)
    #[arg(long)]
    precision: Option<usize>,

    /// Show the selected strategy and dimension without computing the matrix
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Overwrite an existing output file
    #[arg(short, long)]
    force: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging to stderr; RUST_LOG takes precedence over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(&cli) {
        error!("❌ Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    debug!("vrplib-distances v{} starting", env!("VRPLIB_DISTANCES_VERSION"));

    let document = EdgeWeightDocument::load(&cli.input)?;
    let spec = document.spec()?;
    let strategy = spec.strategy()?;
    let dimension = document.expected_dimension(strategy);

    info!(
        "{}: {} via {strategy}",
        document.name.as_deref().unwrap_or(&cli.input),
        spec.edge_weight_format
            .map(|format| format!("{} / {format}", spec.edge_weight_type))
            .unwrap_or_else(|| spec.edge_weight_type.to_string()),
    );

    let output = resolve_output(&cli.output);

    if cli.dry_run {
        let size = dimension.map_or_else(|| "unknown".to_string(), |n| format!("{n}x{n}"));
        eprintln!("🔍 [DRY RUN] Would build a {size} matrix using {strategy} to {output:?}");
        return Ok(());
    }

    let matrix = document.resolve()?;
    debug!("Built {0}x{0} matrix", matrix.size());

    if let OutputDestination::File(path) = &output {
        info!("📁 Saving to: {path}");
    }
    cli::write_to(&output, &matrix, cli.format, cli.precision, cli.force)?;

    Ok(())
}
