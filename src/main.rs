//! SVG Grid CLI
//!
//! Usage:
//!   svg-grid [OPTIONS] <FILES>...
//!
//! Options:
//!   -o, --output <FILE>   Output file (otherwise inferred from the arguments)
//!   -c, --config <FILE>   Grid and color configuration (TOML format)
//!   --rows, --cols, --cell-width, --cell-height, --padding
//!   -h, --help            Print help

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use svg_grid::{compose_grid, resolve_inputs, ComposeConfig};

#[derive(Parser)]
#[command(name = "svg-grid")]
#[command(about = "Arrange SVG files into a grid and combine them into one SVG")]
#[command(after_help = "EXAMPLES:
    svg-grid a.svg b.svg c.svg d.svg e.svg f.svg g.svg h.svg output.svg
    svg-grid *.svg -o grid.svg --rows 3 --cols 3")]
struct Cli {
    /// Input SVG files; with 8 inputs collected, a further missing .svg names the output
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output file (disables inferring the output from the file list)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file with [grid] and [colors] tables (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of rows
    #[arg(long)]
    rows: Option<usize>,

    /// Number of columns
    #[arg(long)]
    cols: Option<usize>,

    /// Width of each cell
    #[arg(long)]
    cell_width: Option<f64>,

    /// Height of each cell
    #[arg(long)]
    cell_height: Option<f64>,

    /// Gap between cells
    #[arg(long)]
    padding: Option<f64>,
}

impl Cli {
    /// Load the config file, then apply command-line overrides and validate
    /// the merged grid
    fn compose_config(&self) -> Result<ComposeConfig, svg_grid::ConfigError> {
        let mut config = match &self.config {
            Some(path) => ComposeConfig::from_file(path)?,
            None => ComposeConfig::default(),
        };

        let grid = &mut config.grid;
        if let Some(rows) = self.rows {
            grid.rows = rows;
        }
        if let Some(cols) = self.cols {
            grid.cols = cols;
        }
        if let Some(width) = self.cell_width {
            grid.cell_width = width;
        }
        if let Some(height) = self.cell_height {
            grid.cell_height = height;
        }
        if let Some(padding) = self.padding {
            grid.padding = padding;
        }
        grid.validate()?;

        Ok(config)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();

    let config = match cli.compose_config() {
        Ok(c) => c,
        Err(e) => {
            error!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let resolved = match resolve_inputs(&cli.files, config.grid.capacity(), cli.output.clone()) {
        Ok(r) => r,
        Err(e) => {
            error!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("Processing {} SVG files...", resolved.inputs.len());
    for (i, path) in resolved.inputs.iter().enumerate() {
        println!("  {}. {}", i + 1, path.display());
    }

    match compose_grid(&resolved.inputs, &resolved.output, &config) {
        Ok(report) => {
            println!("Created grid SVG: {}", report.output.display());
            println!(
                "  Dimensions: {}x{}px",
                report.canvas.width, report.canvas.height
            );
            println!("  Grid: {}x{}", report.rows, report.cols);
            println!("  Files processed: {}", report.inputs);
            if !report.failed.is_empty() {
                println!("  Cells with errors: {}", report.failed.len());
            }
            println!("\nDone! Open {} to view the result.", report.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
