//! The composition pass: place every input in order and write the result

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::config::ComposeConfig;
use crate::error::ComposeError;
use crate::layout::{self, Dimensions};
use crate::renderer::SvgBuilder;
use crate::source::SourceDocument;

/// Summary of one composition run
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionReport {
    /// Where the document was written (empty for in-memory renders)
    pub output: PathBuf,
    /// Size of the composed canvas
    pub canvas: Dimensions,
    pub rows: usize,
    pub cols: usize,
    /// Number of inputs handed to the composer
    pub inputs: usize,
    /// Number of cells that received an input (successfully or not)
    pub placed: usize,
    /// Inputs that were replaced by the error placeholder
    pub failed: Vec<PathBuf>,
}

/// A composed grid held in memory
#[derive(Debug, Clone)]
pub struct ComposedGrid {
    /// Complete SVG document text
    pub svg: String,
    pub report: CompositionReport,
}

/// Compose `inputs` into one SVG document without touching the filesystem
/// beyond reading the inputs
///
/// Inputs beyond the grid's capacity are ignored. A missing or malformed
/// input only affects its own cell.
pub fn render_grid<P: AsRef<Path>>(
    inputs: &[P],
    config: &ComposeConfig,
) -> Result<ComposedGrid, ComposeError> {
    let grid = &config.grid;
    grid.validate()?;

    let capacity = grid.capacity();
    if inputs.len() != capacity {
        warn!(
            expected = capacity,
            got = inputs.len(),
            "expected {} files for a {}x{} grid, got {}",
            capacity,
            grid.rows,
            grid.cols,
            inputs.len()
        );
    }

    let canvas = layout::canvas_size(grid);
    let mut builder = SvgBuilder::new(canvas, &config.palette);
    builder.add_background();

    let mut failed = Vec::new();
    let mut placed = 0;

    for (index, input) in inputs.iter().take(capacity).enumerate() {
        let path = input.as_ref();
        placed += 1;

        match SourceDocument::load(path) {
            Ok(doc) => {
                let placement = layout::place(grid, index, doc.dimensions);
                debug!(
                    index,
                    path = %path.display(),
                    scale = placement.scale,
                    x = placement.offset.x,
                    y = placement.offset.y,
                    "placed input"
                );
                builder.add_cell_background(&placement.cell);
                builder.add_placed_content(&placement, &doc.namespaces, &doc.elements);
                builder.add_label(&doc.label(), placement.label_position());
            }
            Err(e) => {
                error!(index, error = %e, "error processing input");
                builder.add_error_cell(&layout::cell_bounds(grid, index));
                failed.push(path.to_path_buf());
            }
        }
    }

    Ok(ComposedGrid {
        svg: builder.build(),
        report: CompositionReport {
            output: PathBuf::new(),
            canvas,
            rows: grid.rows,
            cols: grid.cols,
            inputs: inputs.len(),
            placed,
            failed,
        },
    })
}

/// Compose `inputs` and write the document to `output`, replacing any
/// existing file
///
/// The whole document is built before the file is opened, so an invalid
/// configuration leaves `output` untouched.
pub fn compose_grid<P: AsRef<Path>>(
    inputs: &[P],
    output: &Path,
    config: &ComposeConfig,
) -> Result<CompositionReport, ComposeError> {
    let ComposedGrid { svg, mut report } = render_grid(inputs, config)?;

    std::fs::write(output, svg).map_err(|source| ComposeError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    report.output = output.to_path_buf();

    info!(
        output = %output.display(),
        width = report.canvas.width,
        height = report.canvas.height,
        rows = report.rows,
        cols = report.cols,
        files = report.inputs,
        "created grid SVG"
    );

    Ok(report)
}
