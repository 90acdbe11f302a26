//! SVG Grid - compose standalone SVG files into one tiled document
//!
//! Each input is scaled uniformly to fit its cell, centered, and labelled
//! with its file name. Inputs that cannot be read are replaced by an error
//! placeholder without stopping the run.
//!
//! # Example
//!
//! ```rust
//! use svg_grid::{render_grid, ComposeConfig, GridConfig};
//!
//! let dir = std::env::temp_dir().join("svg-grid-doc");
//! std::fs::create_dir_all(&dir).unwrap();
//! let input = dir.join("dot.svg");
//! std::fs::write(&input, r#"<svg width="10" height="10"><circle r="5"/></svg>"#).unwrap();
//!
//! let config = ComposeConfig::new().with_grid(GridConfig::new().with_rows(1).with_cols(1));
//! let grid = render_grid(&[input], &config).unwrap();
//!
//! assert!(grid.svg.contains(r#"<circle r="5"/>"#));
//! assert!(grid.svg.contains("dot.svg"));
//! ```

pub mod compose;
pub mod config;
pub mod error;
pub mod inputs;
pub mod layout;
pub mod palette;
pub mod probe;
pub mod renderer;
pub mod source;

pub use compose::{compose_grid, render_grid, ComposedGrid, CompositionReport};
pub use config::{ComposeConfig, GridConfig, CELL_MARGIN, DEFAULT_OUTPUT};
pub use error::{ComposeError, ConfigError, InputError, ProbeError, SourceError};
pub use inputs::{resolve_inputs, ResolvedInputs};
pub use layout::{CellPlacement, Dimensions};
pub use palette::Palette;
pub use probe::extract_dimensions;
pub use source::SourceDocument;
