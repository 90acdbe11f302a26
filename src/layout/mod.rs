//! Geometry of the composed grid
//!
//! This module turns a [`GridConfig`](crate::config::GridConfig) and an
//! input's intrinsic size into the rectangles and transforms the renderer
//! emits.

pub mod grid;
pub mod types;

pub use grid::{canvas_size, cell_bounds, fit_scale, place, CellPlacement};
pub use types::{BoundingBox, Dimensions, Point};
