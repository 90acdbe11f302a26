//! SVG renderer for the composed grid
//!
//! This module emits the output document: the canvas background, one cell
//! background and transformed content group per input, labels, and error
//! placeholders.

pub mod svg;

pub use svg::SvgBuilder;
