//! Intrinsic-size probe for SVG documents
//!
//! This is the tolerant read path: the root element is matched by local name
//! regardless of namespace, only `width` and `height` are inspected, and any
//! failure degrades to [`Dimensions::DEFAULT`] instead of stopping the run.

use std::path::Path;

use tracing::warn;

use crate::error::ProbeError;
use crate::layout::Dimensions;

const DEFAULT_LENGTH: &str = "100";

/// Read the intrinsic size of the SVG at `path`
///
/// Never fails: unreadable files, malformed markup, and unusable lengths all
/// produce a warning and `(100, 100)`.
pub fn extract_dimensions(path: &Path) -> Dimensions {
    let result = std::fs::read_to_string(path)
        .map_err(ProbeError::from)
        .and_then(|text| dimensions_from_str(&text));

    match result {
        Ok(dims) => dims,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read dimensions, using defaults");
            Dimensions::DEFAULT
        }
    }
}

/// Read the intrinsic size from SVG text
pub fn dimensions_from_str(text: &str) -> Result<Dimensions, ProbeError> {
    let doc = roxmltree::Document::parse_with_options(text, parsing_options())?;
    let root = doc.root_element();

    let width = parse_length("width", root.attribute("width").unwrap_or(DEFAULT_LENGTH))?;
    let height = parse_length("height", root.attribute("height").unwrap_or(DEFAULT_LENGTH))?;

    Ok(Dimensions::new(width, height))
}

/// Parser settings shared by the probe and the content loader
pub(crate) fn parsing_options() -> roxmltree::ParsingOptions {
    roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    }
}

/// Strip units by keeping only digits and `.`, then parse
///
/// An attribute with no digits at all (e.g. `auto`) falls back to 100 for
/// that axis alone. Anything left that is not a positive number is an error.
fn parse_length(axis: &'static str, raw: &str) -> Result<f64, ProbeError> {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if digits.is_empty() {
        return Ok(Dimensions::DEFAULT.width);
    }

    match digits.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(ProbeError::InvalidLength {
            axis,
            value: raw.to_string(),
        }),
    }
}
