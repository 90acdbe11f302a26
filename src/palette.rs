//! Color tokens for the composed document
//!
//! Every fixed color the composer emits (canvas background, cell borders,
//! labels, error placeholders) is looked up by token so a config file can
//! restyle the grid without touching the layout.

use std::collections::HashMap;

/// Full-canvas background
pub const CANVAS_BACKGROUND: &str = "canvas-background";
/// Cell background fill
pub const CELL_FILL: &str = "cell-fill";
/// Cell border
pub const CELL_STROKE: &str = "cell-stroke";
/// Filename label text
pub const LABEL: &str = "label";
/// Error placeholder fill
pub const ERROR_FILL: &str = "error-fill";
/// Error placeholder border
pub const ERROR_STROKE: &str = "error-stroke";
/// Error placeholder text
pub const ERROR_TEXT: &str = "error-text";

const DEFAULT_COLORS: &[(&str, &str)] = &[
    (CANVAS_BACKGROUND, "#f0f0f0"),
    (CELL_FILL, "white"),
    (CELL_STROKE, "#ccc"),
    (LABEL, "#666"),
    (ERROR_FILL, "#ffcccc"),
    (ERROR_STROKE, "red"),
    (ERROR_TEXT, "red"),
];

/// A mapping from color tokens to concrete SVG color values
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Color overrides: token name -> color
    pub colors: HashMap<String, String>,
}

impl Palette {
    /// Build a palette from explicit overrides
    pub fn from_colors(colors: HashMap<String, String>) -> Self {
        Self { colors }
    }

    /// Look up a token without falling back
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Look up a token, falling back to the built-in colors
    ///
    /// Unknown tokens resolve to black.
    pub fn color(&self, token: &str) -> &str {
        if let Some(color) = self.resolve(token) {
            return color;
        }
        DEFAULT_COLORS
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, color)| *color)
            .unwrap_or("black")
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS
                .iter()
                .map(|(token, color)| (token.to_string(), color.to_string()))
                .collect(),
        }
    }
}
