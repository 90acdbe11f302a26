//! Configuration for the grid composer

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::palette::Palette;

/// Inset applied inside every cell before content is scaled to fit
pub const CELL_MARGIN: f64 = 10.0;

/// Output path used when none is given
pub const DEFAULT_OUTPUT: &str = "grid_output.svg";

/// Shape and spacing of the output grid
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Number of rows
    pub rows: usize,

    /// Number of columns
    pub cols: usize,

    /// Width of each cell
    pub cell_width: f64,

    /// Height of each cell
    pub cell_height: f64,

    /// Gap between neighbouring cells
    pub padding: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 2,
            cols: 4,
            cell_width: 200.0,
            cell_height: 200.0,
            padding: 10.0,
        }
    }
}

impl GridConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rows
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Set the number of columns
    pub fn with_cols(mut self, cols: usize) -> Self {
        self.cols = cols;
        self
    }

    /// Set the cell size
    pub fn with_cell_size(mut self, width: f64, height: f64) -> Self {
        self.cell_width = width;
        self.cell_height = height;
        self
    }

    /// Set the gap between cells
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Number of cells in the grid
    ///
    /// Saturates instead of overflowing; [`validate`](Self::validate) rejects
    /// shapes whose cell count does not fit in a `usize`.
    pub fn capacity(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Check that the grid can actually hold scaled content
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }

        if self.rows.checked_mul(self.cols).is_none() {
            return Err(ConfigError::invalid(
                "rows",
                format!("{}x{} grid has too many cells", self.rows, self.cols),
            ));
        }

        for (field, value) in [
            ("cell_width", self.cell_width),
            ("cell_height", self.cell_height),
        ] {
            if !value.is_finite() || value <= 2.0 * CELL_MARGIN {
                return Err(ConfigError::invalid(
                    field,
                    format!(
                        "{} must be a finite number greater than {}",
                        value,
                        2.0 * CELL_MARGIN
                    ),
                ));
            }
        }

        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ConfigError::invalid(
                "padding",
                format!("{} must be a finite, non-negative number", self.padding),
            ));
        }

        Ok(())
    }
}

/// Everything a composition run needs besides its inputs
#[derive(Debug, Clone, Default)]
pub struct ComposeConfig {
    /// Grid shape
    pub grid: GridConfig,
    /// Colors used for backgrounds, borders, and labels
    pub palette: Palette,
}

/// TOML layout of a config file
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    grid: Option<GridConfig>,
    colors: Option<std::collections::HashMap<String, String>>,
}

impl ComposeConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid configuration
    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    /// Set the palette
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    ///
    /// Both `[grid]` and `[colors]` are optional; missing keys keep their
    /// defaults. The grid is not validated here so later overrides can still
    /// fix it; call [`GridConfig::validate`] once all sources are merged.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;

        let grid = parsed.grid.unwrap_or_default();

        let palette = match parsed.colors {
            Some(colors) => Palette::from_colors(colors),
            None => Palette::default(),
        };

        Ok(Self { grid, palette })
    }
}
