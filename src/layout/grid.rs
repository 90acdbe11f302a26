//! Grid placement: canvas size, cell origins, and scale-to-fit
//!
//! Cells are filled row-major. Each input is scaled uniformly by the smaller
//! of its two axis-fit ratios against the cell minus [`CELL_MARGIN`] on every
//! side, then centered in the full cell. Aspect ratio is always preserved.

use crate::config::{GridConfig, CELL_MARGIN};

use super::types::{BoundingBox, Dimensions, Point};

/// Where and how one input is drawn inside the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPlacement {
    /// Position of the input in the grid (row-major)
    pub index: usize,
    pub row: usize,
    pub col: usize,
    /// The cell rectangle on the canvas
    pub cell: BoundingBox,
    /// Uniform scale applied to the input's content
    pub scale: f64,
    /// Translation of the scaled content's origin
    pub offset: Point,
}

impl CellPlacement {
    /// Anchor point of the filename label (bottom center of the cell)
    pub fn label_position(&self) -> Point {
        Point::new(self.cell.x + self.cell.width / 2.0, self.cell.bottom() - 5.0)
    }

    /// Area covered by the content once scaled and translated
    pub fn content_bounds(&self, intrinsic: Dimensions) -> BoundingBox {
        BoundingBox::new(
            self.offset.x,
            self.offset.y,
            intrinsic.width * self.scale,
            intrinsic.height * self.scale,
        )
    }
}

/// Total size of the composed canvas
pub fn canvas_size(grid: &GridConfig) -> Dimensions {
    let cols = grid.cols as f64;
    let rows = grid.rows as f64;
    Dimensions::new(
        cols * grid.cell_width + (cols - 1.0) * grid.padding,
        rows * grid.cell_height + (rows - 1.0) * grid.padding,
    )
}

/// Rectangle of the cell at `index`
pub fn cell_bounds(grid: &GridConfig, index: usize) -> BoundingBox {
    let row = index / grid.cols;
    let col = index % grid.cols;
    BoundingBox::new(
        col as f64 * (grid.cell_width + grid.padding),
        row as f64 * (grid.cell_height + grid.padding),
        grid.cell_width,
        grid.cell_height,
    )
}

/// Uniform scale that fits `intrinsic` into a cell's margin-inset area
pub fn fit_scale(grid: &GridConfig, intrinsic: Dimensions) -> f64 {
    let scale_x = (grid.cell_width - 2.0 * CELL_MARGIN) / intrinsic.width;
    let scale_y = (grid.cell_height - 2.0 * CELL_MARGIN) / intrinsic.height;
    scale_x.min(scale_y)
}

/// Compute the placement of the input at `index` with the given intrinsic size
pub fn place(grid: &GridConfig, index: usize, intrinsic: Dimensions) -> CellPlacement {
    let cell = cell_bounds(grid, index);
    let scale = fit_scale(grid, intrinsic);
    let offset = Point::new(
        cell.x + (cell.width - intrinsic.width * scale) / 2.0,
        cell.y + (cell.height - intrinsic.height * scale) / 2.0,
    );

    CellPlacement {
        index,
        row: index / grid.cols,
        col: index % grid.cols,
        cell,
        scale,
        offset,
    }
}
