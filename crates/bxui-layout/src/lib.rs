#![forbid(unsafe_code)]

//! Tray layout diagrams.
//!
//! This crate turns segment lengths into the monospace grid diagram shown in
//! the layout field of the tray generator pages:
//!
//! - [`sections`] - the `10:5/2:3*2` section-list mini-language
//! - [`render_by_sections`] - diagram from explicit row heights and column widths
//! - [`render_by_grid`] - diagram from a span split into equal parts
//! - [`GridfinityTray`] - spans derived from a count of 42 mm grid cells
//! - [`diagram`] - reading an (edited) diagram back into walls and floors
//!
//! # Diagram format
//!
//! ```text
//!  ,> 20.00mm
//!  | ,> 30.00mm
//! +-+-+
//! | | |  15.00mm
//! +-+-+
//! ```
//!
//! One ruler line per column (`" |"` per preceding column, then `" ,> "` and
//! the width), then a wall line and a row line per row, then a closing wall
//! line. Every number is printed with two decimals.
//!
//! ```
//! use bxui_layout::render_by_sections;
//!
//! let text = render_by_sections(&[15.0], &[20.0, 30.0]);
//! assert_eq!(text, " ,> 20.00mm\n | ,> 30.00mm\n+-+-+\n| | |  15.00mm\n+-+-+\n");
//! ```

pub mod diagram;
pub mod sections;

use std::fmt;

use bxui_core::{format_fixed, trace};

pub use diagram::{DiagramError, TrayLayout};
pub use sections::{
    parse_sections, parse_sections_strict, repeat_count, SectionError, SectionSpec,
};

/// Decimals used for every length in a diagram.
pub const LENGTH_DECIMALS: usize = 2;

/// Gridfinity grid pitch in mm.
pub const GRIDFINITY_PITCH: f64 = 42.0;

/// Format a length the way diagrams print it.
///
/// A missing entry (the placeholder cell of an empty axis) prints as zero.
#[must_use]
pub fn format_length(value: Option<f64>) -> String {
    format_fixed(value.unwrap_or(0.0), LENGTH_DECIMALS)
}

fn wall_line(out: &mut String, columns: usize) {
    out.push_str(&"+-".repeat(columns));
    out.push_str("+\n");
}

/// Render the diagram for explicit row heights and column widths.
///
/// Empty axes are drawn as a single cell, so the result is never empty.
#[must_use]
pub fn render_by_sections(row_heights: &[f64], col_widths: &[f64]) -> String {
    let nx = col_widths.len().max(1);
    let ny = row_heights.len().max(1);
    trace!(nx, ny, "rendering layout");

    let mut out = String::with_capacity((nx + 8) * (nx + 2 * ny + 1));
    for i in 0..nx {
        out.push_str(&" |".repeat(i));
        out.push_str(" ,> ");
        out.push_str(&format_length(col_widths.get(i).copied()));
        out.push_str("mm\n");
    }
    for j in 0..ny {
        wall_line(&mut out, nx);
        out.push_str(&"| ".repeat(nx));
        out.push_str("|  ");
        out.push_str(&format_length(row_heights.get(j).copied()));
        out.push_str("mm\n");
    }
    wall_line(&mut out, nx);
    out
}

/// Render the diagram for a span divided into equal parts.
///
/// A split count of zero falls back to the grid-cell count on that axis.
#[must_use]
pub fn render_by_grid(
    total_width: f64,
    total_height: f64,
    grid_cells_x: usize,
    grid_cells_y: usize,
    split_count_x: usize,
    split_count_y: usize,
) -> String {
    GridSpec::uniform(
        total_width,
        total_height,
        effective_splits(split_count_x, grid_cells_x),
        effective_splits(split_count_y, grid_cells_y),
    )
    .render()
}

/// Parse two section lists leniently and render them (`sx` are columns,
/// `sy` are rows).
#[must_use]
pub fn render_layout(sx: &str, sy: &str) -> String {
    GridSpec::from_sections(sx, sy).render()
}

/// Split count with the "zero means one per grid cell" default applied.
#[inline]
#[must_use]
pub const fn effective_splits(split_count: usize, grid_cells: usize) -> usize {
    if split_count == 0 {
        grid_cells
    } else {
        split_count
    }
}

/// Row heights and column widths of a rectangular grid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridSpec {
    rows: Vec<f64>,
    cols: Vec<f64>,
}

impl GridSpec {
    /// Create from explicit row heights and column widths.
    #[must_use]
    pub fn new(rows: Vec<f64>, cols: Vec<f64>) -> Self {
        Self { rows, cols }
    }

    /// Equal-sized cells: `splits_x` columns across `total_width`, `splits_y`
    /// rows across `total_height`.
    #[must_use]
    pub fn uniform(total_width: f64, total_height: f64, splits_x: usize, splits_y: usize) -> Self {
        Self::new(
            SectionSpec::uniform(total_height, splits_y).into_vec(),
            SectionSpec::uniform(total_width, splits_x).into_vec(),
        )
    }

    /// Parse column (`sx`) and row (`sy`) section lists leniently.
    #[must_use]
    pub fn from_sections(sx: &str, sy: &str) -> Self {
        Self::new(parse_sections(sy), parse_sections(sx))
    }

    /// Parse column (`sx`) and row (`sy`) section lists strictly.
    pub fn from_sections_strict(sx: &str, sy: &str) -> Result<Self, SectionError> {
        Ok(Self::new(parse_sections_strict(sy)?, parse_sections_strict(sx)?))
    }

    /// Row heights, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[f64] {
        &self.rows
    }

    /// Column widths, left to right.
    #[must_use]
    pub fn cols(&self) -> &[f64] {
        &self.cols
    }

    /// Render the diagram.
    #[must_use]
    pub fn render(&self) -> String {
        render_by_sections(&self.rows, &self.cols)
    }
}

impl fmt::Display for GridSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// A gridfinity tray: whole grid cells on each axis, optionally split into a
/// different number of compartments, minus a total outer margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridfinityTray {
    /// Grid cells in X.
    pub cells_x: usize,
    /// Grid cells in Y.
    pub cells_y: usize,
    /// Compartments in X (0 = one per grid cell).
    pub split_x: usize,
    /// Compartments in Y (0 = one per grid cell).
    pub split_y: usize,
    /// Total margin subtracted from each span, in mm.
    pub margin: f64,
}

impl Default for GridfinityTray {
    fn default() -> Self {
        Self {
            cells_x: 3,
            cells_y: 2,
            split_x: 5,
            split_y: 3,
            margin: 0.75,
        }
    }
}

impl GridfinityTray {
    /// Usable width in mm.
    #[must_use]
    pub fn span_x(&self) -> f64 {
        self.cells_x as f64 * GRIDFINITY_PITCH - self.margin
    }

    /// Usable depth in mm.
    #[must_use]
    pub fn span_y(&self) -> f64 {
        self.cells_y as f64 * GRIDFINITY_PITCH - self.margin
    }

    /// Equal-cell grid for this tray.
    #[must_use]
    pub fn grid(&self) -> GridSpec {
        GridSpec::uniform(
            self.span_x(),
            self.span_y(),
            effective_splits(self.split_x, self.cells_x),
            effective_splits(self.split_y, self.cells_y),
        )
    }

    /// Render the diagram.
    #[must_use]
    pub fn render(&self) -> String {
        render_by_grid(
            self.span_x(),
            self.span_y(),
            self.cells_x,
            self.cells_y,
            self.split_x,
            self.split_y,
        )
    }
}
