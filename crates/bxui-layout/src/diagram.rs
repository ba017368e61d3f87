#![forbid(unsafe_code)]

//! Reading layout diagrams back into walls and floors.
//!
//! The diagram in the layout field is editable: replacing a `-` or `|` with a
//! space removes that wall, and replacing the space inside a cell with `X`
//! removes the floor of that compartment. [`TrayLayout::parse`] reads such a
//! diagram; its [`Display`](fmt::Display) impl writes one.
//!
//! Line kinds:
//!
//! - blank, or starting with `#`: ignored
//! - ` | | ,> 12.5mm`: a column width (any number of ` |` before ` ,>`)
//! - `+-+ +`: horizontal walls of one grid line (`-` wall, space none)
//! - `| |X|  30mm`: vertical walls (`|`/space), floors (space/`X`) and the row height

use std::fmt;

use bxui_core::debug;

use crate::format_length;

/// Layout diagram error. Line and column numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
    /// A row line has a character that is neither a wall nor a floor marker.
    UnexpectedChar {
        line: usize,
        column: usize,
        expected: &'static str,
    },
    /// A row line does not end in `<number> mm`.
    MissingRowHeight { line: usize },
    /// No column width lines.
    NoColumns,
    /// No row lines.
    NoRows,
    /// Number of horizontal wall lines is not rows + 1.
    WallLineCount { found: usize, expected: usize },
    /// A horizontal wall line does not have one entry per column.
    HorizontalWallCount {
        index: usize,
        found: usize,
        expected: usize,
    },
    /// A row line does not have one wall per column plus one.
    VerticalWallCount {
        index: usize,
        found: usize,
        expected: usize,
    },
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedChar {
                line,
                column,
                expected,
            } => write!(
                f,
                "can't parse line {line} in layout: expected {expected} for char #{column}"
            ),
            Self::MissingRowHeight { line } => {
                write!(f, "can't parse line {line} in layout: can't read height of the row")
            }
            Self::NoColumns => write!(f, "need at least one column width"),
            Self::NoRows => write!(f, "need at least one row"),
            Self::WallLineCount { found, expected } => write!(
                f,
                "wrong number of horizontal wall lines: {found} ({expected} expected)"
            ),
            Self::HorizontalWallCount {
                index,
                found,
                expected,
            } => write!(
                f,
                "wrong number of horizontal walls in line {index}: {found} ({expected} expected)"
            ),
            Self::VerticalWallCount {
                index,
                found,
                expected,
            } => write!(
                f,
                "wrong number of vertical walls in line {index}: {found} ({expected} expected)"
            ),
        }
    }
}

impl std::error::Error for DiagramError {}

/// A tray layout: compartment sizes plus which walls and floors exist.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrayLayout {
    /// Column widths, left to right.
    pub widths: Vec<f64>,
    /// Row heights, top to bottom.
    pub heights: Vec<f64>,
    /// `heights.len() + 1` grid lines of `widths.len()` horizontal walls.
    pub hwalls: Vec<Vec<bool>>,
    /// `heights.len()` rows of `widths.len() + 1` vertical walls.
    pub vwalls: Vec<Vec<bool>>,
    /// `heights.len()` rows of `widths.len()` floors.
    pub floors: Vec<Vec<bool>>,
}

impl TrayLayout {
    /// A layout with every wall and every floor present.
    #[must_use]
    pub fn filled(widths: Vec<f64>, heights: Vec<f64>) -> Self {
        let nx = widths.len();
        let ny = heights.len();
        Self {
            hwalls: vec![vec![true; nx]; ny + 1],
            vwalls: vec![vec![true; nx + 1]; ny],
            floors: vec![vec![true; nx]; ny],
            widths,
            heights,
        }
    }

    /// Number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.widths.len()
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.heights.len()
    }

    /// Sum of column widths.
    #[must_use]
    pub fn inner_width(&self) -> f64 {
        self.widths.iter().sum()
    }

    /// Sum of row heights.
    #[must_use]
    pub fn inner_height(&self) -> f64 {
        self.heights.iter().sum()
    }

    /// Number of vertical walls meeting at grid crossing `(x, y)`.
    ///
    /// Crossings outside the grid have no walls.
    #[must_use]
    pub fn vertical_walls_at(&self, x: usize, y: usize) -> usize {
        let above = y > 0 && wall(&self.vwalls, y - 1, x);
        let below = wall(&self.vwalls, y, x);
        usize::from(above) + usize::from(below)
    }

    /// Number of horizontal walls meeting at grid crossing `(x, y)`.
    #[must_use]
    pub fn horizontal_walls_at(&self, x: usize, y: usize) -> usize {
        let left = x > 0 && wall(&self.hwalls, y, x - 1);
        let right = wall(&self.hwalls, y, x);
        usize::from(left) + usize::from(right)
    }

    /// Parse a diagram.
    pub fn parse(text: &str) -> Result<Self, DiagramError> {
        let mut widths = Vec::new();
        let mut heights = Vec::new();
        let mut hwalls = Vec::new();
        let mut vwalls = Vec::new();
        let mut floors = Vec::new();

        for (nr, line) in text.lines().enumerate() {
            let line_no = nr + 1;
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(width) = ruler_width(line) {
                widths.push(width);
                continue;
            }
            let cells = widths.len() * 2 + 1;
            if line.starts_with('+') {
                let walls: Vec<bool> = line
                    .chars()
                    .take(cells)
                    .enumerate()
                    .filter(|(n, _)| n % 2 == 1)
                    .filter_map(|(_, c)| match c {
                        '-' => Some(true),
                        ' ' => Some(false),
                        _ => None,
                    })
                    .collect();
                hwalls.push(walls);
            } else if line.starts_with([' ', '|']) {
                let mut walls = Vec::with_capacity(widths.len() + 1);
                let mut floor = Vec::with_capacity(widths.len());
                for (n, c) in line.chars().take(cells).enumerate() {
                    let column = n + 1;
                    if n % 2 == 1 {
                        match c {
                            ' ' => floor.push(true),
                            'x' | 'X' => floor.push(false),
                            _ => {
                                return Err(DiagramError::UnexpectedChar {
                                    line: line_no,
                                    column,
                                    expected: "\" \", \"x\" or \"X\"",
                                });
                            }
                        }
                    } else {
                        match c {
                            ' ' => walls.push(false),
                            '|' => walls.push(true),
                            _ => {
                                return Err(DiagramError::UnexpectedChar {
                                    line: line_no,
                                    column,
                                    expected: "\" \" or \"|\"",
                                });
                            }
                        }
                    }
                }
                let height = line
                    .char_indices()
                    .nth(cells)
                    .and_then(|(at, _)| read_length(&line[at..]))
                    .ok_or(DiagramError::MissingRowHeight { line: line_no })?;
                heights.push(height);
                vwalls.push(walls);
                floors.push(floor);
            }
        }

        let layout = Self {
            widths,
            heights,
            hwalls,
            vwalls,
            floors,
        };
        layout.validate()?;
        debug!(
            columns = layout.columns(),
            rows = layout.rows(),
            "parsed tray layout"
        );
        Ok(layout)
    }

    fn validate(&self) -> Result<(), DiagramError> {
        let lx = self.columns();
        let ly = self.rows();
        if lx == 0 {
            return Err(DiagramError::NoColumns);
        }
        if ly == 0 {
            return Err(DiagramError::NoRows);
        }
        if self.hwalls.len() != ly + 1 {
            return Err(DiagramError::WallLineCount {
                found: self.hwalls.len(),
                expected: ly + 1,
            });
        }
        if let Some((index, walls)) = self
            .hwalls
            .iter()
            .enumerate()
            .find(|(_, walls)| walls.len() != lx)
        {
            return Err(DiagramError::HorizontalWallCount {
                index,
                found: walls.len(),
                expected: lx,
            });
        }
        if let Some((index, walls)) = self
            .vwalls
            .iter()
            .enumerate()
            .find(|(_, walls)| walls.len() != lx + 1)
        {
            return Err(DiagramError::VerticalWallCount {
                index,
                found: walls.len(),
                expected: lx + 1,
            });
        }
        Ok(())
    }
}

impl fmt::Display for TrayLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, width) in self.widths.iter().enumerate() {
            writeln!(f, "{} ,> {}mm", " |".repeat(i), format_length(Some(*width)))?;
        }
        for (j, height) in self.heights.iter().enumerate() {
            write_wall_line(f, &self.hwalls[j])?;
            let walls = &self.vwalls[j];
            for (wall, floor) in walls.iter().zip(&self.floors[j]) {
                f.write_str(if *wall { "|" } else { " " })?;
                f.write_str(if *floor { " " } else { "X" })?;
            }
            let last = walls.last().copied().unwrap_or(false);
            writeln!(
                f,
                "{}  {}mm",
                if last { "|" } else { " " },
                format_length(Some(*height))
            )?;
        }
        if let Some(last) = self.hwalls.last() {
            write_wall_line(f, last)?;
        }
        Ok(())
    }
}

fn wall(grid: &[Vec<bool>], row: usize, col: usize) -> bool {
    grid.get(row).and_then(|r| r.get(col)).copied().unwrap_or(false)
}

fn write_wall_line(f: &mut fmt::Formatter<'_>, walls: &[bool]) -> fmt::Result {
    for wall in walls {
        f.write_str(if *wall { "+-" } else { "+ " })?;
    }
    f.write_str("+\n")
}

/// Column width from a ` | | ,> 12.5mm` line.
fn ruler_width(line: &str) -> Option<f64> {
    let mut rest = line;
    while let Some(r) = rest.strip_prefix(" |") {
        rest = r;
    }
    read_length(rest.strip_prefix(" ,>")?)
}

/// `\s*(\d*\.?\d+)\s*mm` at the start of `text`.
fn read_length(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let end = text
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(text.len());
    let number = &text[..end];
    let valid = !number.is_empty()
        && number.matches('.').count() <= 1
        && !number.ends_with('.');
    if !valid {
        return None;
    }
    if !text[end..].trim_start().starts_with("mm") {
        return None;
    }
    number.parse().ok()
}
