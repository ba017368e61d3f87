#![forbid(unsafe_code)]

//! Golden-ratio matting.
//!
//! A mat border of width `w` around an opening of `width × height` is
//! "golden" when the framed area is φ times the opening area:
//!
//! ```text
//! (width + 2w)(height + 2w) = φ · width · height
//! ```
//!
//! which expands to `4w² + 2(width + height)w − (φ − 1)·width·height = 0`.
//! With `a > 0` and `c < 0` the discriminant is positive and exactly one
//! root is positive; [`golden_matting_width`] returns it.
//!
//! ```
//! use bxui_matting::{golden_matting_width, PHI};
//!
//! let w = golden_matting_width(100.0, 150.0).unwrap();
//! let framed = (100.0 + 2.0 * w) * (150.0 + 2.0 * w);
//! assert!((framed / (100.0 * 150.0) - PHI).abs() < 1e-12);
//! ```
//!
//! The [`frame`] module builds the full set of photo-frame layer sizes on top
//! of the solver.

pub mod frame;

use std::fmt;

use bxui_core::{debug, round_to, Size};

pub use frame::{FrameDimensions, FrameParams};

/// The golden ratio, (1 + √5) / 2.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Decimals the page shows for a solved matting width.
pub const MATTING_DECIMALS: usize = 1;

/// Mismatch tolerance between derived and user-entered matting, in mm.
pub const MATTING_TOLERANCE_MM: f64 = 0.5;

/// What a derived matting width was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MattingSource {
    /// Fixed glass size.
    Glass,
    /// Golden-ratio solver.
    Golden,
}

impl fmt::Display for MattingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Glass => f.write_str("calculated"),
            Self::Golden => f.write_str("golden"),
        }
    }
}

/// Matting error.
#[derive(Debug, Clone, PartialEq)]
pub enum MattingError {
    /// Opening width or height is zero, negative or NaN.
    InvalidDimension { width: f64, height: f64 },
    /// The solved width is not finite or not positive.
    InvalidResult { value: f64 },
    /// Golden matting was requested together with a fixed glass size.
    GoldenWithFixedGlass { glass: Size },
    /// Explicit matting widths disagree with the derived widths.
    MattingMismatch {
        source: MattingSource,
        derived: Size,
        requested: Size,
    },
    /// An input or derived frame dimension is negative.
    NegativeDimension { name: &'static str, value: f64 },
}

impl fmt::Display for MattingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => write!(
                f,
                "photo dimensions must be positive values (got {width} x {height})"
            ),
            Self::InvalidResult { value } => {
                write!(f, "calculation resulted in an invalid matting width ({value})")
            }
            Self::GoldenWithFixedGlass { glass } => write!(
                f,
                "cannot have golden matting and fixed glass size {:.1} x {:.1} at the same time",
                glass.width, glass.height
            ),
            Self::MattingMismatch {
                source,
                derived,
                requested,
            } => write!(
                f,
                "{source} matting width {:.1} x {:.1} differs from specified matting widths {:.1} x {:.1}",
                derived.width, derived.height, requested.width, requested.height
            ),
            Self::NegativeDimension { name, value } => {
                write!(f, "{name} must be positive (got {value:.1})")
            }
        }
    }
}

impl std::error::Error for MattingError {}

/// Standard result type for matting calculations.
pub type Result<T> = std::result::Result<T, MattingError>;

/// Border width that makes the framed area φ times the opening area.
pub fn golden_matting_width(width: f64, height: f64) -> Result<f64> {
    if !Size::new(width, height).is_positive() {
        return Err(MattingError::InvalidDimension { width, height });
    }

    let a = 4.0;
    let b = 2.0 * (width + height);
    let c = -(PHI - 1.0) * width * height;
    let disc = b * b - 4.0 * a * c;
    let root = (-b + disc.sqrt()) / (2.0 * a);

    if !root.is_finite() || root <= 0.0 {
        return Err(MattingError::InvalidResult { value: root });
    }
    debug!(width, height, matting = root, "solved golden matting");
    Ok(root)
}

/// The opening in the mat: the photo minus `overlap` on every side.
#[must_use]
pub fn mat_hole(photo: Size, overlap: f64) -> Size {
    photo.shrink(overlap)
}

/// Golden matting for a photo, solved on its mat hole and rounded to the
/// displayed precision.
pub fn golden_matting_for_photo(photo: Size, overlap: f64) -> Result<f64> {
    let hole = mat_hole(photo, overlap);
    golden_matting_width(hole.width, hole.height).map(|w| round_to(w, MATTING_DECIMALS))
}
