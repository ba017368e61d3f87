#![forbid(unsafe_code)]

//! Geometric primitives in millimetres.

/// A width × height pair in millimetres.
///
/// Used for photo sizes, mat openings and frame layers. Values are not
/// clamped; callers that need strictly positive extents check with
/// [`Size::is_positive`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Horizontal extent in mm.
    pub width: f64,
    /// Vertical extent in mm.
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A square of the given side.
    #[inline]
    pub const fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    /// Area in mm².
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Both extents are strictly positive. NaN counts as not positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Shrink by `amount` on every side (each axis loses `2 * amount`).
    #[inline]
    pub fn shrink(&self, amount: f64) -> Size {
        Size::new(self.width - 2.0 * amount, self.height - 2.0 * amount)
    }

    /// Grow by `amount` on every side (each axis gains `2 * amount`).
    #[inline]
    pub fn grow(&self, amount: f64) -> Size {
        Size::new(self.width + 2.0 * amount, self.height + 2.0 * amount)
    }

    /// Grow by separate horizontal and vertical border widths.
    #[inline]
    pub fn grow_xy(&self, horizontal: f64, vertical: f64) -> Size {
        Size::new(
            self.width + 2.0 * horizontal,
            self.height + 2.0 * vertical,
        )
    }

    /// Midpoint of a rectangle of this size anchored at the origin.
    #[inline]
    pub fn centre(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}
