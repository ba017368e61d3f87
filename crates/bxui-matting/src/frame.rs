#![forbid(unsafe_code)]

//! Photo-frame layer dimensions.
//!
//! A frame is three layers around a photo, matting and (optionally) glass:
//!
//! ```text
//! base ─┬─ frame border (frame_w) ─┬─ window (front opening)
//!       │                          └─ frame overlap hides the mat edge
//!       └─ pocket (mat + guide fudge) between guides
//! mat ──── mat hole = photo − 2·matting_overlap, plus visible matting
//! ```
//!
//! The visible matting comes from one of three places, in priority order:
//! a fixed glass size (both glass dimensions non-zero), the golden-ratio
//! solver, or the explicit matting parameters.

use bxui_core::{format_fixed, warn, Size};

use crate::{
    golden_matting_width, mat_hole, MattingError, MattingSource, Result, MATTING_TOLERANCE_MM,
};

/// Frame inputs, as entered on the photo-frame page.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameParams {
    /// Photo width.
    pub x: f64,
    /// Photo height.
    pub y: f64,
    /// Solve the matting width with the golden ratio.
    pub golden_mat: bool,
    /// Explicit visible matting on the sides.
    pub matting_w: f64,
    /// Explicit visible matting at top and bottom.
    pub matting_h: f64,
    /// How far the mat covers the photo on each side.
    pub matting_overlap: f64,
    /// Glass width (0 = not fixed).
    pub glass_w: f64,
    /// Glass height (0 = not fixed).
    pub glass_h: f64,
    /// Width of the frame border.
    pub frame_w: f64,
    /// How far the front layer covers the mat on each side.
    pub frame_overlap: f64,
    /// Extra room in the pocket so the mat slides in.
    pub guide_fudge: f64,
}

impl Default for FrameParams {
    fn default() -> Self {
        Self {
            x: 100.0,
            y: 150.0,
            golden_mat: true,
            matting_w: 0.0,
            matting_h: 0.0,
            matting_overlap: 2.0,
            glass_w: 0.0,
            glass_h: 0.0,
            frame_w: 20.0,
            frame_overlap: 5.0,
            guide_fudge: 2.0,
        }
    }
}

/// Validated frame dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameDimensions {
    params: FrameParams,
    golden: Option<f64>,
}

impl FrameDimensions {
    /// Derive and validate all layer sizes.
    pub fn new(params: FrameParams) -> Result<Self> {
        let hole = mat_hole(Size::new(params.x, params.y), params.matting_overlap);
        let golden = if params.golden_mat {
            Some(golden_matting_width(hole.width, hole.height)?)
        } else {
            None
        };
        let dims = Self { params, golden };
        dims.check_matting_params()?;
        dims.check()?;
        Ok(dims)
    }

    /// The inputs.
    #[must_use]
    pub const fn params(&self) -> &FrameParams {
        &self.params
    }

    /// Photo size.
    #[must_use]
    pub fn photo(&self) -> Size {
        Size::new(self.params.x, self.params.y)
    }

    /// Hole in the mat that shows the photo.
    #[must_use]
    pub fn mat_hole(&self) -> Size {
        mat_hole(self.photo(), self.params.matting_overlap)
    }

    /// Solved golden matting width, when golden matting is on.
    #[must_use]
    pub const fn golden_matting_width(&self) -> Option<f64> {
        self.golden
    }

    /// Both glass dimensions were given.
    #[must_use]
    pub fn fixed_glass_size(&self) -> bool {
        self.params.glass_w != 0.0 && self.params.glass_h != 0.0
    }

    /// Glass size (zero when not fixed).
    #[must_use]
    pub fn glass(&self) -> Size {
        Size::new(self.params.glass_w, self.params.glass_h)
    }

    /// Visible matting on the sides, excluding the part under the frame.
    #[must_use]
    pub fn matting_w(&self) -> f64 {
        self.visible_matting(self.params.glass_w, self.mat_hole().width, self.params.matting_w)
    }

    /// Visible matting at top and bottom, excluding the part under the frame.
    #[must_use]
    pub fn matting_h(&self) -> f64 {
        self.visible_matting(self.params.glass_h, self.mat_hole().height, self.params.matting_h)
    }

    fn visible_matting(&self, glass: f64, hole: f64, param: f64) -> f64 {
        if self.fixed_glass_size() {
            let visible = glass - 2.0 * self.params.frame_overlap;
            return (visible - hole) / 2.0;
        }
        self.golden.unwrap_or(param)
    }

    /// Whole mat, including the part hidden by the frame.
    #[must_use]
    pub fn mat(&self) -> Size {
        self.mat_hole()
            .grow_xy(self.matting_w(), self.matting_h())
            .grow(self.params.frame_overlap)
    }

    /// Viewing window in the front layer.
    #[must_use]
    pub fn window(&self) -> Size {
        self.mat().shrink(self.params.frame_overlap)
    }

    /// Base layer, which is also the outer size of the frame.
    #[must_use]
    pub fn base(&self) -> Size {
        self.window().grow(self.params.frame_w)
    }

    /// Width of the side guides holding mat and glass.
    #[must_use]
    pub fn guide_w(&self) -> f64 {
        (self.base().width - self.pocket().width) / 2.0
    }

    /// Height of the bottom guide holding mat and glass.
    #[must_use]
    pub fn guide_h(&self) -> f64 {
        (self.base().height - self.mat().height) / 2.0
    }

    /// Pocket between the guides, including the fudge.
    #[must_use]
    pub fn pocket(&self) -> Size {
        Size::new(
            self.mat().width + self.params.guide_fudge,
            self.base().height - self.guide_h(),
        )
    }

    /// Midpoint of the whole frame.
    #[must_use]
    pub fn centre(&self) -> (f64, f64) {
        self.base().centre()
    }

    /// Visible area (window) over visible photo area (mat hole).
    ///
    /// φ for golden matting.
    #[must_use]
    pub fn visible_mat_ratio(&self) -> f64 {
        self.window().area() / self.mat_hole().area()
    }

    /// Human-readable summary, one line per layer.
    #[must_use]
    pub fn summary(&self) -> Vec<String> {
        let n = |v: f64| format_fixed(v, 0);
        let p = &self.params;
        let photo = self.photo();
        let hole = self.mat_hole();
        let mat = self.mat();
        let window = self.window();
        let pocket = self.pocket();
        let base = self.base();
        let glass = if self.fixed_glass_size() {
            format!("Glass size: {} x {} (fixed)", n(p.glass_w), n(p.glass_h))
        } else {
            "Glass size: not specified".to_string()
        };
        vec![
            format!("Photo: {} x {}", n(photo.width), n(photo.height)),
            format!(
                "Matting hole: {} x {} (O {})",
                n(hole.width),
                n(hole.height),
                n(p.matting_overlap)
            ),
            format!(
                "Matting widths: {} sides, {} top/bottom",
                n(self.matting_w()),
                n(self.matting_h())
            ),
            glass,
            format!("Mat size: {} x {}", n(mat.width), n(mat.height)),
            format!(
                "Viewing window in front layer: {} x {} (rim {})",
                n(window.width),
                n(window.height),
                n(p.frame_overlap)
            ),
            format!(
                "Pocket for glass and matting: {} x {} (guide {})",
                n(pocket.width),
                n(pocket.height),
                n(p.guide_fudge)
            ),
            format!(
                "Back of frame: {} x {} (W {})",
                n(base.width),
                n(base.height),
                n(p.frame_w)
            ),
        ]
    }

    fn check_matting_params(&self) -> Result<()> {
        let p = &self.params;
        let requested = Size::new(p.matting_w, p.matting_h);
        let explicit = p.matting_w != 0.0 || p.matting_h != 0.0;

        if p.golden_mat && self.fixed_glass_size() {
            return Err(MattingError::GoldenWithFixedGlass { glass: self.glass() });
        }

        let derived = if self.fixed_glass_size() && explicit {
            Some((MattingSource::Glass, Size::new(self.matting_w(), self.matting_h())))
        } else if let (Some(golden), true) = (self.golden, explicit) {
            Some((MattingSource::Golden, Size::square(golden)))
        } else {
            None
        };

        if let Some((source, derived)) = derived {
            let off_w = (requested.width - derived.width).abs();
            let off_h = (requested.height - derived.height).abs();
            if off_w > MATTING_TOLERANCE_MM || off_h > MATTING_TOLERANCE_MM {
                warn!(
                    %source,
                    derived_w = derived.width,
                    derived_h = derived.height,
                    requested_w = requested.width,
                    requested_h = requested.height,
                    "matting parameters conflict"
                );
                return Err(MattingError::MattingMismatch {
                    source,
                    derived,
                    requested,
                });
            }
        }
        Ok(())
    }

    fn check(&self) -> Result<()> {
        let p = &self.params;
        let hole = self.mat_hole();
        let mat = self.mat();
        let window = self.window();
        let base = self.base();
        let pocket = self.pocket();
        let values = [
            ("x", p.x),
            ("y", p.y),
            ("matting_w", p.matting_w),
            ("matting_h", p.matting_h),
            ("matting_overlap", p.matting_overlap),
            ("glass_w", p.glass_w),
            ("glass_h", p.glass_h),
            ("frame_w", p.frame_w),
            ("frame_overlap", p.frame_overlap),
            ("guide_fudge", p.guide_fudge),
            ("mat_hole_x", hole.width),
            ("mat_hole_y", hole.height),
            ("visible_matting_w", self.matting_w()),
            ("visible_matting_h", self.matting_h()),
            ("mat_x", mat.width),
            ("mat_y", mat.height),
            ("window_x", window.width),
            ("window_y", window.height),
            ("base_x", base.width),
            ("base_y", base.height),
            ("pocket_x", pocket.width),
            ("pocket_y", pocket.height),
            ("guide_w", self.guide_w()),
            ("guide_h", self.guide_h()),
        ];
        match values.into_iter().find(|(_, value)| *value < 0.0) {
            Some((name, value)) => Err(MattingError::NegativeDimension { name, value }),
            None => Ok(()),
        }
    }
}
