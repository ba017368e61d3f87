#![forbid(unsafe_code)]

//! Property-based invariant tests for the matting solver and frame layers.
//!
//! 1. The solved width is positive and makes the framed area φ times the
//!    opening area.
//! 2. The solver is symmetric in width and height.
//! 3. Rounded widths stay within half a display step of the exact root.
//! 4. Golden frames nest: hole < window <= mat < base, and the pocket fits
//!    inside the base.
//! 5. Explicit matting frames never fail on non-negative inputs with
//!    positive layers.

use bxui_core::Size;
use bxui_matting::{
    FrameDimensions, FrameParams, PHI, golden_matting_for_photo, golden_matting_width, mat_hole,
};
use proptest::prelude::*;

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Solver
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn solved_width_is_golden(width in 1.0f64..2000.0, height in 1.0f64..2000.0) {
        let w = golden_matting_width(width, height).unwrap();
        prop_assert!(w > 0.0);
        let ratio = (width + 2.0 * w) * (height + 2.0 * w) / (width * height);
        prop_assert!((ratio - PHI).abs() < 1e-9, "ratio {ratio}");
    }

    #[test]
    fn solver_is_symmetric(width in 1.0f64..2000.0, height in 1.0f64..2000.0) {
        let a = golden_matting_width(width, height).unwrap();
        let b = golden_matting_width(height, width).unwrap();
        prop_assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn non_positive_is_rejected(width in -1000.0f64..=0.0, height in 1.0f64..1000.0) {
        prop_assert!(golden_matting_width(width, height).is_err());
        prop_assert!(golden_matting_width(height, width).is_err());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Display rounding
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rounded_width_is_close(
        x in 20.0f64..1000.0,
        y in 20.0f64..1000.0,
        overlap in 0.0f64..5.0,
    ) {
        let photo = Size::new(x, y);
        let hole = mat_hole(photo, overlap);
        let exact = golden_matting_width(hole.width, hole.height).unwrap();
        let shown = golden_matting_for_photo(photo, overlap).unwrap();
        prop_assert!((shown - exact).abs() <= 0.05 + 1e-9);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4-5. Frame layers
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn golden_layers_nest(
        x in 20.0f64..600.0,
        y in 20.0f64..600.0,
        frame_w in 15.0f64..50.0,
        frame_overlap in 0.0f64..5.0,
    ) {
        let dims = FrameDimensions::new(FrameParams {
            x,
            y,
            frame_w,
            frame_overlap,
            ..FrameParams::default()
        })
        .unwrap();
        let hole = dims.mat_hole();
        let window = dims.window();
        let mat = dims.mat();
        let base = dims.base();
        let pocket = dims.pocket();
        prop_assert!(hole.width < window.width && hole.height < window.height);
        prop_assert!(window.width <= mat.width && window.height <= mat.height);
        prop_assert!(mat.width < base.width && mat.height < base.height);
        prop_assert!(pocket.width < base.width && pocket.height < base.height);
        prop_assert!((dims.visible_mat_ratio() - PHI).abs() < 1e-9);
    }

    #[test]
    fn explicit_matting_frames_are_valid(
        x in 20.0f64..600.0,
        y in 20.0f64..600.0,
        matting_w in 0.0f64..100.0,
        matting_h in 0.0f64..100.0,
    ) {
        let dims = FrameDimensions::new(FrameParams {
            x,
            y,
            golden_mat: false,
            matting_w,
            matting_h,
            ..FrameParams::default()
        })
        .unwrap();
        prop_assert_eq!(dims.matting_w(), matting_w);
        prop_assert_eq!(dims.matting_h(), matting_h);
        prop_assert!(dims.guide_w() >= 0.0 && dims.guide_h() >= 0.0);
    }
}
