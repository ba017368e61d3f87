#![forbid(unsafe_code)]

//! Property-based invariant tests for layout diagrams.
//!
//! 1. A grid of `nx` columns and `ny` rows has `nx` ruler lines, `ny` wall/row
//!    line pairs and one closing wall line.
//! 2. Every wall line has `nx + 1` crossings.
//! 3. Rendering is deterministic.
//! 4. Empty axes still produce a 1×1 grid.
//! 5. Uniform splits cover the whole span.
//! 6. Rendered diagrams read back to the same column and row count.
//! 7. The lenient section parser never panics and always yields a prefix of
//!    what the strict parser accepts.

use bxui_layout::sections::{parse_sections, parse_sections_strict};
use bxui_layout::{render_by_grid, render_by_sections, GridSpec, TrayLayout};
use proptest::prelude::*;

fn lengths(max: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.5f64..500.0, 1..=max)
}

fn section_token() -> impl Strategy<Value = String> {
    prop_oneof![
        (1u32..200).prop_map(|n| n.to_string()),
        (1u32..200, 1u32..6).prop_map(|(a, b)| format!("{a}/{b}")),
        (1u32..200, 1u32..6).prop_map(|(a, b)| format!("{a}*{b}")),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Line structure
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn line_structure(rows in lengths(12), cols in lengths(12)) {
        let text = render_by_sections(&rows, &cols);
        let lines: Vec<&str> = text.lines().collect();
        let nx = cols.len();
        let ny = rows.len();

        prop_assert_eq!(lines.len(), nx + 2 * ny + 1);
        prop_assert!(text.ends_with('\n'));

        for (i, line) in lines[..nx].iter().enumerate() {
            prop_assert!(line.starts_with(&" |".repeat(i)), "ruler {} is {:?}", i, line);
            prop_assert!(line.contains(" ,> ") && line.ends_with("mm"));
        }

        let grid_lines: Vec<&&str> = lines[nx..].iter().step_by(2).collect();
        prop_assert_eq!(grid_lines.len(), ny + 1);
        for line in grid_lines {
            prop_assert_eq!(line.matches('+').count(), nx + 1);
            prop_assert_eq!(line.len(), 2 * nx + 1);
        }

        for line in lines[nx + 1..].iter().step_by(2) {
            prop_assert_eq!(line.matches('|').count(), nx + 1);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rendering_is_idempotent(rows in lengths(8), cols in lengths(8)) {
        prop_assert_eq!(render_by_sections(&rows, &cols), render_by_sections(&rows, &cols));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Empty axes
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn empty_axis_is_one_cell(cols in lengths(6)) {
        let text = render_by_sections(&[], &cols);
        let nx = cols.len();
        prop_assert_eq!(text.lines().count(), nx + 3);
        prop_assert!(text.contains("|  0.00mm"));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Uniform splits
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn uniform_split_covers_span(
        width in 10.0f64..1000.0,
        height in 10.0f64..1000.0,
        sx in 1usize..10,
        sy in 1usize..10,
    ) {
        let grid = GridSpec::uniform(width, height, sx, sy);
        prop_assert_eq!(grid.cols().len(), sx);
        prop_assert_eq!(grid.rows().len(), sy);
        let total: f64 = grid.cols().iter().sum();
        prop_assert!((total - width).abs() < 1e-9 * width.max(1.0));
        prop_assert_eq!(render_by_grid(width, height, 3, 3, sx, sy), grid.render());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Read back
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rendered_diagram_reads_back(rows in lengths(6), cols in lengths(6)) {
        let layout = TrayLayout::parse(&render_by_sections(&rows, &cols)).unwrap();
        prop_assert_eq!(layout.columns(), cols.len());
        prop_assert_eq!(layout.rows(), rows.len());
        for (read, original) in layout.widths.iter().zip(&cols) {
            prop_assert!((read - original).abs() <= 0.005 + 1e-9);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Parsers
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn lenient_never_panics(spec in "[0-9:/*. a-z-]{0,24}") {
        let _ = parse_sections(&spec);
    }

    #[test]
    fn lenient_matches_strict_on_valid_lists(tokens in prop::collection::vec(section_token(), 1..8)) {
        let spec = tokens.join(":");
        let strict = parse_sections_strict(&spec).unwrap();
        prop_assert_eq!(parse_sections(&spec), strict);
    }

    #[test]
    fn lenient_truncates_at_malformed(
        head in prop::collection::vec(section_token(), 0..5),
        tail in prop::collection::vec(section_token(), 0..5),
    ) {
        let prefix = parse_sections(&head.join(":"));
        let mut all = head.clone();
        all.push("1/2/3".to_string());
        all.extend(tail);
        let truncated = parse_sections(&all.join(":"));
        if head.is_empty() {
            prop_assert!(truncated.is_empty());
        } else {
            prop_assert_eq!(truncated, prefix);
        }
    }
}
