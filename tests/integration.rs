// Integration tests (native) for the `yinsh-board` crate.
// These tests avoid wasm-specific functionality and exercise pure Rust logic so
// they can run under `cargo test` on the host.

use std::collections::HashSet;

use yinsh_board::board::palette;
use yinsh_board::{BoardGrid, GRID_SIZE};

#[test]
fn grid_scales_linearly_with_canvas_edge() {
    let small = BoardGrid::new(300.0);
    let large = BoardGrid::new(600.0);
    for i in 0..GRID_SIZE {
        for j in 0..GRID_SIZE {
            match (small.get(i, j), large.get(i, j)) {
                (Some(a), Some(b)) => {
                    assert!((b.x - 2.0 * a.x).abs() < 1e-9);
                    assert!((b.y - 2.0 * a.y).abs() < 1e-9);
                }
                (None, None) => {}
                _ => panic!("validity of ({i},{j}) must not depend on canvas size"),
            }
        }
    }
}

#[test]
fn all_intersections_lie_inside_the_canvas() {
    let edge = 600.0;
    let grid = BoardGrid::new(edge);
    for (_, _, p) in grid.intersections() {
        assert!(p.x > 0.0 && p.x < edge, "x {} outside canvas", p.x);
        assert!(p.y > 0.0 && p.y < edge, "y {} outside canvas", p.y);
    }
}

#[test]
fn palette_has_one_unique_color_per_row() {
    assert_eq!(palette::ROW_COLORS.len(), GRID_SIZE);
    let mut seen = HashSet::new();
    for c in palette::ROW_COLORS {
        assert!(c.starts_with('#') && c.len() == 7, "malformed color '{c}'");
        assert!(seen.insert(c), "duplicate color '{c}'");
    }
    // Spot-check the palette order against the prototype.
    assert_eq!(palette::ROW_COLORS[0], "#FF0000");
    assert_eq!(palette::ROW_COLORS[5], "#000000");
    assert_eq!(palette::ROW_COLORS[10], "#444444");
}

#[test]
fn only_marker_rows_have_a_wash() {
    for j in 0..GRID_SIZE {
        match j {
            4 => assert_eq!(palette::row_wash(j), Some("blue")),
            6 => assert_eq!(palette::row_wash(j), Some("red")),
            _ => assert_eq!(palette::row_wash(j), None),
        }
    }
}
