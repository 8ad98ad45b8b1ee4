//! Pure geometry for the hexagonal Yinsh board.
//!
//! The board is an 11×11 axial grid (axial coordinates x = i − 5, y = j − 5
//! in [-5, 5]) clipped to the Yinsh outline: a hexagon inscribed in the
//! square with the bounding square's corner cells removed. Every valid
//! intersection gets a fixed pixel position computed once from the canvas
//! edge length; nothing here touches the DOM, so native `cargo test` can
//! exercise all of it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cells per side of the axial grid before clipping.
pub const GRID_SIZE: usize = 11;

/// Board "radius": axial coordinates run from -RADIUS to RADIUS.
const RADIUS: i32 = 5;

/// Canvas pixel coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn dist_sq(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Permitted axial-y span [low, high] for a given axial x. This table IS the
/// board shape — reproduce it exactly: the six extreme corner cells of the
/// bounding square are gone, plus the near-corner cells at x = ±5.
fn axial_span(x: i32) -> Option<(i32, i32)> {
    match x {
        0 => Some((-4, 4)),
        1..=4 => Some((x - 5, 5)),
        5 => Some((1, 4)),
        -4..=-1 => Some((-5, x + 5)),
        -5 => Some((-4, -1)),
        _ => None,
    }
}

/// Immutable pixel-position table for all board intersections.
///
/// Built once from the canvas edge length and passed around by reference;
/// invalid (clipped) cells are `None` rather than a sentinel coordinate.
pub struct BoardGrid {
    edge: f64,
    spacing: f64,
    altitude: f64,
    cells: [[Option<Point>; GRID_SIZE]; GRID_SIZE],
}

impl BoardGrid {
    /// Compute the grid for a square canvas of the given edge length.
    ///
    /// `spacing` (= edge / 11) is the vertical distance between adjacent
    /// rows, `altitude` (= spacing·√3/2) the horizontal distance between
    /// adjacent columns of the 60° lattice. A non-positive or non-finite
    /// edge yields a degenerate grid with no valid intersections.
    pub fn new(edge: f64) -> Self {
        let spacing = edge / GRID_SIZE as f64;
        let altitude = spacing * 3f64.sqrt() / 2.0;
        let mut cells = [[None; GRID_SIZE]; GRID_SIZE];
        if edge.is_finite() && edge > 0.0 {
            let center = edge / 2.0;
            for (i, column) in cells.iter_mut().enumerate() {
                let x = i as i32 - RADIUS;
                let Some((low, high)) = axial_span(x) else {
                    continue;
                };
                for (j, cell) in column.iter_mut().enumerate() {
                    let y = j as i32 - RADIUS;
                    if y < low || y > high {
                        continue;
                    }
                    *cell = Some(Point::new(
                        center + altitude * x as f64,
                        center - spacing * (y as f64 - x as f64 / 2.0),
                    ));
                }
            }
        }
        Self {
            edge,
            spacing,
            altitude,
            cells,
        }
    }

    pub fn edge(&self) -> f64 {
        self.edge
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Pixel position of intersection (i, j); `None` if clipped or out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<Point> {
        self.cells.get(i)?.get(j).copied().flatten()
    }

    /// All valid intersections with their grid indices, in scan order.
    pub fn intersections(&self) -> impl Iterator<Item = (usize, usize, Point)> + '_ {
        self.cells.iter().enumerate().flat_map(|(i, column)| {
            column
                .iter()
                .enumerate()
                .filter_map(move |(j, cell)| cell.map(|p| (i, j, p)))
        })
    }

    /// Straight segments tracing the board: one per row and per column run of
    /// valid intersections, plus the short diagonal edges along the outline
    /// that the row/column sweep does not cover.
    ///
    /// The board shape guarantees each row's and column's valid cells form a
    /// single contiguous run, so one segment from first to last valid cell is
    /// enough. Rows or columns without any valid cell emit nothing.
    pub fn lines(&self) -> Vec<(Point, Point)> {
        let mut segments = Vec::new();
        for i in 0..GRID_SIZE {
            if let Some(seg) = self.run_endpoints(|j| self.cells[i][j]) {
                segments.push(seg);
            }
        }
        for j in 0..GRID_SIZE {
            if let Some(seg) = self.run_endpoints(|i| self.cells[i][j]) {
                segments.push(seg);
            }
        }
        for (i, j, from) in self.intersections() {
            let x = i as i32 - RADIUS;
            let y = j as i32 - RADIUS;
            let corner = matches!((x, y), (-4, -4) | (-4, 1) | (1, -4));
            if x.abs() == RADIUS || corner {
                // Reflect across the board's center anti-diagonal; skip when
                // the mirrored cell is clipped so no segment ever ends on an
                // invalid cell.
                let ri = (RADIUS - y) as usize;
                let rj = (RADIUS - x) as usize;
                if let Some(to) = self.get(ri, rj) {
                    segments.push((from, to));
                }
            }
        }
        segments
    }

    /// Endpoints of the contiguous run of valid cells along one axis.
    fn run_endpoints(&self, cell: impl Fn(usize) -> Option<Point>) -> Option<(Point, Point)> {
        let first = (0..GRID_SIZE).find_map(&cell)?;
        let last = (0..GRID_SIZE).rev().find_map(&cell)?;
        Some((first, last))
    }

    /// Resolve a canvas-local pixel to a board intersection.
    ///
    /// Candidates are intersections whose altitude/2 half-width box contains
    /// the pixel; among them the Euclidean-nearest wins, so adjacent
    /// intersections can never both claim a click. `None` means no selection,
    /// which is a normal outcome rather than an error.
    pub fn hit_test(&self, p: Point) -> Option<(usize, usize)> {
        let half = self.altitude / 2.0;
        self.intersections()
            .filter(|&(_, _, c)| (p.x - c.x).abs() < half && (p.y - c.y).abs() < half)
            .min_by(|&(_, _, a), &(_, _, b)| p.dist_sq(a).total_cmp(&p.dist_sq(b)))
            .map(|(i, j, _)| (i, j))
    }
}
