//! Grid coordinate generation.

use crate::options::UnitShape;
use std::fmt;

/// Vertical distance between hexagon rows when neighbors are one unit apart.
const HEX_ROW_HEIGHT: f64 = 0.866_025_403_784_438_6;

/// Produces the spatial coordinates of every unit on a grid.
pub trait CoordsGenerator: fmt::Debug + Send + Sync {
    /// Returns one `[x, y]` pair per unit, row-major.
    ///
    /// `dims` is `[width, height]`. A zero dimension yields no units.
    fn coords(&self, shape: UnitShape, dims: [usize; 2]) -> Vec<[f64; 2]>;
}

/// Flat two-dimensional grid.
///
/// Rectangular units sit on integer coordinates `(col, row)`. Hexagonal
/// units shift odd rows right by half a unit and compress rows so that all
/// six neighbors are at distance one.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarGrid;

impl CoordsGenerator for PlanarGrid {
    fn coords(&self, shape: UnitShape, dims: [usize; 2]) -> Vec<[f64; 2]> {
        let [width, height] = dims;
        let mut coords = Vec::new();
        // Reservation is only a hint; an overflowing or oversized count skips it.
        if let Some(units) = width.checked_mul(height) {
            let _ = coords.try_reserve_exact(units);
        }

        for row in 0..height {
            for col in 0..width {
                let point = match shape {
                    UnitShape::Rectangle => [col as f64, row as f64],
                    UnitShape::Hexagon => {
                        let shift = if row % 2 == 1 { 0.5 } else { 0.0 };
                        [col as f64 + shift, row as f64 * HEX_ROW_HEIGHT]
                    }
                };
                coords.push(point);
            }
        }

        coords
    }
}

/// Euclidean distance between two grid points.
#[inline]
pub fn grid_distance(a: [f64; 2], b: [f64; 2]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_coords() {
        let coords = PlanarGrid.coords(UnitShape::Rectangle, [3, 2]);
        assert_eq!(coords.len(), 6);
        assert_eq!(coords[0], [0.0, 0.0]);
        assert_eq!(coords[2], [2.0, 0.0]);
        assert_eq!(coords[3], [0.0, 1.0]);
    }

    #[test]
    fn test_hexagon_neighbors_equidistant() {
        let coords = PlanarGrid.coords(UnitShape::Hexagon, [3, 3]);
        // Unit 4 is (col 1, row 1), shifted right.
        let center = coords[4];
        assert!((center[0] - 1.5).abs() < 1e-12);

        for &n in &[3usize, 5, 1, 2, 7, 8] {
            let d = grid_distance(center, coords[n]);
            assert!((d - 1.0).abs() < 1e-9, "unit {n} at distance {d}");
        }
    }

    #[test]
    fn test_zero_dimension_yields_no_units() {
        assert!(PlanarGrid.coords(UnitShape::Rectangle, [0, 4]).is_empty());
        assert!(PlanarGrid.coords(UnitShape::Hexagon, [4, 0]).is_empty());
    }

    #[test]
    fn test_grid_distance() {
        assert!((grid_distance([0.0, 0.0], [3.0, 4.0]) - 5.0).abs() < 1e-12);
    }
}
