use std::f64::consts::TAU;

use crate::foundation::core::{Mat2, Point, apply_mat2};
use crate::foundation::math::linspace;

/// Samples on the unit circle.
pub const CIRCLE_SAMPLES: usize = 128;
/// Grid lines span `[-GRID_EXTENT, GRID_EXTENT]` on both axes.
pub const GRID_EXTENT: f64 = 2.0;
/// Grid values per axis (and samples per grid line).
pub const GRID_STEPS: usize = 9;

/// The shapes the animation deforms: unit circle, a coordinate grid and the standard basis.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotGeometry {
    /// Closed polyline around the unit circle (endpoint not repeated).
    pub circle: Vec<Point>,
    /// Open polylines; a vertical then a horizontal line for each grid value.
    pub grid: Vec<Vec<Point>>,
    /// Images of `e₁` and `e₂`.
    pub basis: [Point; 2],
}

impl PlotGeometry {
    /// Untransformed geometry with the default sampling.
    pub fn standard() -> Self {
        Self::sampled(CIRCLE_SAMPLES, GRID_STEPS)
    }

    /// Untransformed geometry with `circle_samples` points on the circle and `grid_steps` lines
    /// per axis.
    pub fn sampled(circle_samples: usize, grid_steps: usize) -> Self {
        let circle = (0..circle_samples)
            .map(|k| {
                let t = TAU * (k as f64) / (circle_samples as f64);
                Point::new(t.cos(), t.sin())
            })
            .collect();

        let range = linspace(-GRID_EXTENT, GRID_EXTENT, grid_steps);
        let mut grid = Vec::with_capacity(range.len() * 2);
        for &value in &range {
            grid.push(range.iter().map(|&y| Point::new(value, y)).collect());
            grid.push(range.iter().map(|&x| Point::new(x, value)).collect());
        }

        Self {
            circle,
            grid,
            basis: [Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
        }
    }

    /// Copy with every point mapped through `m`.
    pub fn transformed(&self, m: &Mat2) -> Self {
        let map = |pts: &[Point]| pts.iter().map(|&p| apply_mat2(m, p)).collect::<Vec<_>>();
        Self {
            circle: map(&self.circle),
            grid: self.grid.iter().map(|line| map(line)).collect(),
            basis: self.basis.map(|p| apply_mat2(m, p)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/geometry.rs"]
mod tests;
