//! Sampling grid over the beam span.
//!
//! Every diagram the engine produces is indexed against one [`Grid`]: `N`
//! evenly spaced positions from the left end (x = 0) to the right end
//! (x = L), both ends included.

use serde::{Deserialize, Serialize};

/// Number of samples along the span for every configuration
pub const SAMPLE_COUNT: usize = 600;

/// Evenly spaced sample positions over `[0, L]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Sample positions, strictly increasing
    pub x: Vec<f64>,
    /// Spacing between neighbouring samples
    pub dx: f64,
}

impl Grid {
    /// Build `samples` positions over `[0, length]`.
    ///
    /// `length` must already be validated as positive. At least two samples
    /// are always produced so the spacing is defined. Position `i` is
    /// `i * dx`, and the last sample is pinned to `length` exactly.
    pub fn uniform(length: f64, samples: usize) -> Self {
        let samples = samples.max(2);
        let dx = length / (samples - 1) as f64;
        let mut x: Vec<f64> = (0..samples).map(|i| i as f64 * dx).collect();
        x[samples - 1] = length;
        Grid { x, dx }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false for a constructed grid; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Position of the last sample (the span length)
    pub fn length(&self) -> f64 {
        self.x.last().copied().unwrap_or(0.0)
    }

    /// Index of the sample closest to `at`
    pub fn nearest_index(&self, at: f64) -> usize {
        let upper = self.x.partition_point(|&xi| xi < at);
        if upper == 0 {
            return 0;
        }
        if upper >= self.x.len() {
            return self.x.len() - 1;
        }
        if (at - self.x[upper - 1]) <= (self.x[upper] - at) {
            upper - 1
        } else {
            upper
        }
    }

    /// Linearly interpolate a sampled series at an arbitrary position.
    ///
    /// Positions before the first sample take the first value, positions past
    /// the last sample take the last value.
    pub fn interpolate(&self, values: &[f64], at: f64) -> f64 {
        let n = self.x.len().min(values.len());
        if n == 0 {
            return 0.0;
        }

        let upper = self.x[..n].partition_point(|&xi| xi <= at);
        if upper == 0 {
            return values[0];
        }
        if upper >= n {
            return values[n - 1];
        }

        let (x0, x1) = (self.x[upper - 1], self.x[upper]);
        let (v0, v1) = (values[upper - 1], values[upper]);
        v0 + (v1 - v0) * (at - x0) / (x1 - x0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_grid_endpoints() {
        let grid = Grid::uniform(4.0, SAMPLE_COUNT);
        assert_eq!(grid.len(), 600);
        assert_eq!(grid.x[0], 0.0);
        assert_eq!(grid.x[599], 4.0);
        assert_eq!(grid.length(), 4.0);
        assert_relative_eq!(grid.dx, 4.0 / 599.0);
    }

    #[test]
    fn test_grid_strictly_increasing() {
        let grid = Grid::uniform(7.3, SAMPLE_COUNT);
        assert!(grid.x.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_positions_step_from_spacing() {
        let grid = Grid::uniform(5.99, SAMPLE_COUNT);
        let dx = 5.99 / 599.0;
        assert_eq!(grid.x[299], 299.0 * dx);
        assert_eq!(grid.x[299], 2.99);
        assert_eq!(grid.x[599], 5.99);
    }

    #[test]
    fn test_minimum_two_samples() {
        let grid = Grid::uniform(2.0, 1);
        assert_eq!(grid.x, vec![0.0, 2.0]);
        assert_eq!(grid.dx, 2.0);
    }

    #[test]
    fn test_nearest_index() {
        let grid = Grid::uniform(10.0, 11);
        assert_eq!(grid.nearest_index(-1.0), 0);
        assert_eq!(grid.nearest_index(3.2), 3);
        assert_eq!(grid.nearest_index(3.7), 4);
        assert_eq!(grid.nearest_index(12.0), 10);
    }

    #[test]
    fn test_interpolate_between_samples() {
        let grid = Grid::uniform(10.0, 11);
        let values: Vec<f64> = grid.x.iter().map(|x| 2.0 * x + 1.0).collect();

        assert_relative_eq!(grid.interpolate(&values, 3.25), 7.5);
        assert_relative_eq!(grid.interpolate(&values, 10.0), 21.0);
        assert_relative_eq!(grid.interpolate(&values, 0.0), 1.0);
    }

    #[test]
    fn test_interpolate_clamps_outside() {
        let grid = Grid::uniform(1.0, 3);
        let values = [5.0, 6.0, 9.0];
        assert_eq!(grid.interpolate(&values, -0.5), 5.0);
        assert_eq!(grid.interpolate(&values, 2.0), 9.0);
    }
}
