//! Slope and deflection from the moment diagram.
//!
//! Curvature `κ = M / EI` is integrated twice with running left-Riemann sums
//! at the grid spacing:
//!
//! ```text
//! slope[i]      = Σ_{k ≤ i} κ[k]     · dx
//! deflection[i] = Σ_{k ≤ i} slope[k] · dx
//! ```
//!
//! The raw integrals carry arbitrary integration constants; the boundary
//! module removes them afterwards.

use super::grid::Grid;

/// Integrated slope and deflection, before boundary correction
#[derive(Debug, Clone, PartialEq)]
pub struct Integrated {
    pub slope: Vec<f64>,
    pub deflection: Vec<f64>,
}

/// Integrate `moment / ei` twice over the grid
pub fn integrate_curvature(grid: &Grid, moment: &[f64], ei: f64) -> Integrated {
    let slope = running_sum(moment.iter().map(|m| m / ei), grid.dx);
    let deflection = running_sum(slope.iter().copied(), grid.dx);
    Integrated { slope, deflection }
}

fn running_sum(values: impl Iterator<Item = f64>, dx: f64) -> Vec<f64> {
    values
        .scan(0.0, |acc, v| {
            *acc += v;
            Some(*acc * dx)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_moment() {
        let grid = Grid::uniform(3.0, 50);
        let out = integrate_curvature(&grid, &vec![0.0; 50], 1.0e6);
        assert!(out.slope.iter().all(|&s| s == 0.0));
        assert!(out.deflection.iter().all(|&w| w == 0.0));
    }

    #[test]
    fn test_constant_curvature() {
        // M / EI = 1 with dx = 1: slope = 1, 2, 3 ... deflection = 1, 3, 6 ...
        let grid = Grid::uniform(4.0, 5);
        let out = integrate_curvature(&grid, &[2.0; 5], 2.0);
        assert_eq!(out.slope, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(out.deflection, vec![1.0, 3.0, 6.0, 10.0, 15.0]);
    }

    #[test]
    fn test_converges_to_quadratic() {
        // Constant curvature k integrates to k·x²/2 as the grid is refined
        let grid = Grid::uniform(2.0, 600);
        let k = 1.0e-3;
        let moment = vec![k * 5.0e6; 600];
        let out = integrate_curvature(&grid, &moment, 5.0e6);
        assert_relative_eq!(out.deflection[599], k * 2.0 * 2.0 / 2.0, max_relative = 0.01);
    }
}
