//! Shear and bending-moment diagrams by superposition.
//!
//! The diagrams start from the left support's reactions, `V(x) = RA` and
//! `M(x) = RA·x + MA`, and each load then subtracts its own contribution
//! sample by sample.
//!
//! Trapezoidal loads are evaluated with a per-sample branch on where the
//! sample falls relative to the loaded interval. Past the loaded interval the
//! moment term uses the resultant's arm measured from `x1`, not from the
//! sample, so it stays constant beyond `x2`.

use super::grid::Grid;
use super::reactions::Reactions;
use crate::loads::Load;

/// Shear and moment sampled on a grid
#[derive(Debug, Clone, PartialEq)]
pub struct InternalForces {
    pub shear: Vec<f64>,
    pub moment: Vec<f64>,
}

/// Superpose every load's contribution onto the reaction-driven diagrams
pub fn evaluate(grid: &Grid, loads: &[Load], reactions: &Reactions) -> InternalForces {
    let mut forces = InternalForces {
        shear: vec![reactions.ra; grid.len()],
        moment: grid.x.iter().map(|&x| reactions.ra * x + reactions.ma).collect(),
    };

    for load in loads {
        match *load {
            Load::Point { p, x } => forces.subtract_point(grid, p, x),
            Load::Distributed { w, x1, x2 } => forces.subtract_uniform(grid, w, x1, x2),
            Load::Moment { m, x } => forces.subtract_couple(grid, m, x),
            Load::Trapezoidal { w1, w2, x1, x2 } => forces.subtract_trapezoidal(grid, w1, w2, x1, x2),
        }
    }

    forces
}

impl InternalForces {
    fn subtract_point(&mut self, grid: &Grid, p: f64, a: f64) {
        for (i, &x) in grid.x.iter().enumerate() {
            if x >= a {
                self.shear[i] -= p;
                self.moment[i] -= p * (x - a);
            }
        }
    }

    fn subtract_uniform(&mut self, grid: &Grid, w: f64, x1: f64, x2: f64) {
        let extent = x2 - x1;
        for (i, &x) in grid.x.iter().enumerate() {
            let d = (x - x1).clamp(0.0, extent);
            self.shear[i] -= w * d;
            self.moment[i] -= w * d * d / 2.0;
            // Completed load keeps adding arm beyond its end
            if x >= x2 {
                self.moment[i] -= w * (x - x2) * extent;
            }
        }
    }

    fn subtract_couple(&mut self, grid: &Grid, m0: f64, a: f64) {
        for (i, &x) in grid.x.iter().enumerate() {
            if x >= a {
                self.moment[i] -= m0;
            }
        }
    }

    fn subtract_trapezoidal(&mut self, grid: &Grid, w1: f64, w2: f64, x1: f64, x2: f64) {
        for (i, &x) in grid.x.iter().enumerate() {
            if x < x1 {
                continue;
            } else if x <= x2 {
                let wi = w1 + (w2 - w1) * (x - x1) / (x2 - x1);
                let d = x - x1;
                self.shear[i] -= 0.5 * (w1 + wi) * d;
                self.moment[i] -= ((w1 + wi) / 2.0) * d * d / 2.0;
            } else {
                let total = 0.5 * (w1 + w2) * (x2 - x1);
                let centroid = (x1 + x2) / 2.0;
                self.shear[i] -= total;
                self.moment[i] -= total * (centroid - x1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn grid() -> Grid {
        Grid::uniform(10.0, 11)
    }

    #[test]
    fn test_reactions_only() {
        let r = Reactions { ra: 5.0, rb: 0.0, ma: 2.0 };
        let forces = evaluate(&grid(), &[], &r);
        assert!(forces.shear.iter().all(|&v| v == 5.0));
        assert_eq!(forces.moment[0], 2.0);
        assert_eq!(forces.moment[10], 52.0);
    }

    #[test]
    fn test_point_load_step() {
        let r = Reactions { ra: 500.0, rb: 500.0, ma: 0.0 };
        let forces = evaluate(&grid(), &[Load::point(1000.0, 5.0)], &r);

        assert_eq!(forces.shear[4], 500.0);
        assert_eq!(forces.shear[5], -500.0);
        assert_relative_eq!(forces.moment[5], 2500.0);
        // Closes to zero at the far support
        assert_abs_diff_eq!(forces.moment[10], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_full_uniform_load() {
        // 100 over 10: RA = 500, Mmax = wL²/8 = 1250
        let r = Reactions { ra: 500.0, rb: 500.0, ma: 0.0 };
        let forces = evaluate(&grid(), &[Load::udl(100.0, 0.0, 10.0)], &r);

        assert_abs_diff_eq!(forces.shear[5], 0.0, epsilon = 1e-9);
        assert_relative_eq!(forces.shear[10], -500.0);
        assert_relative_eq!(forces.moment[5], 1250.0);
        assert_abs_diff_eq!(forces.moment[10], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_partial_uniform_beyond_end() {
        // 100 over [2, 4]: past x2 the moment falls by W·(x - centroid)
        let zero = Reactions::default();
        let forces = evaluate(&grid(), &[Load::udl(100.0, 2.0, 4.0)], &zero);

        assert_eq!(forces.shear[1], 0.0);
        assert_relative_eq!(forces.shear[3], -100.0);
        assert_relative_eq!(forces.shear[8], -200.0);
        // x = 8: W = 200 at centroid 3 -> 200 * 5
        assert_relative_eq!(forces.moment[8], -1000.0);
    }

    #[test]
    fn test_applied_couple() {
        let zero = Reactions::default();
        let forces = evaluate(&grid(), &[Load::moment(300.0, 4.0)], &zero);

        assert!(forces.shear.iter().all(|&v| v == 0.0));
        assert_eq!(forces.moment[3], 0.0);
        assert_eq!(forces.moment[4], -300.0);
        assert_eq!(forces.moment[10], -300.0);
    }

    #[test]
    fn test_trapezoidal_inside_interval() {
        let zero = Reactions::default();
        let forces = evaluate(&grid(), &[Load::uvl(0.0, 100.0, 0.0, 10.0)], &zero);

        // x = 4: wi = 40, V = -0.5 * 40 * 4, M = -(40/2) * 16 / 2
        assert_relative_eq!(forces.shear[4], -80.0);
        assert_relative_eq!(forces.moment[4], -160.0);
    }

    #[test]
    fn test_trapezoidal_past_interval_uses_fixed_arm() {
        let zero = Reactions::default();
        let forces = evaluate(&grid(), &[Load::uvl(100.0, 300.0, 2.0, 4.0)], &zero);

        // W = 0.5 * 400 * 2 = 400, arm = centroid - x1 = 1
        assert_eq!(forces.shear[1], 0.0);
        assert_relative_eq!(forces.shear[6], -400.0);
        assert_relative_eq!(forces.moment[6], -400.0);
        assert_relative_eq!(forces.moment[9], -400.0);
    }
}
