//! Boundary corrections applied to the integrated slope and deflection.
//!
//! The double integration leaves a constant and a linear drift in the
//! deflection. Each support removes part of it:
//!
//! - A fixed left end shifts slope and deflection so both are zero at x = 0.
//! - A zero-deflection support at `x_ref` subtracts the ramp
//!   `(x / x_ref) · w(x_ref)`, which keeps w(0) and forces w(x_ref) = 0.
//!
//! The ramp assumes the drift is linear across the span. For unsymmetric
//! fixed–fixed loading this is an approximation, not a compatibility solution.

use super::grid::Grid;
use super::integration::Integrated;

/// Which corrections a support configuration applies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryConditions {
    /// Zero slope and zero deflection at x = 0
    pub fixed_left: bool,
    /// Position of a zero-deflection support other than x = 0
    pub zero_deflection_at: Option<f64>,
}

/// Apply the configured corrections in place
pub fn enforce(grid: &Grid, integrated: &mut Integrated, conditions: &BoundaryConditions) {
    if conditions.fixed_left {
        clamp_left(integrated);
    }
    if let Some(x_ref) = conditions.zero_deflection_at {
        pin_deflection(grid, &mut integrated.deflection, x_ref);
    }
}

/// Shift slope and deflection to zero at the left end
pub fn clamp_left(integrated: &mut Integrated) {
    if let Some(&slope0) = integrated.slope.first() {
        integrated.slope.iter_mut().for_each(|s| *s -= slope0);
    }
    if let Some(&w0) = integrated.deflection.first() {
        integrated.deflection.iter_mut().for_each(|w| *w -= w0);
    }
}

/// Subtract the linear ramp that zeroes deflection at `x_ref`.
///
/// `x_ref` need not coincide with a sample; the deflection there is
/// interpolated. When `x_ref` is the last sample the value is read directly.
pub fn pin_deflection(grid: &Grid, deflection: &mut [f64], x_ref: f64) {
    let w_ref = if x_ref >= grid.length() {
        deflection.last().copied().unwrap_or(0.0)
    } else {
        grid.interpolate(deflection, x_ref)
    };

    for (w, &x) in deflection.iter_mut().zip(&grid.x) {
        *w -= (x / x_ref) * w_ref;
    }
}
