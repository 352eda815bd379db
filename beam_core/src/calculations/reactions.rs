//! Support reactions from static equilibrium.
//!
//! All four configurations start from the same two sums over the load set:
//! the total vertical force and the total moment about the left end
//! (x = 0). Only point, uniform and applied-moment loads enter these sums;
//! trapezoidal loads do not participate in reactions.
//!
//! ## Sign Convention
//! - Loads are positive in the load direction
//! - Reactions are positive opposing the loads
//! - `ma` is the moment reaction at a fixed left support

use serde::{Deserialize, Serialize};

use crate::loads::Load;

/// Decimal places reactions are rounded to in a packaged response
pub const REACTION_DECIMALS: i32 = 3;

/// Support reactions
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Reactions {
    /// Left support force
    #[serde(rename = "RA")]
    pub ra: f64,
    /// Right (or roller) support force; zero for a cantilever
    #[serde(rename = "RB")]
    pub rb: f64,
    /// Left support moment; zero unless the left end is fixed
    #[serde(rename = "MA")]
    pub ma: f64,
}

impl Reactions {
    /// Sum of the vertical support forces
    pub fn total_vertical(&self) -> f64 {
        self.ra + self.rb
    }

    /// Copy with every component rounded to `decimals` places
    pub fn rounded(&self, decimals: i32) -> Self {
        Reactions {
            ra: round_to(self.ra, decimals),
            rb: round_to(self.rb, decimals),
            ma: round_to(self.ma, decimals),
        }
    }
}

/// Total force and moment about x = 0 of the reaction-bearing loads
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StaticTotals {
    pub total_force: f64,
    pub total_moment: f64,
}

impl StaticTotals {
    /// Accumulate equilibrium sums over a load set
    pub fn accumulate(loads: &[Load]) -> Self {
        loads
            .iter()
            .filter_map(Load::static_resultant)
            .fold(StaticTotals::default(), |acc, r| StaticTotals {
                total_force: acc.total_force + r.force,
                total_moment: acc.total_moment + r.moment,
            })
    }
}

/// Pin at x = 0, roller at x = L
pub fn simply_supported(loads: &[Load], length: f64) -> Reactions {
    let totals = StaticTotals::accumulate(loads);
    let rb = totals.total_moment / length;
    Reactions {
        ra: totals.total_force - rb,
        rb,
        ma: 0.0,
    }
}

/// Fixed at x = 0, free at x = L
pub fn cantilever(loads: &[Load]) -> Reactions {
    let totals = StaticTotals::accumulate(loads);
    Reactions {
        ra: totals.total_force,
        rb: 0.0,
        ma: totals.total_moment,
    }
}

/// Fixed at both ends.
///
/// The system is statically indeterminate; this splits the force equally
/// between the supports and takes `MA = total_moment / 2L`. It is an
/// equilibrium estimate, not a compatibility solution.
pub fn fixed_fixed(loads: &[Load], length: f64) -> Reactions {
    let totals = StaticTotals::accumulate(loads);
    let half = totals.total_force / 2.0;
    Reactions {
        ra: half,
        rb: half,
        ma: totals.total_moment / (2.0 * length),
    }
}

/// Pin at x = 0, roller at `roller_position`, free overhang beyond it
pub fn overhang(loads: &[Load], roller_position: f64) -> Reactions {
    let totals = StaticTotals::accumulate(loads);
    let rb = totals.total_moment / roller_position;
    Reactions {
        ra: totals.total_force - rb,
        rb,
        ma: 0.0,
    }
}

/// Round to `decimals` places, exact halves going to the even neighbour
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
