//! # Beam Solver
//!
//! Entry point of the engine. Validates a [`BeamInput`], picks the
//! configuration's reaction solver and boundary corrections, and runs the
//! shared pipeline:
//!
//! ```text
//! Grid -> Reactions -> Shear/Moment -> Slope/Deflection -> Boundary fix -> BeamResponse
//! ```
//!
//! ## Support Configurations
//!
//! | Support            | Reactions                    | Boundary correction            |
//! |--------------------|------------------------------|--------------------------------|
//! | `simply_supported` | RB = ΣM/L, RA = ΣF − RB      | w(L) = 0                       |
//! | `cantilever`       | RA = ΣF, MA = ΣM             | slope(0) = 0, w(0) = 0         |
//! | `fixed_fixed`      | RA = RB = ΣF/2, MA = ΣM/2L   | slope(0) = 0, w(0) = 0, w(L) = 0 |
//! | `overhang`         | RB = ΣM/a, RA = ΣF − RB      | w(a) = 0, a = L − Lo           |
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::{solve, BeamConfig, BeamInput, SupportType};
//! use beam_core::loads::Load;
//!
//! let input = BeamInput {
//!     config: BeamConfig::new(SupportType::SimplySupported, 4.0, 210e9, 8e-6),
//!     loads: vec![Load::point(1000.0, 2.0)],
//! };
//!
//! let response = solve(&input).unwrap();
//! assert_eq!(response.reactions.ra, 500.0);
//! assert_eq!(response.x.len(), 600);
//! ```

use std::str::FromStr;

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use super::boundary::{self, BoundaryConditions};
use super::grid::{Grid, SAMPLE_COUNT};
use super::integration::integrate_curvature;
use super::internal_forces;
use super::reactions::{self, Reactions, REACTION_DECIMALS};
use super::response::BeamResponse;
use crate::errors::{CalcError, CalcResult};
use crate::loads::Load;

// =============================================================================
// SUPPORT TYPE
// =============================================================================

/// Support configuration of a single-span beam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportType {
    /// Pin at x = 0, roller at x = L
    #[default]
    SimplySupported,
    /// Fixed at x = 0, free at x = L
    Cantilever,
    /// Fixed at both ends
    FixedFixed,
    /// Pin at x = 0, roller at x = L − Lo, free overhang to x = L
    Overhang,
}

impl SupportType {
    /// All supported configurations
    pub const ALL: [SupportType; 4] = [
        SupportType::SimplySupported,
        SupportType::Cantilever,
        SupportType::FixedFixed,
        SupportType::Overhang,
    ];

    /// Wire tag used in requests
    pub fn tag(&self) -> &'static str {
        match self {
            SupportType::SimplySupported => "simply_supported",
            SupportType::Cantilever => "cantilever",
            SupportType::FixedFixed => "fixed_fixed",
            SupportType::Overhang => "overhang",
        }
    }

    /// Get display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportType::SimplySupported => "Simply Supported",
            SupportType::Cantilever => "Cantilever",
            SupportType::FixedFixed => "Fixed-Fixed",
            SupportType::Overhang => "Overhang",
        }
    }

    /// Returns true if the left end restrains rotation
    pub fn fixed_left(&self) -> bool {
        matches!(self, SupportType::Cantilever | SupportType::FixedFixed)
    }
}

impl FromStr for SupportType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SupportType::ALL
            .into_iter()
            .find(|support| support.tag() == s)
            .ok_or_else(|| CalcError::unsupported_configuration(s))
    }
}

impl std::fmt::Display for SupportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

// =============================================================================
// INPUT
// =============================================================================

/// Beam geometry, stiffness and supports
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamConfig {
    /// Support configuration
    pub support: SupportType,
    /// Span length L
    pub length: f64,
    /// Elastic modulus E
    pub e: f64,
    /// Second moment of area I
    pub i: f64,
    /// Overhang length Lo; only read for [`SupportType::Overhang`]
    #[serde(default)]
    pub overhang_length: Option<f64>,
}

impl BeamConfig {
    /// Create a configuration without an overhang
    pub fn new(support: SupportType, length: f64, e: f64, i: f64) -> Self {
        BeamConfig {
            support,
            length,
            e,
            i,
            overhang_length: None,
        }
    }

    /// Set the overhang length (builder pattern)
    pub fn with_overhang(mut self, overhang_length: f64) -> Self {
        self.overhang_length = Some(overhang_length);
        self
    }

    /// Flexural rigidity E·I
    pub fn flexural_rigidity(&self) -> f64 {
        self.e * self.i
    }

    /// Roller position a = L − Lo for an overhang beam.
    ///
    /// Fails with `MissingParameter` unless 0 < Lo < L.
    pub fn roller_position(&self) -> CalcResult<f64> {
        let lo = self.overhang_length.ok_or_else(|| {
            CalcError::missing_parameter("overhangLength", "Overhang length required for overhang beam")
        })?;
        if !lo.is_finite() || lo <= 0.0 || lo >= self.length {
            return Err(CalcError::missing_parameter(
                "overhangLength",
                format!("Overhang length must satisfy 0 < Lo < {}, got {}", self.length, lo),
            ));
        }
        Ok(self.length - lo)
    }

    /// Validate geometry, stiffness and (for overhang) the overhang length
    pub fn validate(&self) -> CalcResult<()> {
        check_length(self.length)?;
        if !self.e.is_finite() || self.e <= 0.0 {
            return Err(CalcError::invalid_input(
                "beam.E",
                self.e.to_string(),
                "Elastic modulus must be positive",
            ));
        }
        if !self.i.is_finite() || self.i <= 0.0 {
            return Err(CalcError::invalid_input(
                "beam.I",
                self.i.to_string(),
                "Second moment of area must be positive",
            ));
        }
        if self.support == SupportType::Overhang {
            self.roller_position()?;
        }
        Ok(())
    }
}

/// Span length must be finite and positive
pub(crate) fn check_length(length: f64) -> CalcResult<()> {
    if !length.is_finite() || length <= 0.0 {
        return Err(CalcError::invalid_input(
            "beam.length",
            length.to_string(),
            "Beam length must be positive",
        ));
    }
    Ok(())
}

/// A beam and the loads it carries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamInput {
    pub config: BeamConfig,
    #[serde(default)]
    pub loads: Vec<Load>,
}

impl BeamInput {
    /// Validate the configuration, then every load against the span
    pub fn validate(&self) -> CalcResult<()> {
        self.config.validate()?;
        for (index, load) in self.loads.iter().enumerate() {
            load.validate(index, self.config.length)?;
        }
        Ok(())
    }
}

// =============================================================================
// SOLVE
// =============================================================================

/// Solve a beam for reactions, shear, moment and deflection.
///
/// # Returns
///
/// * `Ok(BeamResponse)` - Reactions rounded to 3 decimals and 600-sample diagrams
/// * `Err(CalcError)` - If the input is invalid; no numeric work is done
pub fn solve(input: &BeamInput) -> CalcResult<BeamResponse> {
    input.validate()?;

    let config = &input.config;
    let loads = &input.loads;

    debug!(
        "solving {} beam: L={}, EI={}, {} load(s)",
        config.support,
        config.length,
        config.flexural_rigidity(),
        loads.len()
    );
    if loads.iter().any(|load| matches!(load, Load::Trapezoidal { .. })) {
        warn!("trapezoidal loads shape the diagrams but are excluded from support reactions");
    }

    for load in loads {
        trace!("  {}", load);
    }

    let (reactions, conditions) = plan(config, loads)?;
    trace!("reactions: {:?}, boundary: {:?}", reactions, conditions);

    let grid = Grid::uniform(config.length, SAMPLE_COUNT);
    let forces = internal_forces::evaluate(&grid, loads, &reactions);
    let mut integrated = integrate_curvature(&grid, &forces.moment, config.flexural_rigidity());
    boundary::enforce(&grid, &mut integrated, &conditions);

    Ok(BeamResponse {
        reactions: reactions.rounded(REACTION_DECIMALS),
        x: grid.x,
        shear: forces.shear,
        moment: forces.moment,
        deflection: integrated.deflection,
    })
}

/// Solve with the support configuration given as a wire tag.
///
/// The span length is checked before the tag. Unknown tags fail with
/// `UnsupportedConfiguration`; an overhang without a usable
/// `overhang_length` fails with `MissingParameter`.
pub fn solve_beam(
    beam_type: &str,
    length: f64,
    loads: &[Load],
    e: f64,
    i: f64,
    overhang_length: Option<f64>,
) -> CalcResult<BeamResponse> {
    check_length(length)?;
    let support: SupportType = beam_type.parse()?;
    let input = BeamInput {
        config: BeamConfig {
            support,
            length,
            e,
            i,
            overhang_length,
        },
        loads: loads.to_vec(),
    };
    solve(&input)
}

/// Reactions and boundary corrections for a configuration
fn plan(config: &BeamConfig, loads: &[Load]) -> CalcResult<(Reactions, BoundaryConditions)> {
    let fixed_left = config.support.fixed_left();
    let planned = match config.support {
        SupportType::SimplySupported => (
            reactions::simply_supported(loads, config.length),
            BoundaryConditions {
                fixed_left,
                zero_deflection_at: Some(config.length),
            },
        ),
        SupportType::Cantilever => (
            reactions::cantilever(loads),
            BoundaryConditions {
                fixed_left,
                zero_deflection_at: None,
            },
        ),
        SupportType::FixedFixed => (
            reactions::fixed_fixed(loads, config.length),
            BoundaryConditions {
                fixed_left,
                zero_deflection_at: Some(config.length),
            },
        ),
        SupportType::Overhang => {
            let a = config.roller_position()?;
            (
                reactions::overhang(loads, a),
                BoundaryConditions {
                    fixed_left,
                    zero_deflection_at: Some(a),
                },
            )
        }
    };
    Ok(planned)
}

// =============================================================================
// TESTS
// =============================================================================
