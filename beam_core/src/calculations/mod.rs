//! # Beam Response Calculations
//!
//! The numerical engine, split by pipeline stage:
//!
//! - [`grid`] - Uniform sampling grid over the span
//! - [`reactions`] - Support reactions from static equilibrium
//! - [`internal_forces`] - Shear and moment by superposition of loads
//! - [`integration`] - Slope and deflection from curvature
//! - [`boundary`] - Support corrections on slope and deflection
//! - [`solver`] - Validation, configuration dispatch and packaging
//! - [`response`] - Packaged results and peak summaries
//!
//! Every stage is a pure function over its inputs; a solve owns all of its
//! arrays and returns them by value.

pub mod boundary;
pub mod grid;
pub mod integration;
pub mod internal_forces;
pub mod reactions;
pub mod response;
pub mod solver;

// Re-export commonly used types
pub use grid::{Grid, SAMPLE_COUNT};
pub use reactions::Reactions;
pub use response::{BeamResponse, Peak, ResponseSummary};
pub use solver::{solve, solve_beam, BeamConfig, BeamInput, SupportType};
