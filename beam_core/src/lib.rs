//! # beam_core - Beam Response Engine
//!
//! `beam_core` computes shear, bending moment and deflection along a straight
//! elastic beam carrying point loads, uniform loads, applied moments and
//! trapezoidal loads. Four single-span support configurations are supported:
//! simply supported, cantilever, fixed–fixed and single overhang.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Every solve builds its own grid and arrays and returns them by value
//! - **JSON-First**: Inputs, outputs and errors implement Serialize/Deserialize
//! - **Fail Early**: Inputs are validated before any numeric work
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::calculations::solve_beam;
//! use beam_core::loads::Load;
//!
//! // 3 m cantilever with a 600 N tip load
//! let response = solve_beam("cantilever", 3.0, &[Load::point(600.0, 3.0)], 210e9, 8e-6, None).unwrap();
//!
//! assert_eq!(response.reactions.ra, 600.0);
//! assert_eq!(response.reactions.ma, 1800.0);
//! assert_eq!(response.deflection.len(), 600);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The numerical pipeline and its entry points
//! - [`loads`] - Load variants and their validation
//! - [`payload`] - JSON request/response shapes with defaults
//! - [`errors`] - Structured error types
//! - [`file_io`] - Request loading and atomic response saves

pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod loads;
pub mod payload;

// Re-export commonly used types at crate root for convenience
pub use calculations::{solve, solve_beam, BeamConfig, BeamInput, BeamResponse, Reactions, SupportType};
pub use errors::{CalcError, CalcResult};
pub use loads::Load;
pub use payload::{respond, SolveOutcome, SolveRequest};
