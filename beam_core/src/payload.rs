//! # Request / Response Payloads
//!
//! JSON shapes exchanged with callers of the engine. A request is coerced
//! leniently the way a form-driven client expects: numeric fields may arrive
//! as numbers or numeric strings, and anything missing or unparseable falls
//! back to a default.
//!
//! ## Request
//!
//! ```json
//! {
//!   "beamType": "overhang",
//!   "beam": { "length": 6.0, "E": 210e9, "I": "8e-6" },
//!   "loads": [
//!     { "type": "point", "P": 1000.0, "x": 6.0 },
//!     { "type": "udl", "w": 2000.0, "x1": 0.0, "x2": 4.0 }
//!   ],
//!   "overhangLength": 1.5
//! }
//! ```
//!
//! ## Response
//!
//! Either a [`BeamResponse`] or `{ "error": "..." }`.
//!
//! ```rust
//! use beam_core::payload::{respond, SolveOutcome};
//!
//! let outcome = respond(r#"{ "beam": { "length": 4 }, "loads": [ { "type": "point", "P": 1000, "x": 2 } ] }"#);
//! match outcome {
//!     SolveOutcome::Solved(response) => assert_eq!(response.reactions.rb, 500.0),
//!     SolveOutcome::Failed { error } => panic!("{error}"),
//! }
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::calculations::solver::check_length;
use crate::calculations::{solve, BeamConfig, BeamInput, BeamResponse, SupportType};
use crate::errors::{CalcError, CalcResult};
use crate::loads::Load;

/// Support configuration used when a request omits `beamType`
pub const DEFAULT_BEAM_TYPE: &str = "simply_supported";
/// Span length used when `beam.length` is missing or not a number
pub const DEFAULT_LENGTH: f64 = 1.0;
/// Elastic modulus used when `beam.E` is missing or not a number (steel, Pa)
pub const DEFAULT_E: f64 = 210e9;
/// Second moment of area used when `beam.I` is missing or not a number (m⁴)
pub const DEFAULT_I: f64 = 8e-6;

/// Beam properties as sent by a client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeamPayload {
    #[serde(default)]
    pub length: Option<Value>,
    #[serde(rename = "E", default)]
    pub e: Option<Value>,
    #[serde(rename = "I", default)]
    pub i: Option<Value>,
}

/// A solve request as sent by a client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    #[serde(rename = "beamType", default)]
    pub beam_type: Option<String>,
    #[serde(default)]
    pub beam: Option<BeamPayload>,
    #[serde(default)]
    pub loads: Option<Vec<Value>>,
    #[serde(rename = "overhangLength", default)]
    pub overhang_length: Option<Value>,
}

impl SolveRequest {
    /// Parse a request document
    pub fn from_json(body: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Support-type tag, defaulted
    pub fn beam_type(&self) -> &str {
        self.beam_type.as_deref().unwrap_or(DEFAULT_BEAM_TYPE)
    }

    /// Span length, defaulted
    pub fn length(&self) -> f64 {
        self.beam_number(|b| b.length.as_ref(), DEFAULT_LENGTH)
    }

    /// Elastic modulus, defaulted
    pub fn e(&self) -> f64 {
        self.beam_number(|b| b.e.as_ref(), DEFAULT_E)
    }

    /// Second moment of area, defaulted
    pub fn i(&self) -> f64 {
        self.beam_number(|b| b.i.as_ref(), DEFAULT_I)
    }

    /// Overhang length, if present and numeric
    pub fn overhang_length(&self) -> Option<f64> {
        self.overhang_length.as_ref().and_then(lenient_number)
    }

    fn beam_number(&self, field: impl Fn(&BeamPayload) -> Option<&Value>, default: f64) -> f64 {
        self.beam
            .as_ref()
            .and_then(field)
            .and_then(lenient_number)
            .unwrap_or(default)
    }

    /// Parse each load record; a record that does not parse names its index
    pub fn parsed_loads(&self) -> CalcResult<Vec<Load>> {
        self.loads
            .iter()
            .flatten()
            .enumerate()
            .map(|(index, raw)| {
                Load::deserialize(raw).map_err(|e| {
                    CalcError::invalid_input(format!("loads[{}]", index), raw.to_string(), e.to_string())
                })
            })
            .collect()
    }

    /// Resolve defaults and build a typed engine input.
    ///
    /// Checks run in the order a caller sees them: span length, support
    /// tag, then the load records. Remaining validation happens in the solve.
    pub fn to_input(&self) -> CalcResult<BeamInput> {
        let length = self.length();
        check_length(length)?;

        let support: SupportType = self.beam_type().parse()?;
        let loads = self.parsed_loads()?;

        Ok(BeamInput {
            config: BeamConfig {
                support,
                length,
                e: self.e(),
                i: self.i(),
                overhang_length: self.overhang_length(),
            },
            loads,
        })
    }

    /// Resolve and solve
    pub fn solve(&self) -> CalcResult<BeamResponse> {
        solve(&self.to_input()?)
    }
}

/// Either a full response or an error message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SolveOutcome {
    Solved(BeamResponse),
    Failed { error: String },
}

impl SolveOutcome {
    /// Returns true if the solve succeeded
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved(_))
    }
}

impl From<CalcResult<BeamResponse>> for SolveOutcome {
    fn from(result: CalcResult<BeamResponse>) -> Self {
        match result {
            Ok(response) => SolveOutcome::Solved(response),
            Err(e) => SolveOutcome::Failed { error: e.to_string() },
        }
    }
}

/// Parse a request document and solve it; failures become `{ "error": ... }`
pub fn respond(body: &str) -> SolveOutcome {
    let result = SolveRequest::from_json(body).and_then(|request| request.solve());
    match &result {
        Err(e) if e.is_request_error() => debug!("request rejected ({}): {}", e.error_code(), e),
        Err(e) => warn!("solve failed ({}): {}", e.error_code(), e),
        Ok(_) => {}
    }
    result.into()
}

/// Coerce a JSON number or numeric string to f64
fn lenient_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
