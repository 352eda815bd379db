//! Packaged solve results.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "reactions": { "RA": 500.0, "RB": 500.0, "MA": 0.0 },
//!   "x": [0.0, 0.00668, ...],
//!   "shear": [500.0, 500.0, ...],
//!   "moment": [0.0, 3.34, ...],
//!   "deflection": [0.0, -0.0000012, ...]
//! }
//! ```
//!
//! All four arrays have one entry per grid sample.

use serde::{Deserialize, Serialize};

use super::reactions::Reactions;

/// Diagrams and reactions returned by a solve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamResponse {
    /// Support reactions, rounded for presentation
    pub reactions: Reactions,
    /// Sample positions
    pub x: Vec<f64>,
    /// Shear force at each sample
    pub shear: Vec<f64>,
    /// Bending moment at each sample
    pub moment: Vec<f64>,
    /// Deflection at each sample
    pub deflection: Vec<f64>,
}

/// A peak value and where it occurs
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Peak {
    /// Signed value at the peak
    pub value: f64,
    /// Position of the peak
    pub x: f64,
}

/// Largest-magnitude values of each diagram
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponseSummary {
    pub shear: Peak,
    pub moment: Peak,
    pub deflection: Peak,
}

impl BeamResponse {
    /// Number of samples in each diagram
    pub fn sample_count(&self) -> usize {
        self.x.len()
    }

    /// Locate the largest-magnitude shear, moment and deflection
    pub fn summary(&self) -> ResponseSummary {
        ResponseSummary {
            shear: peak(&self.x, &self.shear),
            moment: peak(&self.x, &self.moment),
            deflection: peak(&self.x, &self.deflection),
        }
    }
}

/// First sample with the largest absolute value
fn peak(x: &[f64], values: &[f64]) -> Peak {
    x.iter()
        .zip(values)
        .fold(Peak::default(), |best, (&xi, &v)| {
            if v.abs() > best.value.abs() {
                Peak { value: v, x: xi }
            } else {
                best
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response() -> BeamResponse {
        BeamResponse {
            reactions: Reactions { ra: 1.0, rb: 1.0, ma: 0.0 },
            x: vec![0.0, 1.0, 2.0, 3.0],
            shear: vec![1.0, 1.0, -1.0, -1.0],
            moment: vec![0.0, 1.0, 1.5, 0.0],
            deflection: vec![0.0, -0.2, -0.3, 0.0],
        }
    }

    #[test]
    fn test_summary_peaks() {
        let summary = response().summary();
        assert_eq!(summary.moment, Peak { value: 1.5, x: 2.0 });
        assert_eq!(summary.deflection, Peak { value: -0.3, x: 2.0 });
        // Ties keep the first occurrence
        assert_eq!(summary.shear, Peak { value: 1.0, x: 0.0 });
    }

    #[test]
    fn test_all_zero_summary() {
        let mut r = response();
        r.deflection = vec![0.0; 4];
        assert_eq!(r.summary().deflection, Peak::default());
    }

    #[test]
    fn test_json_keys() {
        let json = serde_json::to_value(response()).unwrap();
        for key in ["reactions", "x", "shear", "moment", "deflection"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["reactions"]["RA"], 1.0);
        assert_eq!(response().sample_count(), 4);
    }
}
