//! Load model
//!
//! The closed set of loads a beam can carry. Each variant is tagged on the
//! wire with the short code the request format uses:
//!
//! | Variant       | Tag      | Fields               |
//! |---------------|----------|----------------------|
//! | `Point`       | `point`  | `P`, `x`             |
//! | `Distributed` | `udl`    | `w`, `x1`, `x2`      |
//! | `Moment`      | `moment` | `M`, `x`             |
//! | `Trapezoidal` | `uvl`    | `w1`, `w2`, `x1`, `x2` |
//!
//! Positions are measured from the left end of the beam. Forces are positive
//! in the load direction; the engine subtracts them from the reaction-driven
//! shear and moment.
//!
//! # Example
//!
//! ```
//! use beam_core::loads::Load;
//!
//! let load: Load = serde_json::from_str(r#"{ "type": "udl", "w": 2000.0, "x1": 0.0, "x2": 4.0 }"#).unwrap();
//! assert_eq!(load, Load::udl(2000.0, 0.0, 4.0));
//!
//! let resultant = load.static_resultant().unwrap();
//! assert_eq!(resultant.force, 8000.0);
//! assert_eq!(resultant.moment, 16000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A single load applied to the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Load {
    /// Concentrated force `p` at position `x`
    #[serde(rename = "point")]
    Point {
        #[serde(rename = "P")]
        p: f64,
        x: f64,
    },

    /// Uniform intensity `w` over `[x1, x2]`
    #[serde(rename = "udl")]
    Distributed { w: f64, x1: f64, x2: f64 },

    /// Applied couple `m` at position `x`
    #[serde(rename = "moment")]
    Moment {
        #[serde(rename = "M")]
        m: f64,
        x: f64,
    },

    /// Intensity varying linearly from `w1` at `x1` to `w2` at `x2`
    #[serde(rename = "uvl")]
    Trapezoidal { w1: f64, w2: f64, x1: f64, x2: f64 },
}

/// Force and moment (about x = 0) a load contributes to support equilibrium
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StaticResultant {
    pub force: f64,
    pub moment: f64,
}

impl Load {
    /// Create a point load
    pub fn point(p: f64, x: f64) -> Self {
        Load::Point { p, x }
    }

    /// Create a uniform distributed load
    pub fn udl(w: f64, x1: f64, x2: f64) -> Self {
        Load::Distributed { w, x1, x2 }
    }

    /// Create an applied moment
    pub fn moment(m: f64, x: f64) -> Self {
        Load::Moment { m, x }
    }

    /// Create a trapezoidal (linearly varying) load
    pub fn uvl(w1: f64, w2: f64, x1: f64, x2: f64) -> Self {
        Load::Trapezoidal { w1, w2, x1, x2 }
    }

    /// Wire tag for this load
    pub fn tag(&self) -> &'static str {
        match self {
            Load::Point { .. } => "point",
            Load::Distributed { .. } => "udl",
            Load::Moment { .. } => "moment",
            Load::Trapezoidal { .. } => "uvl",
        }
    }

    /// Get display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Load::Point { .. } => "Point",
            Load::Distributed { .. } => "Uniform",
            Load::Moment { .. } => "Moment",
            Load::Trapezoidal { .. } => "Trapezoidal",
        }
    }

    /// Contribution to the reaction equilibrium sums.
    ///
    /// Trapezoidal loads return `None`: they shape the internal force
    /// diagrams but are not part of the reaction sums.
    pub fn static_resultant(&self) -> Option<StaticResultant> {
        match *self {
            Load::Point { p, x } => Some(StaticResultant {
                force: p,
                moment: p * x,
            }),
            Load::Distributed { w, x1, x2 } => {
                let total = w * (x2 - x1);
                let centroid = 0.5 * (x1 + x2);
                Some(StaticResultant {
                    force: total,
                    moment: total * centroid,
                })
            }
            Load::Moment { m, .. } => Some(StaticResultant {
                force: 0.0,
                moment: m,
            }),
            Load::Trapezoidal { .. } => None,
        }
    }

    /// Validate the load against a span of `length`.
    ///
    /// `index` is the load's position in the request and only feeds the
    /// error's field name.
    pub fn validate(&self, index: usize, length: f64) -> CalcResult<()> {
        let field = |name: &str| format!("loads[{}].{}", index, name);

        let finite = |name: &str, value: f64| -> CalcResult<()> {
            if value.is_finite() {
                Ok(())
            } else {
                Err(CalcError::invalid_input(
                    field(name),
                    value.to_string(),
                    "Value must be a finite number",
                ))
            }
        };

        let on_beam = |name: &str, value: f64| -> CalcResult<()> {
            finite(name, value)?;
            if value < 0.0 || value > length {
                return Err(CalcError::invalid_input(
                    field(name),
                    value.to_string(),
                    format!("Position must lie within [0, {}]", length),
                ));
            }
            Ok(())
        };

        let ordered = |x1: f64, x2: f64| -> CalcResult<()> {
            if x1 >= x2 {
                return Err(CalcError::invalid_input(
                    field("x2"),
                    x2.to_string(),
                    format!("End position must be greater than start position {}", x1),
                ));
            }
            Ok(())
        };

        match *self {
            Load::Point { p, x } => {
                finite("P", p)?;
                on_beam("x", x)
            }
            Load::Distributed { w, x1, x2 } => {
                finite("w", w)?;
                on_beam("x1", x1)?;
                on_beam("x2", x2)?;
                ordered(x1, x2)
            }
            Load::Moment { m, x } => {
                finite("M", m)?;
                on_beam("x", x)
            }
            Load::Trapezoidal { w1, w2, x1, x2 } => {
                finite("w1", w1)?;
                finite("w2", w2)?;
                on_beam("x1", x1)?;
                on_beam("x2", x2)?;
                ordered(x1, x2)
            }
        }
    }
}

impl std::fmt::Display for Load {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ", self.display_name())?;
        match *self {
            Load::Point { p, x } => write!(f, "P={} at x={}", p, x),
            Load::Distributed { w, x1, x2 } => write!(f, "w={} over [{}, {}]", w, x1, x2),
            Load::Moment { m, x } => write!(f, "M={} at x={}", m, x),
            Load::Trapezoidal { w1, w2, x1, x2 } => {
                write!(f, "w={}..{} over [{}, {}]", w1, w2, x1, x2)
            }
        }
    }
}
