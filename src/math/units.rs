//! Information units: bit, nat and dit
//!
//! Each unit is a logarithm base. The same formula I = -log_b(P) yields
//! bits for b = 2, nats for b = e and dits (hartleys) for b = 10.
//!
//! | Unit | Base | 1 unit in bits |
//! |------|------|----------------|
//! | bit  | 2    | 1              |
//! | nat  | e    | 1/ln 2 ≈ 1.4427|
//! | dit  | 10   | log₂10 ≈ 3.3219|

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::numeric::log_base2;
use crate::error::Error;

/// Logarithm base selecting the information unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogBase {
    /// Base 2
    #[default]
    Bit,
    /// Base e
    Nat,
    /// Base 10
    Dit,
}

impl LogBase {
    /// Every unit, in display order
    pub const ALL: [LogBase; 3] = [LogBase::Bit, LogBase::Nat, LogBase::Dit];

    /// Numeric base of the logarithm
    pub fn base(self) -> f64 {
        match self {
            LogBase::Bit => 2.0,
            LogBase::Nat => std::f64::consts::E,
            LogBase::Dit => 10.0,
        }
    }

    /// Unit label used in traces and tables
    pub fn label(self) -> &'static str {
        match self {
            LogBase::Bit => "bit",
            LogBase::Nat => "nat",
            LogBase::Dit => "dit",
        }
    }

    /// Name of the logarithm as written in formulas
    pub fn log_symbol(self) -> &'static str {
        match self {
            LogBase::Bit => "log2",
            LogBase::Nat => "ln",
            LogBase::Dit => "log10",
        }
    }

    /// The logarithm function for this base
    pub fn log_fn(self) -> fn(f64) -> f64 {
        match self {
            LogBase::Bit => log_base2,
            LogBase::Nat => f64::ln,
            LogBase::Dit => f64::log10,
        }
    }

    /// Logarithm of `x` in this base (same domain semantics as `ln`)
    pub fn log(self, x: f64) -> f64 {
        (self.log_fn())(x)
    }

    /// Re-express a quantity measured in `self` units in `to` units
    ///
    /// x [b₁] = x · ln(b₁) / ln(b₂) [b₂]
    pub fn convert(self, value: f64, to: LogBase) -> f64 {
        if self == to {
            return value;
        }
        value * self.base().ln() / to.base().ln()
    }
}

impl fmt::Display for LogBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LogBase {
    type Err = Error;

    /// Strict parse; unknown names are an error
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bit" | "bits" | "2" => Ok(LogBase::Bit),
            "nat" | "nats" | "e" => Ok(LogBase::Nat),
            "dit" | "dits" | "hartley" | "10" => Ok(LogBase::Dit),
            _ => Err(Error::UnknownUnit(s.to_string())),
        }
    }
}

/// Select a unit from a UI selector string
///
/// Unknown selectors fall back to [`LogBase::Bit`].
pub fn select_base(unit: &str) -> LogBase {
    unit.parse().unwrap_or_else(|_| {
        debug!(unit, "unknown unit selector, falling back to bit");
        LogBase::Bit
    })
}
