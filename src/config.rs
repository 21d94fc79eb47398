//! Calculation settings
//!
//! Display precision, normalization tolerance, the default unit and the
//! graph resolution. Loadable from JSON; every field has a default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::information::{Precision, SUM_TOLERANCE};
use crate::math::{LogBase, DISPLAY_PRECISION, TRACE_PRECISION};

/// More digits than this exceed f64 precision
const MAX_PRECISION: usize = 12;

/// Settings shared by the calculators and the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Fractional digits for final values
    pub display_precision: usize,
    /// Fractional digits inside derivation traces
    pub trace_precision: usize,
    /// Allowed |Σp - 1| before a distribution is flagged
    pub tolerance: f64,
    /// Unit used when none is given
    pub unit: LogBase,
    /// Points per graph series
    pub curve_samples: usize,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            display_precision: DISPLAY_PRECISION,
            trace_precision: TRACE_PRECISION,
            tolerance: SUM_TOLERANCE,
            unit: LogBase::Bit,
            curve_samples: 100,
        }
    }
}

impl CalcConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.display_precision > MAX_PRECISION || self.trace_precision > MAX_PRECISION {
            return Err(Error::InvalidConfig(format!(
                "precision must be at most {} digits",
                MAX_PRECISION
            )));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.curve_samples < 2 {
            return Err(Error::InvalidConfig(
                "curve_samples must be at least 2".to_string(),
            ));
        }
        Ok(())
    }

    pub fn precision(&self) -> Precision {
        Precision {
            trace: self.trace_precision,
            display: self.display_precision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CalcConfig::default();
        assert_eq!(config.precision(), Precision::default());
        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.unit, LogBase::Bit);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = CalcConfig::from_json_str(r#"{ "unit": "nat", "display_precision": 2 }"#).unwrap();
        assert_eq!(config.unit, LogBase::Nat);
        assert_eq!(config.display_precision, 2);
        assert_eq!(config.trace_precision, TRACE_PRECISION);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            CalcConfig::from_json_str(r#"{ "tolerance": 0.0 }"#),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            CalcConfig::from_json_str(r#"{ "trace_precision": 40 }"#),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            CalcConfig::from_json_str(r#"{ "curve_samples": 1 }"#),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            CalcConfig::from_json_str(r#"{ "unit": "furlong" }"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "unit": "dit", "curve_samples": 20 }}"#).unwrap();

        let config = CalcConfig::load(file.path()).unwrap();
        assert_eq!(config.unit, LogBase::Dit);
        assert_eq!(config.curve_samples, 20);

        assert!(matches!(
            CalcConfig::load("/nonexistent/infoq.json"),
            Err(Error::Io(_))
        ));
    }
}
