//! Numeric primitives shared by every calculator
//!
//! Clamping, the base-2 logarithm and fixed-decimal formatting with a
//! placeholder for values that cannot be displayed.

/// Placeholder shown for NaN / infinite values
pub const PLACEHOLDER: &str = "—";

/// Default number of fractional digits for displayed values
pub const DISPLAY_PRECISION: usize = 4;

/// Default number of fractional digits inside derivation traces
pub const TRACE_PRECISION: usize = 6;

/// Clamp `value` into `[lo, hi]`
///
/// NaN compares false against both bounds and is returned unchanged;
/// callers filter non-finite input before clamping.
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Base-2 logarithm computed as ln(x) / ln(2)
///
/// log₂(0) = -∞, log₂(x < 0) = NaN
pub fn log_base2(x: f64) -> f64 {
    x.ln() / std::f64::consts::LN_2
}

/// Format `x` with `decimals` fractional digits, or [`PLACEHOLDER`]
pub fn format(x: f64, decimals: usize) -> String {
    if x.is_finite() {
        format!("{:.*}", decimals, x)
    } else {
        PLACEHOLDER.to_string()
    }
}

/// Format with [`DISPLAY_PRECISION`] digits
pub fn format_default(x: f64) -> String {
    format(x, DISPLAY_PRECISION)
}
