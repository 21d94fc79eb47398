//! Math Module: Shared Numeric Primitives
//!
//! Everything the calculators need below the formula level:
//!
//! - Clamping of raw values into the probability domain
//! - log₂ via ln(x)/ln(2) with standard real-logarithm semantics
//! - Fixed-decimal formatting with a placeholder for NaN / ±∞
//! - The closed set of information units (bit, nat, dit)

mod numeric;
mod units;

pub use numeric::{
    clamp,
    log_base2,
    format,
    format_default,
    PLACEHOLDER,
    DISPLAY_PRECISION,
    TRACE_PRECISION,
};
pub use units::{LogBase, select_base};
