//! Information Quantity: Surprise of a Single Event
//!
//! I(P) = -log_b(P)
//!
//! Raw inputs go through an explicit sanitize step before any logarithm
//! is taken: non-finite values are rejected as invalid input and finite
//! values are clamped into [0, 1]. After that the domain policy is:
//!
//! - P = 0      → undefined (an impossible event)
//! - P ∈ (0, 1] → -log_b(P) ≥ 0, exactly 0 for a certain event

use std::fmt;
use std::ops::Add;

use tracing::debug;

use crate::error::{Error, Result};
use crate::math::{self, clamp, LogBase, DISPLAY_PRECISION, TRACE_PRECISION};

/// Marker string shown for undefined quantities
pub const UNDEFINED_MARKER: &str = "undefined";

/// A probability in [0, 1]
///
/// Only constructed through sanitization, so the range invariant always holds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Probability(f64);

impl Probability {
    pub const ZERO: Probability = Probability(0.0);
    pub const ONE: Probability = Probability(1.0);

    /// Sanitize a raw value: `None` for NaN / ±∞, otherwise clamped to [0, 1]
    pub fn try_new(raw: f64) -> Option<Self> {
        if !raw.is_finite() {
            debug!(raw, "non-finite probability input");
            return None;
        }
        let p = clamp(raw, 0.0, 1.0);
        if p != raw {
            debug!(raw, clamped = p, "probability clamped into [0, 1]");
        }
        // -0.0 normalizes to 0.0
        Some(Probability(p + 0.0))
    }

    /// Sanitize a raw value, treating non-finite input as 0
    pub fn new(raw: f64) -> Self {
        Self::try_new(raw).unwrap_or(Self::ZERO)
    }

    /// Parse raw text input (e.g. a form field) into a probability
    ///
    /// Text that is not a finite number is an error; finite numbers are clamped.
    pub fn parse(text: &str) -> Result<Self> {
        let raw: f64 = text
            .trim()
            .parse()
            .map_err(|_| Error::InvalidNumber(text.to_string()))?;
        Self::try_new(raw).ok_or_else(|| Error::InvalidNumber(text.to_string()))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Complementary probability 1 - P
    pub fn complement(self) -> Self {
        Probability::new(1.0 - self.0)
    }

    /// Probability of both events, assuming independence
    pub fn and(self, other: Probability) -> Self {
        Probability::new(self.0 * other.0)
    }

    /// Information quantity of this probability in the given unit
    pub fn information(self, base: LogBase) -> Quantity {
        if self.0 == 0.0 {
            return Quantity::Undefined(UndefinedCause::ZeroProbability);
        }
        // 0.0 - x keeps the certain-event case at +0.0
        Quantity::Defined(0.0 - base.log(self.0))
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a quantity has no numeric value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndefinedCause {
    /// Raw input was NaN or infinite
    InvalidInput,
    /// log of zero (impossible event)
    ZeroProbability,
}

impl UndefinedCause {
    pub fn description(self) -> &'static str {
        match self {
            UndefinedCause::InvalidInput => "input is not a finite number",
            UndefinedCause::ZeroProbability => "impossible event (P = 0)",
        }
    }
}

/// A computed value that is either a finite non-negative number or undefined
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantity {
    Defined(f64),
    Undefined(UndefinedCause),
}

impl Quantity {
    /// Quantity for a raw probability input, in the given unit
    pub fn of_raw(raw: f64, base: LogBase) -> Self {
        match Probability::try_new(raw) {
            Some(p) => p.information(base),
            None => Quantity::Undefined(UndefinedCause::InvalidInput),
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Quantity::Defined(v) => Some(v),
            Quantity::Undefined(_) => None,
        }
    }

    /// Numeric value, NaN when undefined
    pub fn as_f64(self) -> f64 {
        self.value().unwrap_or(f64::NAN)
    }

    pub fn is_defined(self) -> bool {
        matches!(self, Quantity::Defined(_))
    }

    /// Re-express a defined quantity in another unit
    pub fn convert(self, from: LogBase, to: LogBase) -> Self {
        match self {
            Quantity::Defined(v) => Quantity::Defined(from.convert(v, to)),
            undefined => undefined,
        }
    }

    /// Fixed-decimal text, or [`UNDEFINED_MARKER`]
    pub fn display(self, decimals: usize) -> String {
        match self {
            Quantity::Defined(v) => math::format(v, decimals),
            Quantity::Undefined(_) => UNDEFINED_MARKER.to_string(),
        }
    }
}

impl Add for Quantity {
    type Output = Quantity;

    /// Undefined absorbs: any undefined operand yields undefined
    fn add(self, rhs: Quantity) -> Quantity {
        match (self, rhs) {
            (Quantity::Defined(a), Quantity::Defined(b)) => Quantity::Defined(a + b),
            (Quantity::Undefined(cause), _) | (_, Quantity::Undefined(cause)) => {
                Quantity::Undefined(cause)
            }
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Defined(v) => f.write_str(&math::format_default(*v)),
            Quantity::Undefined(_) => f.write_str(UNDEFINED_MARKER),
        }
    }
}

/// Fractional digits used in traces and in final values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    /// Digits for substituted values inside derivations
    pub trace: usize,
    /// Digits for final displayed values
    pub display: usize,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            trace: TRACE_PRECISION,
            display: DISPLAY_PRECISION,
        }
    }
}

/// Result of a single information-quantity computation
#[derive(Debug, Clone, PartialEq)]
pub struct InformationResult {
    /// Sanitized input, `None` if the raw input was not finite
    pub probability: Option<Probability>,
    /// I(P) in `unit`
    pub value: Quantity,
    pub unit: LogBase,
    /// Human-readable derivation, in order
    pub trace: Vec<String>,
}

impl InformationResult {
    /// Final value with unit, e.g. "1.0000 bit", or the undefined marker
    pub fn display(&self, decimals: usize) -> String {
        match self.value {
            Quantity::Defined(v) => format!("{} {}", math::format(v, decimals), self.unit),
            Quantity::Undefined(_) => UNDEFINED_MARKER.to_string(),
        }
    }
}

/// Information quantity of `p` in bits, default precision
pub fn compute_information(p: f64) -> InformationResult {
    compute_information_with(p, LogBase::Bit, Precision::default())
}

/// Information quantity of `p` in the given unit, default precision
pub fn compute_information_in(p: f64, base: LogBase) -> InformationResult {
    compute_information_with(p, base, Precision::default())
}

/// Information quantity of `p` with explicit unit and precision
///
/// Total: every input produces a result, undefined values are markers.
pub fn compute_information_with(p: f64, base: LogBase, precision: Precision) -> InformationResult {
    let sym = base.log_symbol();
    let mut trace = vec![format!("I = -{}(P)", sym)];

    let Some(prob) = Probability::try_new(p) else {
        trace.push("P is not a finite number ⇒ I undefined.".to_string());
        return InformationResult {
            probability: None,
            value: Quantity::Undefined(UndefinedCause::InvalidInput),
            unit: base,
            trace,
        };
    };

    let value = prob.information(base);
    match value {
        Quantity::Defined(v) => {
            trace.push(format!(
                "I = -{}({})",
                sym,
                math::format(prob.value(), precision.trace)
            ));
            trace.push(format!("I = {} {}", math::format(v, precision.display), base));
        }
        Quantity::Undefined(_) => {
            trace.push(zero_probability_note(base).to_string());
        }
    }

    InformationResult {
        probability: Some(prob),
        value,
        unit: base,
        trace,
    }
}

fn zero_probability_note(base: LogBase) -> &'static str {
    match base {
        LogBase::Bit => "P=0 ⇒ log₂0 undefined.",
        LogBase::Nat => "P=0 ⇒ ln 0 undefined.",
        LogBase::Dit => "P=0 ⇒ log₁₀0 undefined.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_is_one_bit() {
        let r = compute_information(0.5);
        assert!((r.value.as_f64() - 1.0).abs() < 1e-12);
        assert_eq!(r.display(4), "1.0000 bit");
    }

    #[test]
    fn test_certain_event_carries_zero_information() {
        let r = compute_information(1.0);
        let v = r.value.value().unwrap();
        assert_eq!(v, 0.0);
        assert!(v.is_sign_positive());
    }

    #[test]
    fn test_zero_is_undefined() {
        let r = compute_information(0.0);
        assert_eq!(r.value, Quantity::Undefined(UndefinedCause::ZeroProbability));
        assert_eq!(r.display(4), UNDEFINED_MARKER);
        assert_eq!(r.trace.last().unwrap(), "P=0 ⇒ log₂0 undefined.");
    }

    #[test]
    fn test_non_finite_is_invalid_input() {
        for raw in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let r = compute_information(raw);
            assert_eq!(r.value, Quantity::Undefined(UndefinedCause::InvalidInput));
            assert!(r.probability.is_none());
        }
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(compute_information(1.7), compute_information(1.0));
        assert_eq!(compute_information(-0.3), compute_information(0.0));
    }

    #[test]
    fn test_trace_substitutes_values() {
        let r = compute_information(0.25);
        assert_eq!(
            r.trace,
            vec![
                "I = -log2(P)".to_string(),
                "I = -log2(0.250000)".to_string(),
                "I = 2.0000 bit".to_string(),
            ]
        );
    }

    #[test]
    fn test_custom_precision() {
        let r = compute_information_with(0.3, LogBase::Bit, Precision { trace: 2, display: 3 });
        assert_eq!(r.trace[1], "I = -log2(0.30)");
        assert_eq!(r.trace[2], "I = 1.737 bit");
    }

    #[test]
    fn test_other_units() {
        let nat = compute_information_in(1.0 / std::f64::consts::E, LogBase::Nat);
        assert!((nat.value.as_f64() - 1.0).abs() < 1e-12);
        assert_eq!(nat.trace[0], "I = -ln(P)");

        let dit = compute_information_in(0.1, LogBase::Dit);
        assert!((dit.value.as_f64() - 1.0).abs() < 1e-12);

        let zero = compute_information_in(0.0, LogBase::Nat);
        assert_eq!(zero.trace.last().unwrap(), "P=0 ⇒ ln 0 undefined.");
    }

    #[test]
    fn test_quantity_addition_propagates_undefined() {
        let one = Quantity::Defined(1.0);
        let undef = Quantity::Undefined(UndefinedCause::ZeroProbability);
        assert_eq!(one + one, Quantity::Defined(2.0));
        assert!(one.is_defined() && !undef.is_defined());
        assert_eq!(one + undef, undef);
        assert_eq!(undef + one, undef);
        assert!((one + undef).as_f64().is_nan());
    }

    #[test]
    fn test_probability_parse() {
        assert_eq!(Probability::parse(" 0.25 ").unwrap().value(), 0.25);
        assert_eq!(Probability::parse("3").unwrap(), Probability::ONE);
        assert!(Probability::parse("abc").is_err());
        assert!(Probability::parse("NaN").is_err());
        assert!(Probability::parse("inf").is_err());
    }

    #[test]
    fn test_probability_new_treats_nan_as_zero() {
        assert_eq!(Probability::new(f64::NAN), Probability::ZERO);
        assert_eq!(Probability::new(-0.0).value().to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn test_quantity_convert() {
        let bits = compute_information(0.5).value;
        let nats = bits.convert(LogBase::Bit, LogBase::Nat);
        let direct = compute_information_in(0.5, LogBase::Nat).value;
        assert!((nats.as_f64() - direct.as_f64()).abs() < 1e-12);

        let undef = Quantity::Undefined(UndefinedCause::ZeroProbability);
        assert_eq!(undef.convert(LogBase::Bit, LogBase::Dit), undef);
        assert_eq!(undef.to_string(), UNDEFINED_MARKER);
        assert_eq!(Quantity::Defined(2.0).to_string(), "2.0000");
        assert!(UndefinedCause::ZeroProbability.description().contains("P = 0"));
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(compute_information(0.37), compute_information(0.37));
    }
}
