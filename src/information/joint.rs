//! Joint Information: Additivity for Independent Events
//!
//! For independent events A and B:
//!
//!   P(A∩B) = P(A)·P(B)
//!   I(A∩B) = -log(P(A)·P(B)) = I(A) + I(B)
//!
//! Both sides are computed independently and returned for comparison.
//! Independence is a modelling assumption and is not checked.

use crate::math::{self, LogBase};

use super::quantity::{Precision, Probability, Quantity, UndefinedCause};

/// Values below this absolute difference count as a perfect match
pub const MATCH_TOLERANCE: f64 = 0.001;

/// Joint information of two independent events
#[derive(Debug, Clone, PartialEq)]
pub struct JointInformation {
    /// Sanitized P(A), `None` for non-finite input
    pub pa: Option<Probability>,
    /// Sanitized P(B), `None` for non-finite input
    pub pb: Option<Probability>,
    /// P(A∩B) = P(A)·P(B)
    pub pab: Option<Probability>,
    pub ia: Quantity,
    pub ib: Quantity,
    pub iab: Quantity,
    /// I(A) + I(B)
    pub sum: Quantity,
    pub unit: LogBase,
}

impl JointInformation {
    /// |I(A∩B) - (I(A) + I(B))|, if both sides are defined
    pub fn difference(&self) -> Option<f64> {
        Some((self.iab.value()? - self.sum.value()?).abs())
    }

    /// Agreement of I(A∩B) with I(A) + I(B) as a percentage
    pub fn match_percentage(&self) -> Option<f64> {
        match_percentage(self.iab, self.sum)
    }

    /// Human-readable derivation
    pub fn trace(&self, precision: Precision) -> Vec<String> {
        let p = |x: Option<Probability>| match x {
            Some(x) => math::format(x.value(), precision.trace),
            None => math::PLACEHOLDER.to_string(),
        };
        let d = precision.display;
        vec![
            format!("P(A∩B) = {} × {} = {}", p(self.pa), p(self.pb), p(self.pab)),
            format!(
                "I(A) + I(B) = {} + {} = {} {}",
                self.ia.display(d),
                self.ib.display(d),
                self.sum.display(d),
                self.unit
            ),
            format!("I(A∩B) = {} {}", self.iab.display(d), self.unit),
        ]
    }
}

/// Joint information in bits
pub fn compute_joint(pa: f64, pb: f64) -> JointInformation {
    compute_joint_in(pa, pb, LogBase::Bit)
}

/// Joint information in the given unit
pub fn compute_joint_in(pa: f64, pb: f64, base: LogBase) -> JointInformation {
    let pa = Probability::try_new(pa);
    let pb = Probability::try_new(pb);
    let pab = pa.zip(pb).map(|(a, b)| a.and(b));

    let info = |p: Option<Probability>| match p {
        Some(p) => p.information(base),
        None => Quantity::Undefined(UndefinedCause::InvalidInput),
    };

    let ia = info(pa);
    let ib = info(pb);

    JointInformation {
        pa,
        pb,
        pab,
        ia,
        ib,
        iab: info(pab),
        sum: ia + ib,
        unit: base,
    }
}

/// Agreement between two quantities as a percentage
///
/// 100 when |a - b| < 0.001, otherwise 100 - |a - b|·100 floored at 0.
/// `None` if either side is undefined.
pub fn match_percentage(a: Quantity, b: Quantity) -> Option<f64> {
    let diff = (a.value()? - b.value()?).abs();
    if diff < MATCH_TOLERANCE {
        Some(100.0)
    } else {
        Some((100.0 - diff * 100.0).max(0.0))
    }
}
