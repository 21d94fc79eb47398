//! Information Module: Information Quantity and Shannon Entropy
//!
//! ## Core Concepts
//!
//! ### Information Quantity
//!
//! An event of probability P carries
//!
//!   I(P) = -log₂ P   bits
//!
//! of information. Certain events (P = 1) carry none; rarer events carry
//! more; impossible events (P = 0) have no defined information.
//!
//! ### Additivity
//!
//! For independent events A and B, P(A∩B) = P(A)·P(B), so
//!
//!   I(A∩B) = I(A) + I(B)
//!
//! ### Shannon Entropy
//!
//! The expected information of a distribution {pᵢ}:
//!
//!   H = -Σᵢ pᵢ log₂ pᵢ
//!
//! with 0·log 0 taken as 0. H ranges from 0 (one certain outcome) to
//! log₂ n (uniform over n outcomes).

mod quantity;
mod joint;
mod entropy;
mod distribution;
mod curves;

pub use quantity::{
    Probability,
    Quantity,
    UndefinedCause,
    Precision,
    InformationResult,
    compute_information,
    compute_information_in,
    compute_information_with,
    UNDEFINED_MARKER,
};
pub use joint::{
    JointInformation,
    compute_joint,
    compute_joint_in,
    match_percentage,
    MATCH_TOLERANCE,
};
pub use entropy::{
    EntropyResult,
    compute_entropy,
    compute_entropy_in,
    binary_entropy,
    max_entropy,
};
pub use distribution::{
    ProbabilityDistribution,
    ValidationReport,
    validate,
    validate_with_tolerance,
    SUM_TOLERANCE,
};
pub use curves::{
    ContinuityProbe,
    RecordedPoints,
    information_curve,
    binary_entropy_curve,
};
