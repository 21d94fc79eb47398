//! # info-quantity
//!
//! Information Quantity and Shannon Entropy for Interactive Teaching Tools
//!
//! ## Theoretical Framework
//!
//! An event of probability P carries I = -log₂ P bits of information.
//! The expected information of a distribution is its Shannon entropy
//!
//!   H = -Σᵢ pᵢ log₂ pᵢ
//!
//! and for independent events information adds: I(A∩B) = I(A) + I(B).
//!
//! ## Architecture
//!
//! ```text
//! raw input ──► sanitize (Probability) ──► calculator ──► value + trace
//!                      │
//!                      └─ math: clamp, log₂, format, units
//! ```
//!
//! Every calculator is a pure function. Invalid input and the log of zero
//! become an explicit [`Quantity::Undefined`] value, never a panic;
//! `Result` only appears where text or configuration files are parsed.
//!
//! ## Units
//!
//! The same formulas are available in bits (log₂), nats (ln) and dits
//! (log₁₀) through [`LogBase`].

pub mod error;
pub mod config;
pub mod math;
pub mod information;
pub mod password;
pub mod quiz;

pub use error::{Error, Result};
pub use config::CalcConfig;

// Re-exports from math
pub use math::{
    clamp,
    log_base2,
    format,
    LogBase,
    select_base,
    PLACEHOLDER,
};

// Re-exports from information
pub use information::{
    // Single events
    Probability,
    Quantity,
    UndefinedCause,
    Precision,
    InformationResult,
    compute_information,
    compute_information_in,
    compute_information_with,
    // Additivity
    JointInformation,
    compute_joint,
    compute_joint_in,
    match_percentage,
    // Entropy
    EntropyResult,
    compute_entropy,
    compute_entropy_in,
    binary_entropy,
    max_entropy,
    // Distributions
    ProbabilityDistribution,
    ValidationReport,
    validate,
    // Graph series
    ContinuityProbe,
    RecordedPoints,
    information_curve,
    binary_entropy_curve,
};

// Re-exports from password / quiz
pub use password::{analyze as analyze_password, PasswordEntropy, Strength};
pub use quiz::{QuestionKind, QuizQuestion, QuizScore};
