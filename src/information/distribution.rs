//! Discrete Probability Distributions and Normalization Checks
//!
//! A distribution is an ordered list of sanitized probabilities for the
//! mutually exclusive outcomes of one experiment. It should sum to 1, but
//! the check is advisory: calculations always run on the values as given,
//! so a learner can observe what an unnormalized input does.

use ndarray::Array1;
use rand::Rng;
use rand_distr::{Distribution, Gamma};
use tracing::warn;

use crate::error::{Error, Result};

use super::quantity::Probability;

/// Absolute tolerance on |Σp - 1|
pub const SUM_TOLERANCE: f64 = 1e-6;

/// Ordered probabilities of one experiment's outcomes
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityDistribution {
    probs: Array1<f64>,
}

impl ProbabilityDistribution {
    /// Build from raw values, sanitizing each entry
    pub fn from_raw(raw: &[f64]) -> Self {
        let probs = Array1::from_iter(raw.iter().map(|&x| Probability::new(x).value()));
        Self { probs }
    }

    pub fn from_probabilities(probs: &[Probability]) -> Self {
        Self {
            probs: Array1::from_iter(probs.iter().map(|p| p.value())),
        }
    }

    /// Parse a comma- or whitespace-separated list, e.g. "0.5, 0.25, 0.25"
    pub fn parse(text: &str) -> Result<Self> {
        let probs = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(Probability::parse)
            .collect::<Result<Vec<_>>>()?;

        if probs.is_empty() {
            return Err(Error::EmptyDistribution);
        }
        Ok(Self::from_probabilities(&probs))
    }

    /// Uniform distribution over `n` outcomes
    pub fn uniform(n: usize) -> Self {
        if n == 0 {
            return Self { probs: Array1::zeros(0) };
        }
        Self {
            probs: Array1::from_elem(n, 1.0 / n as f64),
        }
    }

    /// Random distribution over `k` outcomes drawn from Dirichlet(α, …, α)
    ///
    /// Sampled as normalized Gamma(α, 1) variates. α = 1 is uniform over
    /// the simplex, small α favours peaked distributions.
    pub fn random<R: Rng + ?Sized>(k: usize, alpha: f64, rng: &mut R) -> Result<Self> {
        if k == 0 {
            return Err(Error::EmptyDistribution);
        }
        if !alpha.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "Dirichlet alpha must be finite, got {}",
                alpha
            )));
        }
        let gamma = Gamma::new(alpha, 1.0)
            .map_err(|e| Error::InvalidConfig(format!("Dirichlet alpha {}: {}", alpha, e)))?;

        let draws = Array1::from_iter((0..k).map(|_| gamma.sample(&mut *rng)));
        let total = draws.sum();
        if !(total.is_finite() && total > 0.0) {
            // Every draw underflowed or overflowed; fall back to uniform
            return Ok(Self::uniform(k));
        }
        Ok(Self { probs: draws / total })
    }

    pub fn len(&self) -> usize {
        self.probs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    pub fn as_array(&self) -> &Array1<f64> {
        &self.probs
    }

    pub fn iter(&self) -> impl Iterator<Item = Probability> + '_ {
        // Entries are already sanitized
        self.probs.iter().map(|&p| Probability::new(p))
    }

    pub fn sum(&self) -> f64 {
        self.probs.sum()
    }

    pub fn validate(&self) -> ValidationReport {
        validate_with_tolerance(self, SUM_TOLERANCE)
    }
}

/// Outcome of the normalization check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationReport {
    /// Σp over all entries
    pub sum: f64,
    /// |Σp - 1| ≤ tolerance
    pub within_tolerance: bool,
    /// |Σp - 1|
    pub deviation: f64,
}

/// Check that a distribution sums to 1 within [`SUM_TOLERANCE`]
pub fn validate(dist: &ProbabilityDistribution) -> ValidationReport {
    dist.validate()
}

/// Check that a distribution sums to 1 within `tolerance`
pub fn validate_with_tolerance(dist: &ProbabilityDistribution, tolerance: f64) -> ValidationReport {
    let sum = dist.sum();
    let deviation = (sum - 1.0).abs();
    let within_tolerance = deviation <= tolerance;

    if !within_tolerance {
        warn!(sum, deviation, "probability distribution does not sum to 1");
    }

    ValidationReport {
        sum,
        within_tolerance,
        deviation,
    }
}
