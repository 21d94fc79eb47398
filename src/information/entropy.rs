//! Shannon Entropy: Expected Information of a Distribution
//!
//! H = -Σᵢ pᵢ log(pᵢ)
//!
//! Zero-probability outcomes contribute exactly 0 by the convention
//! 0·log 0 = 0 (the limit of p log p as p → 0⁺); they are never passed
//! through the logarithm. Unnormalized input is computed as given.

use crate::math::{self, LogBase};

use super::distribution::ProbabilityDistribution;
use super::quantity::{Precision, Probability};

/// Shannon entropy with per-outcome breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct EntropyResult {
    /// H = Σ contributions
    pub entropy: f64,
    /// -pᵢ log(pᵢ) for each outcome, in order
    pub contributions: Vec<f64>,
    /// One derivation line per outcome, in order
    pub trace: Vec<String>,
    pub unit: LogBase,
    /// Display digits for the running total
    display_precision: usize,
}

impl EntropyResult {
    /// Compute entropy of a distribution in the given unit
    pub fn from_distribution(dist: &ProbabilityDistribution, base: LogBase, precision: Precision) -> Self {
        let sym = base.log_symbol();
        let mut entropy = 0.0;
        let mut contributions = Vec::with_capacity(dist.len());
        let mut trace = Vec::with_capacity(dist.len());

        for p in dist.iter() {
            let p = p.value();
            if p > 0.0 {
                let term = 0.0 - p * base.log(p);
                let ps = math::format(p, precision.trace);
                trace.push(format!(
                    "-{} × {}({}) = {}",
                    ps,
                    sym,
                    ps,
                    math::format(term, precision.trace)
                ));
                entropy += term;
                contributions.push(term);
            } else {
                trace.push(format!("0 × {}(0) := 0 (0·log 0 = 0 convention)", sym));
                contributions.push(0.0);
            }
        }

        Self {
            entropy,
            contributions,
            trace,
            unit: base,
            display_precision: precision.display,
        }
    }

    /// Number of outcomes
    pub fn n_outcomes(&self) -> usize {
        self.contributions.len()
    }

    /// Normalized entropy H / log(n) in [0, 1]
    ///
    /// 0 for a single outcome.
    pub fn efficiency(&self) -> f64 {
        let n = self.n_outcomes();
        if n > 1 {
            self.entropy / self.unit.log(n as f64)
        } else {
            0.0
        }
    }

    /// Trace lines joined, with the running total appended
    pub fn display(&self) -> String {
        let mut lines = self.trace.clone();
        lines.push(format!(
            "H = {} {}",
            math::format(self.entropy, self.display_precision),
            self.unit
        ));
        lines.join("\n")
    }
}

/// Entropy in bits, default precision
pub fn compute_entropy(dist: &ProbabilityDistribution) -> EntropyResult {
    EntropyResult::from_distribution(dist, LogBase::Bit, Precision::default())
}

/// Entropy in the given unit, default precision
pub fn compute_entropy_in(dist: &ProbabilityDistribution, base: LogBase) -> EntropyResult {
    EntropyResult::from_distribution(dist, base, Precision::default())
}

/// Binary entropy H(p) = -p log₂ p - (1-p) log₂(1-p)
///
/// The entropy of a biased coin; 1 bit at p = 0.5, 0 at p ∈ {0, 1}.
pub fn binary_entropy(p: f64) -> f64 {
    let p = Probability::new(p);
    let dist = ProbabilityDistribution::from_probabilities(&[p, p.complement()]);
    compute_entropy(&dist).entropy
}

/// Maximum entropy over `n` outcomes, log₂ n (uniform distribution)
pub fn max_entropy(n: usize) -> f64 {
    if n <= 1 {
        0.0
    } else {
        math::log_base2(n as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(raw: &[f64]) -> ProbabilityDistribution {
        ProbabilityDistribution::from_raw(raw)
    }

    #[test]
    fn test_entropy_fair_coin() {
        let h = compute_entropy(&dist(&[0.5, 0.5]));
        assert!((h.entropy - 1.0).abs() < 1e-12);
        assert!((h.efficiency() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_certain_outcome() {
        let h = compute_entropy(&dist(&[1.0, 0.0, 0.0, 0.0]));
        assert_eq!(h.entropy, 0.0);
        assert_eq!(h.contributions, vec![0.0; 4]);

        let h = compute_entropy(&dist(&[1.0, 0.0]));
        assert_eq!(h.entropy, 0.0);
        assert!(!h.entropy.is_nan());
    }

    #[test]
    fn test_entropy_uniform() {
        // Uniform over 8 outcomes has entropy log₂8 = 3
        let h = compute_entropy(&ProbabilityDistribution::uniform(8));
        assert!((h.entropy - 3.0).abs() < 1e-12);
        assert!((h.entropy - max_entropy(8)).abs() < 1e-12);
    }

    #[test]
    fn test_zero_entry_uses_convention() {
        let h = compute_entropy(&dist(&[0.5, 0.0, 0.5]));
        assert_eq!(h.contributions[1], 0.0);
        assert!(h.trace[1].contains("convention"));
        assert_eq!(h.trace[0], "-0.500000 × log2(0.500000) = 0.500000");
    }

    #[test]
    fn test_display_appends_total() {
        let h = compute_entropy(&dist(&[0.5, 0.5]));
        let text = h.display();
        assert_eq!(text.lines().count(), 3);
        assert!(text.ends_with("H = 1.0000 bit"));
    }

    #[test]
    fn test_unnormalized_input_still_computes() {
        let h = compute_entropy(&dist(&[0.5, 0.4]));
        let expected = 0.5 + -(0.4 * 0.4f64.log2());
        assert!((h.entropy - expected).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_in_nats() {
        let h = compute_entropy_in(&dist(&[0.5, 0.5]), LogBase::Nat);
        assert!((h.entropy - std::f64::consts::LN_2).abs() < 1e-12);
        assert!(h.display().ends_with("nat"));
    }

    #[test]
    fn test_binary_entropy() {
        assert!((binary_entropy(0.5) - 1.0).abs() < 1e-12);
        assert_eq!(binary_entropy(0.0), 0.0);
        assert_eq!(binary_entropy(1.0), 0.0);
        assert!((binary_entropy(0.1) - binary_entropy(0.9)).abs() < 1e-12);
    }

    #[test]
    fn test_single_outcome_efficiency() {
        let h = compute_entropy(&dist(&[1.0]));
        assert_eq!(h.efficiency(), 0.0);
        assert_eq!(max_entropy(1), 0.0);
    }
}
