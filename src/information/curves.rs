//! Curves: Point Series for the Information and Entropy Graphs
//!
//! Samples I(p) and H(p) on a regular grid over the probability axis.
//! The series are plain (x, y) pairs; drawing them is up to the caller.

use crate::math::LogBase;

use super::entropy::binary_entropy;
use super::joint::match_percentage;
use super::quantity::{Probability, Quantity};

/// I(p) in `base` for p = 1/n, 2/n, …, 1
///
/// p = 0 is skipped since I(0) is undefined.
pub fn information_curve(samples: usize, base: LogBase) -> Vec<(f64, f64)> {
    let n = samples.max(1);
    (1..=n)
        .map(|i| {
            let p = i as f64 / n as f64;
            (p, Quantity::of_raw(p, base).as_f64())
        })
        .collect()
}

/// Binary entropy H(p) for p = 0, 1/n, …, 1
pub fn binary_entropy_curve(samples: usize) -> Vec<(f64, f64)> {
    let n = samples.max(1);
    (0..=n)
        .map(|i| {
            let p = i as f64 / n as f64;
            (p, binary_entropy(p))
        })
        .collect()
}

/// I(p) next to its neighbours p ± ε
///
/// Small changes in probability produce small changes in information
/// everywhere except near p = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuityProbe {
    pub p: f64,
    pub epsilon: f64,
    pub left: Quantity,
    pub center: Quantity,
    pub right: Quantity,
}

impl ContinuityProbe {
    pub fn new(p: f64, epsilon: f64, base: LogBase) -> Self {
        let p = Probability::new(p).value();
        let epsilon = epsilon.abs();
        Self {
            p,
            epsilon,
            left: Quantity::of_raw(p - epsilon, base),
            center: Quantity::of_raw(p, base),
            right: Quantity::of_raw(p + epsilon, base),
        }
    }

    /// Match percentage between I(p - ε) and I(p)
    pub fn left_match(&self) -> Option<f64> {
        match_percentage(self.left, self.center)
    }

    /// Match percentage between I(p) and I(p + ε)
    pub fn right_match(&self) -> Option<f64> {
        match_percentage(self.center, self.right)
    }
}

/// Points a learner has recorded on the information graph
///
/// Owned by the caller; nothing in the crate keeps recorded points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordedPoints {
    points: Vec<(f64, f64)>,
}

impl RecordedPoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record I(p); undefined values are returned but not stored
    pub fn record(&mut self, p: f64, base: LogBase) -> Quantity {
        let q = Quantity::of_raw(p, base);
        if let Quantity::Defined(v) = q {
            self.points.push((Probability::new(p).value(), v));
        }
        q
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Points ordered by probability, for drawing as a polyline
    pub fn sorted(&self) -> Vec<(f64, f64)> {
        let mut sorted = self.points.clone();
        sorted.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        sorted
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}
