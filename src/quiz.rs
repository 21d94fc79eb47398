//! Quiz: Generated Questions with Exact Answers
//!
//! Questions use probabilities of the form 1/2ᵏ and uniform distributions
//! over 2ᵏ outcomes so the answers are whole numbers of bits and can be
//! worked out by hand.
//!
//! Scoring state is an explicit value owned by the caller.

use rand::Rng;

use crate::error::{Error, Result};
use crate::information::{compute_entropy, compute_information, compute_joint, ProbabilityDistribution};

/// Accepted absolute error on an answer, in bits
pub const ANSWER_TOLERANCE: f64 = 0.01;

/// Largest exponent used in generated probabilities 1/2ᵏ
const MAX_EXPONENT: u32 = 6;

/// Largest exponent accepted in a question, so 2ᵏ fits in a u64
pub const MAX_QUESTION_EXPONENT: u32 = 62;

/// Largest uniform distribution accepted in a question
pub const MAX_QUESTION_OUTCOMES: usize = 1 << 20;

/// What a question asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// I(1/2ᵏ)
    Information { exponent: u32 },
    /// H of a uniform distribution over `outcomes`
    UniformEntropy { outcomes: usize },
    /// I(A∩B) for independent events with P = 1/2ᵃ and 1/2ᵇ
    Joint { exponent_a: u32, exponent_b: u32 },
}

/// One quiz question and its answer in bits
#[derive(Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    pub kind: QuestionKind,
    pub answer: f64,
}

impl QuizQuestion {
    /// Build a question, computing the answer with the calculators
    ///
    /// Exponents above [`MAX_QUESTION_EXPONENT`] and uniform distributions
    /// outside 1..=[`MAX_QUESTION_OUTCOMES`] are rejected.
    pub fn new(kind: QuestionKind) -> Result<Self> {
        let exponent_ok = |k: u32| k <= MAX_QUESTION_EXPONENT;
        let valid = match kind {
            QuestionKind::Information { exponent } => exponent_ok(exponent),
            QuestionKind::UniformEntropy { outcomes } => {
                (1..=MAX_QUESTION_OUTCOMES).contains(&outcomes)
            }
            QuestionKind::Joint { exponent_a, exponent_b } => {
                exponent_ok(exponent_a) && exponent_ok(exponent_b)
            }
        };
        if !valid {
            return Err(Error::InvalidConfig(format!("quiz question out of range: {:?}", kind)));
        }
        Ok(Self::build(kind))
    }

    fn build(kind: QuestionKind) -> Self {
        let answer = match kind {
            QuestionKind::Information { exponent } => {
                compute_information(power_of_half(exponent)).value.as_f64()
            }
            QuestionKind::UniformEntropy { outcomes } => {
                compute_entropy(&ProbabilityDistribution::uniform(outcomes)).entropy
            }
            QuestionKind::Joint { exponent_a, exponent_b } => {
                compute_joint(power_of_half(exponent_a), power_of_half(exponent_b))
                    .iab
                    .as_f64()
            }
        };
        Self { kind, answer }
    }

    /// Draw a random question
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let kind = match rng.random_range(0..3) {
            0 => QuestionKind::Information {
                exponent: rng.random_range(1..=MAX_EXPONENT),
            },
            1 => QuestionKind::UniformEntropy {
                outcomes: 1usize << rng.random_range(1..=MAX_EXPONENT),
            },
            _ => QuestionKind::Joint {
                exponent_a: rng.random_range(1..=MAX_EXPONENT / 2),
                exponent_b: rng.random_range(1..=MAX_EXPONENT / 2),
            },
        };
        Self::build(kind)
    }

    pub fn prompt(&self) -> String {
        match self.kind {
            QuestionKind::Information { exponent } => format!(
                "An event has probability 1/{}. How many bits of information does it carry?",
                1u64 << exponent
            ),
            QuestionKind::UniformEntropy { outcomes } => format!(
                "What is the entropy, in bits, of a uniform distribution over {} outcomes?",
                outcomes
            ),
            QuestionKind::Joint { exponent_a, exponent_b } => format!(
                "Independent events A and B have P(A) = 1/{} and P(B) = 1/{}. What is I(A∩B) in bits?",
                1u64 << exponent_a,
                1u64 << exponent_b
            ),
        }
    }

    /// Whether `answer` is within [`ANSWER_TOLERANCE`] of the exact value
    pub fn check(&self, answer: f64) -> bool {
        answer.is_finite() && (answer - self.answer).abs() <= ANSWER_TOLERANCE
    }
}

fn power_of_half(exponent: u32) -> f64 {
    0.5f64.powi(exponent as i32)
}

/// Running quiz score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: u32,
    pub attempted: u32,
}

impl QuizScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grade `answer` against `question` and record the outcome
    pub fn submit(&mut self, question: &QuizQuestion, answer: f64) -> bool {
        let ok = question.check(answer);
        self.attempted += 1;
        if ok {
            self.correct += 1;
        }
        ok
    }

    /// Percentage correct, 0 before any attempt
    pub fn percentage(&self) -> f64 {
        if self.attempted == 0 {
            0.0
        } else {
            100.0 * self.correct as f64 / self.attempted as f64
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
