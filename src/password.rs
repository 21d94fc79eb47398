//! Password Entropy: Information Content of a Random Password
//!
//! A password of length L drawn uniformly from a pool of N characters
//! carries
//!
//!   H = L · log₂ N   bits
//!
//! The pool is estimated from the character classes actually present.

use crate::math::log_base2;

const LOWERCASE_POOL: usize = 26;
const UPPERCASE_POOL: usize = 26;
const DIGIT_POOL: usize = 10;
/// Printable ASCII punctuation plus space
const SYMBOL_POOL: usize = 33;

/// Strength bucket by entropy in bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    VeryWeak,
    Weak,
    Reasonable,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn from_bits(bits: f64) -> Self {
        if bits < 28.0 {
            Strength::VeryWeak
        } else if bits < 36.0 {
            Strength::Weak
        } else if bits < 60.0 {
            Strength::Reasonable
        } else if bits < 128.0 {
            Strength::Strong
        } else {
            Strength::VeryStrong
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strength::VeryWeak => "very weak",
            Strength::Weak => "weak",
            Strength::Reasonable => "reasonable",
            Strength::Strong => "strong",
            Strength::VeryStrong => "very strong",
        }
    }
}

/// Character classes found in a password
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl CharClasses {
    pub fn detect(password: &str) -> Self {
        let mut classes = Self::default();
        for c in password.chars() {
            if c.is_ascii_lowercase() {
                classes.lowercase = true;
            } else if c.is_ascii_uppercase() {
                classes.uppercase = true;
            } else if c.is_ascii_digit() {
                classes.digits = true;
            } else {
                classes.symbols = true;
            }
        }
        classes
    }

    /// Total number of characters in the detected pools
    pub fn pool_size(&self) -> usize {
        let mut pool = 0;
        if self.lowercase {
            pool += LOWERCASE_POOL;
        }
        if self.uppercase {
            pool += UPPERCASE_POOL;
        }
        if self.digits {
            pool += DIGIT_POOL;
        }
        if self.symbols {
            pool += SYMBOL_POOL;
        }
        pool
    }
}

/// Entropy estimate for one password
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordEntropy {
    /// Length in characters
    pub length: usize,
    pub classes: CharClasses,
    pub pool_size: usize,
    /// L · log₂ N
    pub bits: f64,
    pub strength: Strength,
}

/// Estimate the entropy of `password`
pub fn analyze(password: &str) -> PasswordEntropy {
    let length = password.chars().count();
    let classes = CharClasses::detect(password);
    let pool_size = classes.pool_size();

    let bits = if length == 0 || pool_size == 0 {
        0.0
    } else {
        length as f64 * log_base2(pool_size as f64)
    };

    PasswordEntropy {
        length,
        classes,
        pool_size,
        bits,
        strength: Strength::from_bits(bits),
    }
}
