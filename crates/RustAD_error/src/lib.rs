// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// RustAD: A Rust library for automatic differentiation.
// Copyright (C) 2024 https://github.com/rust-ad
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! Error taxonomy for the RustAD crates.
//!
//! Every failure is fatal for the evaluation that produced it: nothing is
//! retried, and a graph under construction is simply abandoned.

use std::fmt::Display;
use thiserror::Error;

/// Error type shared by the forward- and reverse-mode crates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RustADError {
    /// A mathematical domain violation: logarithm of a non-positive number,
    /// inverse trigonometric function outside $[-1, 1]$, tangent at a zero
    /// of cosine, or a zero-base power with a non-admissible exponent.
    #[error("invalid domain: {0}")]
    Domain(String),

    /// A denominator whose primal value is within one machine epsilon of zero.
    #[error("division by zero: {0}")]
    DivideByZero(String),

    /// Driver arguments with inconsistent shapes, e.g. a seed vector whose
    /// length differs from the input vector.
    #[error("shape mismatch: {0}")]
    Shape(String),
}

impl RustADError {
    /// Report a domain violation.
    pub fn domain(message: impl Display) -> Self {
        Self::Domain(message.to_string())
    }

    /// Report a division by zero.
    pub fn divide_by_zero(message: impl Display) -> Self {
        Self::DivideByZero(message.to_string())
    }

    /// Report a shape mismatch.
    pub fn shape(message: impl Display) -> Self {
        Self::Shape(message.to_string())
    }
}

/// Result type alias for the RustAD crates.
pub type Result<T> = std::result::Result<T, RustADError>;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// UNIT TESTS
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

#[cfg(test)]
mod tests_error {
    use super::*;

    #[test]
    fn test_display() {
        let error = RustADError::domain("cannot compute logarithm of -1");
        assert_eq!(
            error.to_string(),
            "invalid domain: cannot compute logarithm of -1"
        );

        let error = RustADError::divide_by_zero("divisor has a real part of zero");
        assert_eq!(
            error.to_string(),
            "division by zero: divisor has a real part of zero"
        );

        let error = RustADError::shape("seed has length 2, input has length 3");
        assert_eq!(
            error.to_string(),
            "shape mismatch: seed has length 2, input has length 3"
        );
    }
}
