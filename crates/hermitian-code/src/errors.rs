// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for Hermitian code construction, encoding and decoding
//!
//! This module defines the error taxonomy of the crate using `thiserror`. Construction
//! failures abort building a code entirely, decoding failures are per-call and never
//! touch the persistent state of a code.

use thiserror::Error;

/// Main error type for Hermitian code operations
#[derive(Error, Debug)]
pub enum HermitianCodeError {
    /// The code could not be built for the requested parameters
    #[error("Code construction failed: {message}")]
    Construction { message: String },

    /// The decoder could not propose an error locator for a received word
    #[error("Decoding failed: {message}")]
    Decoding { message: String },

    /// A caller supplied a value violating an operation precondition
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Finite field computation errors
    #[error("Mathematical error: {message}")]
    Math { message: String },

    /// Matrix operation errors
    #[error("Matrix operation error: {message}")]
    Matrix { message: String },

    /// Configuration loading errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for Hermitian code operations
pub type HermitianCodeResult<T> = Result<T, HermitianCodeError>;

/// Reasons a code cannot be constructed
#[derive(Error, Debug)]
pub enum ConstructionError {
    /// The curve parameter is not a prime power
    #[error("m must be a prime power, got {m}")]
    NotPrimePower { m: u32 },

    /// The curve parameter is outside the supported range
    #[error("m = {m} is outside the supported range 2..={max}")]
    ParameterOutOfRange { m: u32, max: u32 },

    /// Riemann-Roch does not apply: a <= 2g - 2
    #[error("The degree of Q is not greater than 2g - 2: {a} <= 2*{g} - 2")]
    DegreeTooSmall { a: usize, g: usize },

    /// Negative correction radius: a < 3g - 1
    #[error("Divisor degree {a} gives no correction capability, it must be at least 3g - 1 = {min}")]
    NoCorrectionCapability { a: usize, min: usize },

    /// Basis size disagrees with the Riemann-Roch theorem
    #[error("The number of functions found does not satisfy the Riemann-Roch theorem: found {found}, needed {needed}")]
    DimensionMismatch { found: usize, needed: usize },

    /// No primitive polynomial of the given degree was found
    #[error("No primitive polynomial of degree {degree} over GF({characteristic})")]
    NoPrimitivePolynomial { characteristic: u32, degree: u32 },

    /// The point at infinity is missing from the enumerated points
    #[error("The curve has no point at infinity")]
    MissingInfinityPoint,
}

/// Mathematical error type for field computation failures
#[derive(Error, Debug)]
pub enum MathError {
    /// Zero has no multiplicative inverse
    #[error("Zero has no inverse in GF({order})")]
    NoInverse { order: u32 },

    /// Integer representation outside of the field
    #[error("Value {value} is not an element of GF({order})")]
    ElementOutOfRange { value: u32, order: u32 },

    /// A function was evaluated at one of its poles
    #[error("Function {function} has a pole at {point}")]
    Pole { function: String, point: String },
}

impl From<ConstructionError> for HermitianCodeError {
    fn from(err: ConstructionError) -> Self {
        HermitianCodeError::Construction {
            message: err.to_string(),
        }
    }
}

impl From<MathError> for HermitianCodeError {
    fn from(err: MathError) -> Self {
        HermitianCodeError::Math {
            message: err.to_string(),
        }
    }
}

impl From<figment::Error> for HermitianCodeError {
    fn from(err: figment::Error) -> Self {
        HermitianCodeError::Config {
            message: err.to_string(),
        }
    }
}

impl HermitianCodeError {
    /// Create a decoding error with a message
    pub fn decoding(message: impl Into<String>) -> Self {
        HermitianCodeError::Decoding {
            message: message.into(),
        }
    }

    /// Create an invalid argument error for a vector of the wrong length
    pub fn length_mismatch(expected: usize, actual: usize, context: impl Into<String>) -> Self {
        HermitianCodeError::InvalidArgument {
            message: format!(
                "{} must have length {}, got {}",
                context.into(),
                expected,
                actual
            ),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: usize, actual: usize, context: impl Into<String>) -> Self {
        HermitianCodeError::Matrix {
            message: format!(
                "Dimension mismatch in {}: expected {}, got {}",
                context.into(),
                expected,
                actual
            ),
        }
    }

    /// Whether this error reports a decoding failure
    pub fn is_decoding(&self) -> bool {
        matches!(self, HermitianCodeError::Decoding { .. })
    }
}
