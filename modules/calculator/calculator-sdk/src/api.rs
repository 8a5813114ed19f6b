//! Calculator API trait and types
//!
//! Contract trait and error type for the calculator service.

use num_bigint::BigUint;

use crate::models::{Operands, Operation};

/// Calculator API trait
///
/// Evaluates a single operation. Implementations are stateless and may be
/// shared freely between threads.
pub trait CalculatorClientV1: Send + Sync {
    /// Evaluate `op` against `operands`.
    ///
    /// # Errors
    /// Returns `CalculatorError` when the operands are outside the domain of
    /// the operation, a required operand is missing, or the result is not a
    /// finite number.
    fn evaluate(&self, op: Operation, operands: Operands) -> Result<f64, CalculatorError>;

    /// Exact `a!` with `a` truncated toward zero.
    ///
    /// # Errors
    /// Returns a domain error when `a` is not finite, is negative, or exceeds
    /// the supported maximum.
    fn factorial(&self, a: f64) -> Result<BigUint, CalculatorError>;
}

/// Error type for Calculator operations
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("Cannot divide by zero!")]
    DivisionByZero,

    #[error("{message}")]
    Domain { message: String },

    #[error("Invalid operation")]
    UnknownOperation { name: String },

    #[error("operation '{operation}' requires operand '{operand}'")]
    MissingOperand {
        operation: Operation,
        operand: &'static str,
    },

    #[error("result of '{operation}' is not a finite number")]
    NonFiniteResult { operation: Operation },
}

impl CalculatorError {
    #[must_use]
    pub fn domain(message: impl Into<String>) -> Self {
        Self::Domain {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation { name: name.into() }
    }

    #[must_use]
    pub fn missing_operand(operation: Operation, operand: &'static str) -> Self {
        Self::MissingOperand { operation, operand }
    }

    #[must_use]
    pub fn non_finite(operation: Operation) -> Self {
        Self::NonFiniteResult { operation }
    }

    /// `true` for invalid mathematical input, `false` for unexpected failures.
    #[must_use]
    pub fn is_domain(&self) -> bool {
        match self {
            Self::DivisionByZero | Self::Domain { .. } | Self::UnknownOperation { .. } => true,
            Self::MissingOperand { .. } | Self::NonFiniteResult { .. } => false,
        }
    }
}
