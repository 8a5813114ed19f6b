//! Domain service for calculator
//!
//! Contains the operation evaluator. Every operation is a pure function of its
//! operands; the service carries no state and is shared as `Arc<Service>`.

use calculator_sdk::{BigUint, CalculatorError, Operands, Operation};
use num_traits::ToPrimitive;
use tracing::debug;

const SQRT_NEGATIVE: &str = "Cannot calculate square root of negative number!";
const FACTORIAL_NEGATIVE: &str = "Factorial not defined for negative numbers!";
const FACTORIAL_NOT_FINITE: &str = "Factorial requires a finite integer argument!";
const FACTORIAL_TOO_LARGE: &str = "Factorial argument too large! The maximum is 10000.";
const LOG_NON_POSITIVE: &str = "Logarithm not defined for non-positive numbers!";
const LOG_INVALID_BASE: &str = "Logarithm base must be positive and not equal to 1!";

/// Largest accepted factorial argument.
pub const MAX_FACTORIAL: u32 = 10_000;

/// Domain service that evaluates calculator operations.
#[derive(Clone, Debug, Default)]
pub struct Service;

#[allow(clippy::unused_self)]
impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Evaluate `op` against `operands`.
    ///
    /// Binary operations require `b`. `factorial` truncates `a` toward zero and
    /// is converted from its exact value, so `171!` and above are not finite.
    /// `log` uses `b` as the base when present. Results that are not finite
    /// are rejected.
    ///
    /// # Errors
    /// Returns `CalculatorError` for out-of-domain operands, a missing `b`, or
    /// a non-finite result.
    pub fn evaluate(&self, op: Operation, operands: Operands) -> Result<f64, CalculatorError> {
        let Operands { a, b } = operands;
        debug!(operation = %op, a, b, "evaluating operation");

        let value = match op {
            Operation::Add => self.add(a, required_b(op, b)?),
            Operation::Subtract => self.subtract(a, required_b(op, b)?),
            Operation::Multiply => self.multiply(a, required_b(op, b)?),
            Operation::Divide => self.divide(a, required_b(op, b)?)?,
            Operation::Power => self.power(a, required_b(op, b)?),
            Operation::Percentage => self.percentage(a, required_b(op, b)?),
            Operation::SquareRoot => self.square_root(a)?,
            Operation::Factorial => self
                .factorial_of(a)?
                .to_f64()
                .unwrap_or(f64::INFINITY),
            Operation::Sin => self.sin(a),
            Operation::Cos => self.cos(a),
            Operation::Tan => self.tan(a),
            Operation::Log => self.log(a, b)?,
        };

        if !value.is_finite() {
            return Err(CalculatorError::non_finite(op));
        }

        debug!(operation = %op, result = value, "operation evaluated");
        Ok(value)
    }

    #[must_use]
    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    #[must_use]
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    #[must_use]
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    /// # Errors
    /// Returns `CalculatorError::DivisionByZero` when `b` is zero.
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        if b == 0.0 {
            return Err(CalculatorError::DivisionByZero);
        }
        Ok(a / b)
    }

    #[must_use]
    pub fn power(&self, a: f64, b: f64) -> f64 {
        a.powf(b)
    }

    /// # Errors
    /// Returns a domain error when `a` is negative.
    pub fn square_root(&self, a: f64) -> Result<f64, CalculatorError> {
        if a < 0.0 {
            return Err(CalculatorError::domain(SQRT_NEGATIVE));
        }
        Ok(a.sqrt())
    }

    /// `a` percent of `b`.
    #[must_use]
    pub fn percentage(&self, a: f64, b: f64) -> f64 {
        (a / 100.0) * b
    }

    /// Exact `n!`.
    ///
    /// # Errors
    /// Returns a domain error when `n` is negative or exceeds [`MAX_FACTORIAL`].
    pub fn factorial(&self, n: i64) -> Result<BigUint, CalculatorError> {
        if n < 0 {
            return Err(CalculatorError::domain(FACTORIAL_NEGATIVE));
        }
        let n = u32::try_from(n)
            .ok()
            .filter(|n| *n <= MAX_FACTORIAL)
            .ok_or_else(|| CalculatorError::domain(FACTORIAL_TOO_LARGE))?;
        Ok((2..=n).product())
    }

    /// Exact factorial of a floating-point operand truncated toward zero.
    ///
    /// # Errors
    /// Same as [`Service::factorial_argument`] and [`Service::factorial`].
    pub fn factorial_of(&self, a: f64) -> Result<BigUint, CalculatorError> {
        self.factorial(Self::factorial_argument(a)?)
    }

    /// Truncate a floating-point operand toward zero for [`Service::factorial`].
    ///
    /// # Errors
    /// Returns a domain error when `a` is NaN or infinite.
    #[allow(clippy::cast_possible_truncation)] // `as` saturates; out-of-range values fail in `factorial`
    pub fn factorial_argument(a: f64) -> Result<i64, CalculatorError> {
        if !a.is_finite() {
            return Err(CalculatorError::domain(FACTORIAL_NOT_FINITE));
        }
        Ok(a.trunc() as i64)
    }

    /// Sine of `x` radians.
    #[must_use]
    pub fn sin(&self, x: f64) -> f64 {
        x.sin()
    }

    /// Cosine of `x` radians.
    #[must_use]
    pub fn cos(&self, x: f64) -> f64 {
        x.cos()
    }

    /// Tangent of `x` radians.
    #[must_use]
    pub fn tan(&self, x: f64) -> f64 {
        x.tan()
    }

    /// Natural logarithm of `x`, or `ln(x) / ln(base)` when a base is given.
    ///
    /// # Errors
    /// Returns a domain error when `x` is not positive, or when `base` is not
    /// positive or equals 1.
    pub fn log(&self, x: f64, base: Option<f64>) -> Result<f64, CalculatorError> {
        if x <= 0.0 {
            return Err(CalculatorError::domain(LOG_NON_POSITIVE));
        }
        let Some(base) = base else {
            return Ok(x.ln());
        };
        let ln_base = base.ln();
        if base.is_nan() || base <= 0.0 || ln_base == 0.0 {
            return Err(CalculatorError::domain(LOG_INVALID_BASE));
        }
        Ok(x.ln() / ln_base)
    }
}

fn required_b(op: Operation, b: Option<f64>) -> Result<f64, CalculatorError> {
    b.ok_or_else(|| CalculatorError::missing_operand(op, "b"))
}
