//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator service:
//! - API trait (`CalculatorClientV1`)
//! - Operation model (`Operation`, `Arity`, `Operands`, `BigUint` for exact factorials)
//! - Error types (`CalculatorError`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClientV1, Operation, Operands};
//!
//! let result = client.evaluate(Operation::Power, Operands::binary(2.0, 10.0))?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
pub use api::{CalculatorClientV1, CalculatorError};

// === OPERATION MODEL ===
mod models;
pub use models::{Arity, Operands, Operation};

/// Exact integer type returned by [`CalculatorClientV1::factorial`].
pub use num_bigint::BigUint;

/// Service name reported by the health endpoint unless configured otherwise.
pub const SERVICE_NAME: &str = "calculator";
