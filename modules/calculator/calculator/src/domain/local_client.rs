//! Local client implementation of `CalculatorClientV1`

use std::sync::Arc;

use calculator_sdk::{BigUint, CalculatorClientV1, CalculatorError, Operands, Operation};

use super::service::Service;

/// Local client implementation that delegates to the module's Service.
#[derive(Clone)]
pub struct CalculatorLocalClient {
    service: Arc<Service>,
}

impl CalculatorLocalClient {
    /// Create a new local client wrapping the Service.
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

impl CalculatorClientV1 for CalculatorLocalClient {
    fn evaluate(&self, op: Operation, operands: Operands) -> Result<f64, CalculatorError> {
        self.service.evaluate(op, operands)
    }

    fn factorial(&self, a: f64) -> Result<BigUint, CalculatorError> {
        self.service.factorial_of(a)
    }
}
