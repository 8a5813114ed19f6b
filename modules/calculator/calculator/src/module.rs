//! Calculator Module definition
//!
//! Owns the domain service and the module config, and hands out the REST
//! routes and the local client built on top of them.

use std::sync::Arc;

use axum::Router;

use calculator_sdk::CalculatorClientV1;

use crate::api::rest::routes::register_routes;
use crate::config::CalculatorConfig;
use crate::domain::{CalculatorLocalClient, Service};

/// Calculator module.
#[derive(Clone)]
pub struct CalculatorModule {
    service: Arc<Service>,
    config: Arc<CalculatorConfig>,
}

impl Default for CalculatorModule {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

impl CalculatorModule {
    #[must_use]
    pub fn new(config: CalculatorConfig) -> Self {
        tracing::info!(service = %config.service_name, "Initializing calculator module");
        Self {
            service: Arc::new(Service::new()),
            config: Arc::new(config),
        }
    }

    #[must_use]
    pub fn service(&self) -> Arc<Service> {
        Arc::clone(&self.service)
    }

    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Local `CalculatorClientV1` for in-process consumers.
    #[must_use]
    pub fn client(&self) -> Arc<dyn CalculatorClientV1> {
        Arc::new(CalculatorLocalClient::new(self.service()))
    }

    /// Add the module's REST routes to `router`.
    #[must_use]
    pub fn register_rest(&self, router: Router) -> Router {
        let router = register_routes(router, self.service(), Arc::clone(&self.config));
        tracing::info!("calculator REST routes registered");
        router
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use calculator_sdk::{Operands, Operation};

    #[test]
    fn test_module_client_evaluates() {
        let module = CalculatorModule::default();
        let client = module.client();
        let result = client
            .evaluate(Operation::Multiply, Operands::binary(6.0, 7.0))
            .unwrap();
        assert!((result - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_module_keeps_config() {
        let module = CalculatorModule::new(CalculatorConfig {
            service_name: "calc".to_owned(),
        });
        assert_eq!(module.config().service_name, "calc");
    }
}
