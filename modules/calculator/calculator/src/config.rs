use serde::{Deserialize, Serialize};

use calculator_sdk::SERVICE_NAME;

/// Configuration for the `calculator` module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Value of the `service` field reported by the health endpoint.
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
        }
    }
}

fn default_service_name() -> String {
    SERVICE_NAME.to_owned()
}
