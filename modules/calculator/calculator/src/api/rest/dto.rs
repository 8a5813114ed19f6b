//! REST DTOs for calculator module
//!
//! These types are transport-specific (serde for the JSON surface).

use serde::{Deserialize, Serialize};

/// Request to evaluate one operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// Wire name of the operation, e.g. `divide` or `square_root`
    pub operation: String,
    /// First operand
    #[serde(default)]
    pub a: Option<f64>,
    /// Second operand, or the logarithm base
    #[serde(default)]
    pub b: Option<f64>,
}

/// Response containing the evaluated number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub result: f64,
}

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// Error payload shared by every failing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
