//! Route registration for calculator module

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};

use crate::config::CalculatorConfig;
use crate::domain::Service;

use super::handlers;

/// Prefix under which the routes are served a second time.
pub const API_PREFIX: &str = "/api";

/// Register all REST routes for calculator module.
///
/// Routes are served both at the root and under [`API_PREFIX`]:
/// - `POST /calculate`, `POST /api/calculate`
/// - `GET /health`, `GET /api/health`
#[must_use]
pub fn register_routes(
    router: Router,
    service: Arc<Service>,
    config: Arc<CalculatorConfig>,
) -> Router {
    let routes = Router::new()
        .route("/calculate", post(handlers::calculate))
        .route("/health", get(handlers::health));

    router
        .merge(routes.clone())
        .nest(API_PREFIX, routes)
        .layer(Extension(service))
        .layer(Extension(config))
}
