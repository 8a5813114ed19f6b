//! HTTP host: middleware stack, bind and graceful shutdown.

use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, StatusCode, header};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::field::Empty;

use calculator::CalculatorModule;

use crate::config::{AppConfig, CorsConfig, ServerConfig};

/// Build the full router: module routes wrapped in the middleware stack.
///
/// At runtime requests flow Trace -> CORS -> Timeout -> `BodyLimit` -> routes.
pub fn build_router(config: &AppConfig, module: &CalculatorModule) -> Router {
    let router = apply_limits(module.register_rest(Router::new()), &config.server);

    let router = match build_cors_layer(&config.cors) {
        Some(cors) => router.layer(cors),
        None => router,
    };

    apply_trace_layer(router)
}

/// Body size limit and request timeout; a timed-out request gets 504.
fn apply_limits(router: Router, server: &ServerConfig) -> Router {
    router
        .layer(RequestBodyLimitLayer::new(server.body_limit_bytes))
        .layer(DefaultBodyLimit::max(server.body_limit_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            Duration::from_millis(server.request_timeout_ms),
        ))
}

/// Build a CORS layer from config, or `None` when no origin is allowed.
fn build_cors_layer(cfg: &CorsConfig) -> Option<CorsLayer> {
    if cfg.allowed_origins.is_empty() {
        return None;
    }

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if cfg.allowed_origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS is configured with allowed_origins=['*']");
        return Some(layer.allow_origin(Any));
    }

    let origins: Vec<HeaderValue> = cfg
        .allowed_origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();
    Some(layer.allow_origin(origins))
}

fn apply_trace_layer(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &axum::http::Request<axum::body::Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(
                |res: &axum::http::Response<axum::body::Body>,
                 latency: Duration,
                 span: &tracing::Span| {
                    span.record("status", res.status().as_u16());
                    span.record("latency_ms", latency.as_millis());
                },
            ),
    )
}

/// Bind the configured address and serve until a shutdown signal arrives.
///
/// # Errors
/// Returns an error if the bind address is invalid, the socket cannot be
/// bound, or the server fails while running.
pub async fn serve(config: &AppConfig, router: Router) -> Result<()> {
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {addr}"))?;
    tracing::info!("HTTP server bound on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let signal = calculator_bootstrap::wait_for_shutdown().await;
    tracing::info!(%signal, "HTTP server shutting down gracefully");
}
