//! REST handlers for calculator module

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use tracing::{field::Empty, info};

use calculator_sdk::{CalculatorError, Operands, Operation};

use crate::config::CalculatorConfig;
use crate::domain::Service;

use super::dto::{CalculateRequest, CalculateResponse, HealthResponse};
use super::error::ApiResult;

const HEALTHY: &str = "healthy";

/// Handler for POST /calculate
///
/// Accepts `{operation, a, b?}` and returns `{result}`. Unknown operations and
/// domain errors are 400; undecodable bodies, missing operands and non-finite
/// results are 500.
#[tracing::instrument(skip_all, fields(operation = Empty))]
pub async fn calculate(
    Extension(svc): Extension<Arc<Service>>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> ApiResult<Json<CalculateResponse>> {
    let Json(req) = payload?;
    tracing::Span::current().record("operation", req.operation.as_str());

    let op: Operation = req.operation.parse()?;
    let a = req
        .a
        .ok_or_else(|| CalculatorError::missing_operand(op, "a"))?;

    let result = svc.evaluate(op, Operands { a, b: req.b })?;
    info!(operation = %op, result, "calculation completed");

    Ok(Json(CalculateResponse { result }))
}

/// Handler for GET /health
pub async fn health(Extension(cfg): Extension<Arc<CalculatorConfig>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTHY.to_owned(),
        service: cfg.service_name.clone(),
    })
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::{get, post};
    use serde_json::Value;
    use tower::ServiceExt as _;

    fn create_test_router() -> Router {
        Router::new()
            .route("/calculate", post(calculate))
            .route("/health", get(health))
            .layer(Extension(Arc::new(Service::new())))
            .layer(Extension(Arc::new(CalculatorConfig::default())))
    }

    async fn post_json(body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/calculate")
            .header("content-type", "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap();

        let response = create_test_router().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_calculate_returns_result() {
        let (status, json) = post_json(r#"{"operation":"power","a":2,"b":10}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["result"], 1024.0);
    }

    #[tokio::test]
    async fn test_calculate_unary_without_b() {
        let (status, json) = post_json(r#"{"operation":"factorial","a":5}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["result"], 120.0);

        let (status, json) = post_json(r#"{"operation":"log","a":8,"b":null}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert!((json["result"].as_f64().unwrap() - 8f64.ln()).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_calculate_log_with_base() {
        let (status, json) = post_json(r#"{"operation":"log","a":8,"b":2}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert!((json["result"].as_f64().unwrap() - 3.0).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_divide_by_zero_is_bad_request() {
        let (status, json) = post_json(r#"{"operation":"divide","a":10,"b":0}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Cannot divide by zero!");
    }

    #[tokio::test]
    async fn test_negative_square_root_is_bad_request() {
        let (status, json) = post_json(r#"{"operation":"square_root","a":-4}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json["error"],
            "Cannot calculate square root of negative number!"
        );
    }

    #[tokio::test]
    async fn test_unknown_operation_is_bad_request() {
        let (status, json) = post_json(r#"{"operation":"modulo","a":10,"b":3}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Invalid operation");
    }

    #[tokio::test]
    async fn test_missing_operand_is_internal_error() {
        let (status, json) = post_json(r#"{"operation":"add","a":1}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = json["error"].as_str().unwrap();
        assert!(message.starts_with("Calculation error:"), "{message}");
        assert!(message.contains("'b'"), "{message}");

        let (status, _) = post_json(r#"{"operation":"sin"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_malformed_body_is_internal_error() {
        let (status, json) = post_json(r#"{"operation": "add", "a": 1,"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            json["error"]
                .as_str()
                .unwrap()
                .starts_with("Calculation error:")
        );

        let (status, _) = post_json(r#"{"operation":"add","a":"one","b":2}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_non_finite_result_is_internal_error() {
        let (status, json) = post_json(r#"{"operation":"power","a":0,"b":-1}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json["error"],
            "Calculation error: result of 'power' is not a finite number"
        );
    }

    #[tokio::test]
    async fn test_factorial_limits() {
        let (status, json) = post_json(r#"{"operation":"factorial","a":23}"#).await;
        assert_eq!(status, StatusCode::OK);
        let expected: f64 = "25852016738884976640000".parse().unwrap();
        assert!((json["result"].as_f64().unwrap() - expected).abs() <= expected * 1e-12);

        let (status, json) = post_json(r#"{"operation":"factorial","a":171}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json["error"],
            "Calculation error: result of 'factorial' is not a finite number"
        );

        let (status, json) = post_json(r#"{"operation":"factorial","a":10001}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json["error"],
            "Factorial argument too large! The maximum is 10000."
        );
    }

    #[tokio::test]
    async fn test_health_handler_returns_json() {
        let request = Request::builder()
            .method("GET")
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = create_test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "calculator");
    }
}
