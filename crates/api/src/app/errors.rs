use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use catalog_core::{DomainError, ProductId};
use catalog_infra::StoreError;

/// Every domain failure is a client error.
pub fn domain_error_to_response(err: &DomainError) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, err.code(), err.to_string())
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::Domain(e) => domain_error_to_response(&e),
        other => {
            tracing::error!(error = %other, "catalog store failure");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "store_error",
                other.to_string(),
            )
        }
    }
}

pub fn task_error_to_response(err: tokio::task::JoinError) -> axum::response::Response {
    tracing::error!(error = %err, "catalog task failed");
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "store_error",
        "catalog operation did not complete",
    )
}

/// Malformed JSON, wrong types, missing or unknown fields.
pub fn rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_body", rejection.body_text())
}

pub fn parse_product_id(raw: &str) -> Result<ProductId, axum::response::Response> {
    raw.parse()
        .map_err(|e: DomainError| json_error(StatusCode::BAD_REQUEST, e.code(), e.to_string()))
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
