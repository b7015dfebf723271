//! Response envelope and error mapping.
//!
//! # Responsibilities
//! - Wrap handler output in the `{ success, data, count }` envelope
//! - Map [`ApiError`] variants onto status codes and the
//!   `{ success: false, error, ... }` failure shape
//!
//! # Design Decisions
//! - One envelope type for every endpoint; list responses carry `count`
//! - Handlers return `Result<_, ApiError>`; nothing builds raw status
//!   responses inline
//! - Internal failures log the cause but never leak it to the client

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Success envelope common to all endpoints.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> ApiResponse<T> {
    /// Envelope for a single record.
    pub fn record(data: T) -> Self {
        Self {
            success: true,
            data,
            count: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Envelope for a collection, with `count` set to its length.
    pub fn list(data: Vec<T>) -> Self {
        let count = data.len();
        Self {
            success: true,
            data,
            count: Some(count),
        }
    }
}

/// Failure conditions surfaced by the API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid wallet address format")]
    InvalidAddressFormat,

    #[error("Project not found")]
    ProjectNotFound { id: String },

    #[error("Wallet address not found")]
    WalletNotFound,

    /// Catch-all for store access failures; never retried.
    #[error("Internal server error")]
    Internal(#[from] StoreError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidAddressFormat => StatusCode::BAD_REQUEST,
            ApiError::ProjectNotFound { .. } | ApiError::WalletNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(cause) = &self {
            tracing::error!(error = %cause, "Store access failed");
        }

        let mut body = serde_json::json!({
            "success": false,
            "error": self.to_string(),
        });
        // The project lookup echoes the requested id back to the caller.
        if let ApiError::ProjectNotFound { id } = &self {
            body["id"] = serde_json::json!(id);
        }

        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_envelope_counts_items() {
        let env = ApiResponse::list(vec![1, 2, 3]);
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["count"], 3);
    }

    #[test]
    fn record_envelope_omits_count() {
        let env = ApiResponse::record("x");
        let json = serde_json::to_value(&env).unwrap();
        assert!(json.get("count").is_none());
    }

    #[test]
    fn error_statuses_follow_the_taxonomy() {
        assert_eq!(ApiError::InvalidAddressFormat.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::ProjectNotFound { id: "p".into() }.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::WalletNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal(StoreError::Poisoned).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn project_not_found_echoes_the_id() {
        let resp = ApiError::ProjectNotFound { id: "proj-9".into() }.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
