//! # API Error Type
//!
//! Unified error type for the HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Basket API                         │
//! │                                                                         │
//! │  Handler ── Result<T, ApiError>                                         │
//! │     │                                                                   │
//! │     ├── JSON rejection ──────────── INVALID_REQUEST   (400)             │
//! │     ├── CoreError::EmptyBasket ──── EMPTY_BASKET      (400)             │
//! │     ├── CoreError::InvalidItem ──── INVALID_ITEM      (400)             │
//! │     ├── unknown / malformed id ──── NOT_FOUND         (404)             │
//! │     └── any other DbError ───────── STORE_UNAVAILABLE (503)             │
//! │                                                                         │
//! │  Response body:                                                         │
//! │  { "code": "EMPTY_BASKET", "message": "Basket is empty" }               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Store failures are logged with their detail; the client only sees a
//! generic message.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use ts_rs::TS;

use basket_core::CoreError;
use basket_db::DbError;

/// API error returned from handlers.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Basket not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ErrorCode {
    /// Basket submitted without items (400)
    EmptyBasket,

    /// An item failed validation (400)
    InvalidItem,

    /// Body could not be read as a basket request (400)
    InvalidRequest,

    /// Basket not found (404)
    NotFound,

    /// The store failed to answer (503)
    StoreUnavailable,
}

impl ErrorCode {
    /// HTTP status for this code.
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::EmptyBasket | ErrorCode::InvalidItem | ErrorCode::InvalidRequest => {
                StatusCode::BAD_REQUEST
            }
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates an invalid item error.
    pub fn invalid_item(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidItem, message)
    }

    /// Creates a store unavailable error.
    pub fn store_unavailable() -> Self {
        ApiError::new(
            ErrorCode::StoreUnavailable,
            "Basket store is unavailable",
        )
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

/// Result type for handlers and the service layer.
pub type ApiResult<T> = Result<T, ApiError>;

/// Converts store errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            DbError::CorruptRow { entity, reason } => {
                tracing::error!(%entity, %reason, "Stored basket could not be read");
                ApiError::store_unavailable()
            }
            DbError::QueryFailed(e) | DbError::Internal(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Store query failed: {}", e);
                ApiError::store_unavailable()
            }
            DbError::TransactionFailed(e) => {
                tracing::error!("Transaction failed: {}", e);
                ApiError::store_unavailable()
            }
            DbError::ConnectionFailed(e) | DbError::MigrationFailed(e) => {
                tracing::error!("Store not ready: {}", e);
                ApiError::store_unavailable()
            }
            DbError::PoolExhausted => {
                tracing::warn!("Connection pool exhausted");
                ApiError::store_unavailable()
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match &err {
            CoreError::EmptyBasket => ApiError::new(ErrorCode::EmptyBasket, err.to_string()),
            CoreError::InvalidItem(_) => ApiError::invalid_item(err.to_string()),
        }
    }
}

/// Converts axum's JSON extractor rejection.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(ErrorCode::InvalidRequest, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_core::ValidationError;

    #[test]
    fn test_core_error_mapping() {
        let empty = ApiError::from(CoreError::EmptyBasket);
        assert_eq!(empty.code, ErrorCode::EmptyBasket);
        assert_eq!(empty.status(), StatusCode::BAD_REQUEST);

        let invalid = ApiError::from(CoreError::InvalidItem(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        }));
        assert_eq!(invalid.code, ErrorCode::InvalidItem);
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert!(invalid.message.contains("quantity"));
    }

    #[test]
    fn test_db_error_mapping() {
        let missing = ApiError::from(DbError::not_found("Basket", "7"));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.message, "Basket not found: 7");

        for err in [
            DbError::PoolExhausted,
            DbError::QueryFailed("disk I/O error".to_string()),
            DbError::ConnectionFailed("no such file".to_string()),
            DbError::corrupt("basket_items", "bad decimal"),
        ] {
            let api = ApiError::from(err);
            assert_eq!(api.code, ErrorCode::StoreUnavailable);
            assert_eq!(api.status(), StatusCode::SERVICE_UNAVAILABLE);
            assert!(!api.message.contains("disk"));
        }
    }

    #[test]
    fn test_error_body_shape() {
        let body = serde_json::to_value(ApiError::from(CoreError::EmptyBasket)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "code": "EMPTY_BASKET", "message": "Basket is empty" })
        );
    }
}
