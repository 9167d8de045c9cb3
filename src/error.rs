//! Application error taxonomy and its HTTP rendering.
//!
//! Two kinds are expected outcomes a caller can act on ([`AppError::InvalidUrl`],
//! [`AppError::NotFound`]); the rest are server-side faults that must never be
//! confused with them ([`AppError::AliasCollisionExhausted`],
//! [`AppError::StorageUnavailable`], [`AppError::Internal`]).

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON error body, kept compatible with the original `{ "error": "..." }` shape.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Input failed syntactic URL validation. No side effects occurred.
    #[error("invalid url")]
    InvalidUrl { reason: String },

    /// No mapping exists for the requested alias.
    #[error("No short URL found for the given input")]
    NotFound { short_code: String },

    /// Every generated alias collided with an existing one.
    #[error("failed to allocate a unique short code after {attempts} attempts")]
    AliasCollisionExhausted { attempts: usize },

    /// The persistence backend failed or could not be reached.
    #[error("storage unavailable: {message}")]
    StorageUnavailable { message: String },

    /// A fault inside the service itself.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn invalid_url(reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            reason: reason.into(),
        }
    }

    pub fn not_found(short_code: impl Into<String>) -> Self {
        Self::NotFound {
            short_code: short_code.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Stable machine-readable code for logs and the admin CLI.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidUrl { .. } => "invalid_url",
            Self::NotFound { .. } => "not_found",
            Self::AliasCollisionExhausted { .. } => "alias_collision_exhausted",
            Self::StorageUnavailable { .. } => "storage_unavailable",
            Self::Internal { .. } => "internal",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidUrl { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::AliasCollisionExhausted { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::StorageUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// True for conditions the caller caused and can correct.
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::InvalidUrl { .. } | Self::NotFound { .. })
    }

    /// Builds the response body. Server-side faults do not leak internals.
    pub fn to_error_body(&self) -> ErrorBody {
        let error = match self {
            Self::InvalidUrl { .. } | Self::NotFound { .. } => self.to_string(),
            Self::AliasCollisionExhausted { .. } | Self::Internal { .. } => {
                "internal server error".to_string()
            }
            Self::StorageUnavailable { .. } => "storage unavailable".to_string(),
        };
        ErrorBody { error }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::storage(e.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        AppError::storage(format!("migration failed: {e}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_expected() {
            tracing::debug!(code = self.code(), "{}", self);
        } else {
            tracing::error!(code = self.code(), "{}", self);
        }

        (self.status_code(), Json(self.to_error_body())).into_response()
    }
}
