//! API error type with `IntoResponse`.
//!
//! Client mistakes map to 400, an unreachable store to 503, anything else to
//! 500. Server-side failures are logged and answered with a generic message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use prep_core::model::DraftError;
use serde_json::json;
use services::{
    DashboardError, MockTestServiceError, ProblemServiceError, SubjectServiceError,
};
use storage::repository::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Missing form field or malformed value (400)
    #[error(transparent)]
    Draft(#[from] DraftError),

    /// Form body missing, mistyped or undecodable (400)
    #[error("invalid form body: {message}")]
    InvalidForm { message: String },

    /// Path id is not a non-negative integer (400)
    #[error("invalid id `{raw}`")]
    InvalidId { raw: String },

    /// Store unavailable (503) or unreadable (500)
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Internal error (500)
    #[error("{message}")]
    Internal { message: String },
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Draft(_) | Self::InvalidForm { .. } | Self::InvalidId { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::Storage(StorageError::Connection(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Storage(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Draft(DraftError::MissingField { .. }) => "missing_field",
            Self::Draft(_) | Self::InvalidForm { .. } => "invalid_input",
            Self::InvalidId { .. } => "invalid_id",
            Self::Storage(StorageError::Connection(_)) => "store_unavailable",
            Self::Storage(_) | Self::Internal { .. } => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "an internal error occurred".to_string()
        } else {
            tracing::debug!(error = %self, "rejected request");
            self.to_string()
        };

        let body = json!({
            "error": self.code(),
            "message": message,
        });
        (status, Json(body)).into_response()
    }
}

impl From<ProblemServiceError> for ApiError {
    fn from(e: ProblemServiceError) -> Self {
        match e {
            ProblemServiceError::Draft(e) => Self::Draft(e),
            ProblemServiceError::Storage(e) => Self::Storage(e),
            other => Self::Internal {
                message: other.to_string(),
            },
        }
    }
}

impl From<SubjectServiceError> for ApiError {
    fn from(e: SubjectServiceError) -> Self {
        match e {
            SubjectServiceError::Draft(e) => Self::Draft(e),
            SubjectServiceError::Storage(e) => Self::Storage(e),
            other => Self::Internal {
                message: other.to_string(),
            },
        }
    }
}

impl From<MockTestServiceError> for ApiError {
    fn from(e: MockTestServiceError) -> Self {
        match e {
            MockTestServiceError::Draft(e) => Self::Draft(e),
            MockTestServiceError::Storage(e) => Self::Storage(e),
            other => Self::Internal {
                message: other.to_string(),
            },
        }
    }
}

impl From<DashboardError> for ApiError {
    fn from(e: DashboardError) -> Self {
        match e {
            DashboardError::Storage(e) => Self::Storage(e),
            other => Self::Internal {
                message: other.to_string(),
            },
        }
    }
}
