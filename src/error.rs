//! Error types for the todo service.
//!
//! One enum covers validation, lookup, persistence and template failures.
//! The HTTP status for each variant lives here too so handlers can just `?`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    /// Submitted text was blank after trimming
    #[error("Todo text cannot be empty")]
    EmptyText,

    /// Path segment that should be a todo id did not parse
    #[error("Invalid todo ID: {0:?}")]
    InvalidId(String),

    /// Path shape or method not understood under /todos/
    #[error("Invalid request")]
    InvalidRequest,

    #[error("todo with id {0} not found")]
    NotFound(u64),

    /// No identifier left to hand out
    #[error("todo ids exhausted")]
    IdsExhausted,

    /// Reading or writing the backing file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding a record for the backing file failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),
}

pub type Result<T> = std::result::Result<T, TodoError>;

impl TodoError {
    pub fn status(&self) -> StatusCode {
        match self {
            TodoError::EmptyText | TodoError::InvalidId(_) | TodoError::InvalidRequest => {
                StatusCode::BAD_REQUEST
            }
            TodoError::NotFound(_) => StatusCode::NOT_FOUND,
            TodoError::IdsExhausted
            | TodoError::Io(_)
            | TodoError::Json(_)
            | TodoError::Template(_)
            | TodoError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body text sent to the client. Server-side failures stay generic.
    fn public_message(&self) -> String {
        match self {
            TodoError::Io(_) | TodoError::Json(_) => "Failed to save todos".to_string(),
            TodoError::IdsExhausted => "Failed to add todo".to_string(),
            TodoError::Template(_) | TodoError::Render(_) => "Template error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            TodoError::NotFound(id) => tracing::warn!(id, "todo not found"),
            _ if status.is_server_error() => tracing::error!(error = %self, "request failed"),
            _ => tracing::debug!(error = %self, "rejected request"),
        }
        (status, self.public_message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_bad_request() {
        assert_eq!(TodoError::EmptyText.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            TodoError::InvalidId("abc".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(TodoError::InvalidRequest.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_is_distinct_from_bad_request() {
        let err = TodoError::NotFound(42);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "todo with id 42 not found");
    }

    #[test]
    fn io_error_conversion_is_server_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: TodoError = io_err.into();
        assert!(matches!(err, TodoError::Io(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Failed to save todos");
    }

    #[test]
    fn exhausted_ids_is_server_error() {
        let err = TodoError::IdsExhausted;
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Failed to add todo");
    }

    #[test]
    fn invalid_id_message_quotes_segment() {
        let err = TodoError::InvalidId("12x".to_string());
        assert_eq!(err.to_string(), "Invalid todo ID: \"12x\"");
    }

    #[test]
    fn into_response_carries_status() {
        let resp = TodoError::NotFound(9).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
