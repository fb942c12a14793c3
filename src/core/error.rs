use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::shared::validation::ValidationErrors;

#[derive(Debug, Error)]
pub enum AppError {
    /// Every rule the entity violates, in order
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("invalid category id: {0}")]
    InvalidIdentifier(#[from] uuid::Error),

    /// Storage failure, reported verbatim. A missing row surfaces here too.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    /// Re-tag any failure as not found, keeping its message
    pub fn into_not_found(self) -> Self {
        match self {
            AppError::NotFound(_) => self,
            other => AppError::NotFound(other.to_string()),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(e) => tracing::error!("Database error: {:?}", e),
            AppError::Validation(errors) => {
                tracing::debug!("Validation failed with {} violation(s)", errors.len())
            }
            _ => {}
        }

        (self.status(), self.to_string()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
