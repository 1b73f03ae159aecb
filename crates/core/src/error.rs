use thiserror::Error;

use crate::providers::ProviderError;
use crate::storage::{repository_error_to_status_code, RepositoryError};
use crate::users::TokenError;

/// Application error returned by the services when a business rule rejects
/// the request.
///
/// Carries the message shown to the client and an HTTP-equivalent status
/// code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AppError {
    pub message: String,
    pub status_code: u16,
}

impl AppError {
    /// Creates a new application error with status 400.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_status(message, 400)
    }

    /// Creates a new application error with an explicit status code.
    pub fn with_status(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            status_code,
        }
    }

    /// Creates a new application error with status 401.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::with_status(message, 401)
    }
}

/// Errors returned by the use-case services.
///
/// Business rule violations surface as [`AppError`]; failures of the
/// injected collaborators propagate unchanged in their own variants.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    App(#[from] AppError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Token(#[from] TokenError),
}

impl ServiceError {
    /// Returns the HTTP-equivalent status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::App(err) => err.status_code,
            ServiceError::Repository(err) => repository_error_to_status_code(err),
            ServiceError::Provider(_) | ServiceError::Token(_) => 500,
        }
    }

    /// Returns the application error if this is a business rule violation.
    pub fn as_app_error(&self) -> Option<&AppError> {
        match self {
            ServiceError::App(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
