use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Client not found: {0}")]
    NotFound(String),

    #[error("Client with id '{0}' already exists")]
    AlreadyExists(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Convert ClientError to AppError for standardized error responses
impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(id) => AppError::NotFound(format!("Client {} not found", id)),
            ClientError::AlreadyExists(id) => {
                AppError::Conflict(format!("Client with id '{}' already exists", id))
            }
            ClientError::Validation(msg) => AppError::BadRequest(msg),
            ClientError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ClientError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ClientError {
    fn from(err: mongodb::error::Error) -> Self {
        ClientError::Database(err.to_string())
    }
}
