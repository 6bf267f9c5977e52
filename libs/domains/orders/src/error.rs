use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_clients::ClientError;
use domain_products::ProductError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Client not found: {0}")]
    ClientNotFound(String),

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type OrderResult<T> = Result<T, OrderError>;

/// Convert OrderError to AppError for standardized error responses
impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::ClientNotFound(id) => {
                AppError::NotFound(format!("Client {} not found", id))
            }
            OrderError::ProductNotFound(id) => {
                AppError::NotFound(format!("Product {} not found", id))
            }
            OrderError::Validation(msg) => AppError::BadRequest(msg),
            OrderError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for OrderError {
    fn from(err: mongodb::error::Error) -> Self {
        OrderError::Database(err.to_string())
    }
}

/// Errors surfaced while checking the client reference
impl From<ClientError> for OrderError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(id) => OrderError::ClientNotFound(id),
            other => OrderError::Database(other.to_string()),
        }
    }
}

/// Errors surfaced while checking product references
impl From<ProductError> for OrderError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => OrderError::ProductNotFound(id),
            other => OrderError::Database(other.to_string()),
        }
    }
}
