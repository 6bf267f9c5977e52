use async_trait::async_trait;

use crate::error::ClientResult;
use crate::models::{Client, RegisterClient};

/// Repository trait for client persistence
///
/// Implementations can use different storage backends (MongoDB, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Insert a new client
    async fn create(&self, input: RegisterClient) -> ClientResult<Client>;

    /// Get a client by ID
    async fn get_by_id(&self, id: &str) -> ClientResult<Option<Client>>;

    /// Delete a client and every order that references it
    ///
    /// Returns false when no client with the given ID exists.
    async fn delete(&self, id: &str) -> ClientResult<bool>;

    /// Check whether a client ID is already taken
    async fn exists(&self, id: &str) -> ClientResult<bool>;
}
