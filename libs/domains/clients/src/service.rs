//! Client Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ClientError, ClientResult};
use crate::models::{Client, RegisterClient};
use crate::repository::ClientRepository;

/// Client service providing business logic operations
///
/// Handles validation and duplicate checks before delegating to the
/// repository.
pub struct ClientService<R: ClientRepository> {
    repository: Arc<R>,
}

impl<R: ClientRepository> ClientService<R> {
    /// Create a new ClientService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Register a new client
    ///
    /// Fails when the externally supplied ID is already taken.
    #[instrument(skip(self, input), fields(client_id = %input.id))]
    pub async fn register_client(&self, input: RegisterClient) -> ClientResult<Client> {
        input
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;

        if self.repository.exists(&input.id).await? {
            return Err(ClientError::AlreadyExists(input.id));
        }

        self.repository.create(input).await
    }

    /// Get a client by ID
    #[instrument(skip(self))]
    pub async fn get_client(&self, id: &str) -> ClientResult<Client> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ClientError::NotFound(id.to_string()))
    }

    /// Delete a client and cascade to its orders
    #[instrument(skip(self))]
    pub async fn delete_client(&self, id: &str) -> ClientResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ClientError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

impl<R: ClientRepository> Clone for ClientService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockClientRepository;
    use mockall::predicate::eq;

    fn register_input() -> RegisterClient {
        RegisterClient {
            id: "c1".to_string(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_client_success() {
        let mut repo = MockClientRepository::new();
        repo.expect_exists()
            .with(eq("c1"))
            .times(1)
            .returning(|_| Ok(false));
        repo.expect_create()
            .times(1)
            .returning(|input| Ok(Client::new(input)));

        let service = ClientService::new(repo);
        let client = service.register_client(register_input()).await.unwrap();
        assert_eq!(client.id, "c1");
    }

    #[tokio::test]
    async fn test_register_client_duplicate_id() {
        let mut repo = MockClientRepository::new();
        repo.expect_exists()
            .with(eq("c1"))
            .times(1)
            .returning(|_| Ok(true));
        repo.expect_create().times(0);

        let service = ClientService::new(repo);
        let result = service.register_client(register_input()).await;
        assert!(matches!(result, Err(ClientError::AlreadyExists(id)) if id == "c1"));
    }

    #[tokio::test]
    async fn test_register_client_empty_email() {
        let mut repo = MockClientRepository::new();
        repo.expect_exists().times(0);
        repo.expect_create().times(0);

        let service = ClientService::new(repo);
        let result = service
            .register_client(RegisterClient {
                id: "c1".to_string(),
                name: "Alice".to_string(),
                email: "".to_string(),
            })
            .await;
        assert!(matches!(result, Err(ClientError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_client_found() {
        let mut repo = MockClientRepository::new();
        repo.expect_get_by_id().with(eq("c1")).returning(|_| {
            Ok(Some(Client {
                id: "c1".to_string(),
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            }))
        });

        let service = ClientService::new(repo);
        let client = service.get_client("c1").await.unwrap();
        assert_eq!(client.name, "Alice");
    }

    #[tokio::test]
    async fn test_get_client_not_found() {
        let mut repo = MockClientRepository::new();
        repo.expect_get_by_id()
            .with(eq("missing"))
            .returning(|_| Ok(None));

        let service = ClientService::new(repo);
        let result = service.get_client("missing").await;
        assert!(matches!(result, Err(ClientError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_client_success() {
        let mut repo = MockClientRepository::new();
        repo.expect_delete()
            .with(eq("c1"))
            .times(1)
            .returning(|_| Ok(true));

        let service = ClientService::new(repo);
        assert!(service.delete_client("c1").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_client_not_found() {
        let mut repo = MockClientRepository::new();
        repo.expect_delete()
            .with(eq("missing"))
            .returning(|_| Ok(false));

        let service = ClientService::new(repo);
        let result = service.delete_client("missing").await;
        assert!(matches!(result, Err(ClientError::NotFound(_))));
    }
}
