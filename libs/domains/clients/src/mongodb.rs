//! MongoDB implementation of ClientRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::{Document, doc},
};
use tracing::instrument;

use crate::error::ClientResult;
use crate::models::{Client, RegisterClient};
use crate::repository::ClientRepository;

/// MongoDB implementation of the ClientRepository
///
/// Holds a handle to the orders collection as well so that deleting a client
/// can cascade to its orders.
pub struct MongoClientRepository {
    collection: Collection<Client>,
    orders: Collection<Document>,
}

impl MongoClientRepository {
    /// Create a new MongoClientRepository
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("store");
    /// let repo = MongoClientRepository::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection::<Client>("clients"),
            orders: db.collection::<Document>("orders"),
        }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Client> {
        &self.collection
    }

    /// Build the orders filter used by the delete cascade
    fn cascade_filter(id: &str) -> Document {
        doc! { "clientId": id }
    }
}

#[async_trait]
impl ClientRepository for MongoClientRepository {
    #[instrument(skip(self, input), fields(client_id = %input.id))]
    async fn create(&self, input: RegisterClient) -> ClientResult<Client> {
        let client = Client::new(input);

        self.collection.insert_one(&client).await?;

        tracing::info!(client_id = %client.id, "Client registered successfully");
        Ok(client)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> ClientResult<Option<Client>> {
        let client = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(client)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> ClientResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count == 0 {
            return Ok(false);
        }

        // Cascade: remove the client's orders. No cross-collection
        // transaction, so a concurrent order create can interleave between
        // the two deletes.
        let orders_result = self.orders.delete_many(Self::cascade_filter(id)).await?;

        tracing::info!(
            client_id = %id,
            orders_deleted = orders_result.deleted_count,
            "Client deleted with order cascade"
        );
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: &str) -> ClientResult<bool> {
        let count = self
            .collection
            .count_documents(doc! { "_id": id })
            .await?;
        Ok(count > 0)
    }
}
