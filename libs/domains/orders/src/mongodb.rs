//! MongoDB implementation of OrderRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::{Document, doc, from_document},
    options::{FindOneAndUpdateOptions, ReturnDocument},
};
use tracing::instrument;

use crate::error::{OrderError, OrderResult};
use crate::models::{CreateOrder, Order};
use crate::repository::OrderRepository;
use crate::stats::{
    OrderValue, TopClient, TopProduct, top_clients_pipeline, top_products_pipeline,
    total_value_pipeline,
};

/// MongoDB implementation of the OrderRepository
///
/// Order identifiers come from a `counters` collection that is incremented
/// atomically with findOneAndUpdate, so concurrent creates never hand out
/// the same `ord<N>` token.
pub struct MongoOrderRepository {
    collection: Collection<Order>,
    counters: Collection<Document>,
}

impl MongoOrderRepository {
    /// Create a new MongoOrderRepository
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("store");
    /// let repo = MongoOrderRepository::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection::<Order>("orders"),
            counters: db.collection::<Document>("counters"),
        }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Order> {
        &self.collection
    }

    /// Extract the sequence number from a counter document
    fn counter_seq(counter: &Document) -> OrderResult<i64> {
        // The $inc result is i64 here, but tolerate i32 in case the counter
        // document was seeded by hand.
        counter
            .get_i64("seq")
            .or_else(|_| counter.get_i32("seq").map(i64::from))
            .map_err(|e| OrderError::Database(format!("order counter malformed: {}", e)))
    }

    /// Atomically draw the next value from the order counter
    async fn next_order_id(&self) -> OrderResult<String> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .counters
            .find_one_and_update(doc! { "_id": "orders" }, doc! { "$inc": { "seq": 1_i64 } })
            .with_options(options)
            .await?
            .ok_or_else(|| OrderError::Database("order counter upsert returned no document".to_string()))?;

        let seq = Self::counter_seq(&counter)?;

        Ok(format!("ord{}", seq))
    }
}

#[async_trait]
impl OrderRepository for MongoOrderRepository {
    #[instrument(skip(self, input), fields(client_id = %input.client_id))]
    async fn create(&self, input: CreateOrder) -> OrderResult<Order> {
        let order = Order {
            id: self.next_order_id().await?,
            client_id: input.client_id,
            items: input.items,
        };

        self.collection.insert_one(&order).await?;

        tracing::info!(order_id = %order.id, "Order created successfully");
        Ok(order)
    }

    #[instrument(skip(self))]
    async fn list_by_client(&self, client_id: &str) -> OrderResult<Vec<Order>> {
        use futures_util::TryStreamExt;

        let cursor = self
            .collection
            .find(doc! { "clientId": client_id })
            .await?;
        let orders: Vec<Order> = cursor.try_collect().await?;

        Ok(orders)
    }

    #[instrument(skip(self))]
    async fn top_clients(&self) -> OrderResult<Vec<TopClient>> {
        use futures_util::TryStreamExt;

        let cursor = self.collection.aggregate(top_clients_pipeline()).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        documents
            .into_iter()
            .map(|doc| {
                from_document(doc).map_err(|e| OrderError::Database(e.to_string()))
            })
            .collect()
    }

    #[instrument(skip(self))]
    async fn top_products(&self) -> OrderResult<Vec<TopProduct>> {
        use futures_util::TryStreamExt;

        let cursor = self.collection.aggregate(top_products_pipeline()).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        documents
            .into_iter()
            .map(|doc| {
                from_document(doc).map_err(|e| OrderError::Database(e.to_string()))
            })
            .collect()
    }

    #[instrument(skip(self))]
    async fn count(&self) -> OrderResult<u64> {
        let count = self.collection.count_documents(doc! {}).await?;
        Ok(count)
    }

    #[instrument(skip(self))]
    async fn total_value(&self) -> OrderResult<f64> {
        use futures_util::TryStreamExt;

        let cursor = self.collection.aggregate(total_value_pipeline()).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        // No matched items means the $group stage emitted nothing; report a
        // zero total rather than an error.
        match documents.into_iter().next() {
            Some(doc) => {
                let value: OrderValue =
                    from_document(doc).map_err(|e| OrderError::Database(e.to_string()))?;
                Ok(value.total_value)
            }
            None => Ok(0.0),
        }
    }
}
