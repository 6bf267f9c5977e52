//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use mongodb::{Collection, Database, bson::doc};
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{Product, ProductFilter, RegisterProduct};
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("store");
    /// let repo = MongoProductRepository::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection::<Product>("products"),
        }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Product> {
        &self.collection
    }

    /// Build a MongoDB filter document from ProductFilter
    fn build_filter(filter: &ProductFilter) -> mongodb::bson::Document {
        let mut doc = doc! {};

        if let Some(ref category) = filter.category {
            doc.insert("category", category);
        }

        doc
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, input), fields(product_id = %input.id))]
    async fn create(&self, input: RegisterProduct) -> ProductResult<Product> {
        let product = Product::new(input);

        self.collection.insert_one(&product).await?;

        tracing::info!(product_id = %product.id, "Product registered successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let product = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        use futures_util::TryStreamExt;

        let mongo_filter = Self::build_filter(&filter);

        let cursor = self.collection.find(mongo_filter).await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> ProductResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count == 0 {
            return Ok(false);
        }

        tracing::info!(product_id = %id, "Product deleted successfully");
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: &str) -> ProductResult<bool> {
        let count = self
            .collection
            .count_documents(doc! { "_id": id })
            .await?;
        Ok(count > 0)
    }
}
