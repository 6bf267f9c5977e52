use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{Product, ProductFilter, RegisterProduct};

/// Repository trait for product persistence
///
/// Implementations can use different storage backends (MongoDB, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product
    async fn create(&self, input: RegisterProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// List products with an optional category filter
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    /// Delete a product by ID
    ///
    /// Returns false when no product with the given ID exists. Existing
    /// orders referencing the product are left untouched.
    async fn delete(&self, id: &str) -> ProductResult<bool>;

    /// Check whether a product ID is already taken
    async fn exists(&self, id: &str) -> ProductResult<bool>;
}
