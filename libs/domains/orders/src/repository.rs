use async_trait::async_trait;

use crate::error::OrderResult;
use crate::models::{CreateOrder, Order};
use crate::stats::{TopClient, TopProduct};

/// Repository trait for order persistence and statistics
///
/// Identifier assignment is the repository's responsibility so that the
/// sequential `ord<N>` counter lives next to the data it numbers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a validated order under a freshly assigned identifier
    async fn create(&self, input: CreateOrder) -> OrderResult<Order>;

    /// List every order belonging to one client
    async fn list_by_client(&self, client_id: &str) -> OrderResult<Vec<Order>>;

    /// Top 10 clients by number of orders, descending
    async fn top_clients(&self) -> OrderResult<Vec<TopClient>>;

    /// Top 10 products by total ordered quantity, descending
    async fn top_products(&self) -> OrderResult<Vec<TopProduct>>;

    /// Total number of orders in the store
    async fn count(&self) -> OrderResult<u64>;

    /// Combined value of all orders at current product prices
    ///
    /// Items whose product no longer exists are excluded. Returns 0.0 when
    /// nothing matches.
    async fn total_value(&self) -> OrderResult<f64>;
}
