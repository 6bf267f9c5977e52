//! Orders Domain
//!
//! Order processing and statistics over MongoDB. Order creation validates
//! referential integrity against the client registry and product catalog,
//! then persists the order under a sequential `ord<N>` identifier drawn from
//! a store-owned counter. Statistics are computed live with aggregation
//! pipelines.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_clients::mongodb::MongoClientRepository;
//! use domain_orders::{handlers, mongodb::MongoOrderRepository, service::OrderService};
//! use domain_products::mongodb::MongoProductRepository;
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("store");
//!
//! let service = OrderService::new(
//!     MongoOrderRepository::new(db.clone()),
//!     MongoClientRepository::new(db.clone()),
//!     MongoProductRepository::new(db),
//! );
//!
//! let orders = handlers::router(service.clone());
//! let statistics = handlers::statistics_router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;
pub mod stats;

// Re-export commonly used types
pub use error::{OrderError, OrderResult};
pub use handlers::{ApiDoc, ClientOrdersApiDoc, StatisticsApiDoc};
pub use models::{ClientOrder, CreateOrder, CreatedOrder, Order, OrderItem};
pub use mongodb::MongoOrderRepository;
pub use repository::OrderRepository;
pub use service::OrderService;
pub use stats::{OrderTotals, OrderValue, TopClient, TopProduct};
