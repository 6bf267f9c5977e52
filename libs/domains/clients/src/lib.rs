//! Clients Domain
//!
//! Client registry over MongoDB: registration, lookup and deletion with a
//! cascade that removes the client's orders.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_clients::{
//!     handlers,
//!     mongodb::MongoClientRepository,
//!     service::ClientService,
//! };
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("store");
//!
//! let repository = MongoClientRepository::new(db);
//! let service = ClientService::new(repository);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ClientError, ClientResult};
pub use handlers::ApiDoc;
pub use models::{Client, ClientResponse, RegisterClient, RegisteredClient};
pub use mongodb::MongoClientRepository;
pub use repository::ClientRepository;
pub use service::ClientService;
