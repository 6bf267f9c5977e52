//! Clients API routes
//!
//! Wires the clients domain to HTTP routes.

use axum::Router;
use domain_clients::{ClientService, MongoClientRepository, handlers};

use crate::state::AppState;

/// Create clients router
pub fn router(state: &AppState) -> Router {
    let repository = MongoClientRepository::new(state.db.clone());
    let service = ClientService::new(repository);

    handlers::router(service)
}
