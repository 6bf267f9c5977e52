//! API routes module
//!
//! Wires every domain router, the statistics endpoints and the cleanup and
//! health routes into one application router.

pub mod cleanup;
pub mod clients;
pub mod health;
pub mod orders;
pub mod products;
pub mod statistics;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest(
            "/clients",
            clients::router(state).merge(orders::client_orders_router(state)),
        )
        .nest("/products", products::router(state))
        .nest("/orders", orders::router(state))
        .nest("/statistics", statistics::router(state))
        .merge(cleanup::router(state.clone()))
        .merge(health::router(state.clone()))
}
