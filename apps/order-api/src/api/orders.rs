//! Orders API routes
//!
//! Wires the orders domain to HTTP routes. The order service needs all
//! three repositories: the client and product repositories back the
//! referential checks performed at order creation.

use axum::Router;
use domain_clients::MongoClientRepository;
use domain_orders::{MongoOrderRepository, OrderService, handlers};
use domain_products::MongoProductRepository;

use crate::state::AppState;

/// Build an order service over the MongoDB repositories
pub(crate) fn order_service(
    state: &AppState,
) -> OrderService<MongoOrderRepository, MongoClientRepository, MongoProductRepository> {
    OrderService::new(
        MongoOrderRepository::new(state.db.clone()),
        MongoClientRepository::new(state.db.clone()),
        MongoProductRepository::new(state.db.clone()),
    )
}

/// Create orders router
pub fn router(state: &AppState) -> Router {
    handlers::router(order_service(state))
}

/// Create the router serving /clients/{id}/orders
pub fn client_orders_router(state: &AppState) -> Router {
    handlers::client_orders_router(order_service(state))
}
