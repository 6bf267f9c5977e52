//! Statistics API routes
//!
//! Wires the aggregation statistics endpoints to HTTP routes.

use axum::Router;

use crate::api::orders::order_service;
use crate::state::AppState;

/// Create statistics router
pub fn router(state: &AppState) -> Router {
    domain_orders::handlers::statistics_router(order_service(state))
}
