//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order API",
        version = "0.1.0",
        description = "Order management REST API over MongoDB: clients, products, orders and statistics",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(crate::api::cleanup::cleanup_all),
    nest(
        (path = "/clients", api = domain_clients::ApiDoc),
        (path = "/clients", api = domain_orders::ClientOrdersApiDoc),
        (path = "/products", api = domain_products::ApiDoc),
        (path = "/orders", api = domain_orders::ApiDoc),
        (path = "/statistics", api = domain_orders::StatisticsApiDoc)
    ),
    tags(
        (name = "Clients", description = "Client registry endpoints"),
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Orders", description = "Order processing endpoints"),
        (name = "Statistics", description = "Live aggregation statistics over orders"),
        (name = "Cleanup", description = "Bulk data reset for test environments")
    )
)]
pub struct ApiDoc;
