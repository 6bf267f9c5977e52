use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use domain_clients::ClientRepository;
use domain_products::ProductRepository;

use crate::error::OrderResult;
use crate::models::{ClientOrder, CreateOrder, CreatedOrder, OrderItem};
use crate::repository::OrderRepository;
use crate::service::OrderService;
use crate::stats::{OrderTotals, OrderValue, TopClient, TopProduct};

/// OpenAPI documentation for order creation
#[derive(OpenApi)]
#[openapi(
    paths(create_order),
    components(
        schemas(CreateOrder, CreatedOrder, OrderItem),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Orders", description = "Order processing endpoints")
    )
)]
pub struct ApiDoc;

/// OpenAPI documentation for per-client order listings
#[derive(OpenApi)]
#[openapi(
    paths(list_client_orders),
    components(
        schemas(ClientOrder, OrderItem),
        responses(NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Orders", description = "Order processing endpoints")
    )
)]
pub struct ClientOrdersApiDoc;

/// OpenAPI documentation for the statistics endpoints
#[derive(OpenApi)]
#[openapi(
    paths(top_clients, top_products, total_orders, total_order_value),
    components(
        schemas(TopClient, TopProduct, OrderTotals, OrderValue),
        responses(InternalServerErrorResponse)
    ),
    tags(
        (name = "Statistics", description = "Live aggregation statistics over orders")
    )
)]
pub struct StatisticsApiDoc;

type SharedService<R, C, P> = Arc<OrderService<R, C, P>>;

/// Create the orders router
pub fn router<R, C, P>(service: OrderService<R, C, P>) -> Router
where
    R: OrderRepository + 'static,
    C: ClientRepository + 'static,
    P: ProductRepository + 'static,
{
    Router::new()
        .route("/", put(create_order))
        .with_state(Arc::new(service))
}

/// Create the router serving per-client order listings
///
/// Mounted under the clients prefix so the path reads /clients/{id}/orders.
pub fn client_orders_router<R, C, P>(service: OrderService<R, C, P>) -> Router
where
    R: OrderRepository + 'static,
    C: ClientRepository + 'static,
    P: ProductRepository + 'static,
{
    Router::new()
        .route("/{id}/orders", get(list_client_orders))
        .with_state(Arc::new(service))
}

/// Create the statistics router
pub fn statistics_router<R, C, P>(service: OrderService<R, C, P>) -> Router
where
    R: OrderRepository + 'static,
    C: ClientRepository + 'static,
    P: ProductRepository + 'static,
{
    Router::new()
        .route("/top/clients", get(top_clients))
        .route("/top/products", get(top_products))
        .route("/orders/total", get(total_orders))
        .route("/orders/totalValue", get(total_order_value))
        .with_state(Arc::new(service))
}

/// Create a new order
#[utoipa::path(
    put,
    path = "",
    tag = "Orders",
    request_body = CreateOrder,
    responses(
        (status = 200, description = "Order created successfully", body = CreatedOrder),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_order<R, C, P>(
    State(service): State<SharedService<R, C, P>>,
    ValidatedJson(input): ValidatedJson<CreateOrder>,
) -> OrderResult<Json<CreatedOrder>>
where
    R: OrderRepository,
    C: ClientRepository,
    P: ProductRepository,
{
    let order = service.create_order(input).await?;
    Ok(Json(CreatedOrder { id: order.id }))
}

/// List a client's orders
#[utoipa::path(
    get,
    path = "/{id}/orders",
    tag = "Orders",
    params(
        ("id" = String, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Orders for the client", body = Vec<ClientOrder>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_client_orders<R, C, P>(
    State(service): State<SharedService<R, C, P>>,
    Path(id): Path<String>,
) -> OrderResult<Json<Vec<ClientOrder>>>
where
    R: OrderRepository,
    C: ClientRepository,
    P: ProductRepository,
{
    let orders = service.list_client_orders(&id).await?;
    Ok(Json(orders))
}

/// Top 10 clients by number of orders
#[utoipa::path(
    get,
    path = "/top/clients",
    tag = "Statistics",
    responses(
        (status = 200, description = "Clients with the most orders, descending", body = Vec<TopClient>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn top_clients<R, C, P>(
    State(service): State<SharedService<R, C, P>>,
) -> OrderResult<Json<Vec<TopClient>>>
where
    R: OrderRepository,
    C: ClientRepository,
    P: ProductRepository,
{
    let top = service.top_clients().await?;
    Ok(Json(top))
}

/// Top 10 products by total ordered quantity
#[utoipa::path(
    get,
    path = "/top/products",
    tag = "Statistics",
    responses(
        (status = 200, description = "Products with the largest ordered quantity, descending", body = Vec<TopProduct>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn top_products<R, C, P>(
    State(service): State<SharedService<R, C, P>>,
) -> OrderResult<Json<Vec<TopProduct>>>
where
    R: OrderRepository,
    C: ClientRepository,
    P: ProductRepository,
{
    let top = service.top_products().await?;
    Ok(Json(top))
}

/// Total number of orders
#[utoipa::path(
    get,
    path = "/orders/total",
    tag = "Statistics",
    responses(
        (status = 200, description = "Order count", body = OrderTotals),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn total_orders<R, C, P>(
    State(service): State<SharedService<R, C, P>>,
) -> OrderResult<Json<OrderTotals>>
where
    R: OrderRepository,
    C: ClientRepository,
    P: ProductRepository,
{
    let totals = service.total_orders().await?;
    Ok(Json(totals))
}

/// Combined value of all orders at current product prices
#[utoipa::path(
    get,
    path = "/orders/totalValue",
    tag = "Statistics",
    responses(
        (status = 200, description = "Total order value; 0.0 when no priced items exist", body = OrderValue),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn total_order_value<R, C, P>(
    State(service): State<SharedService<R, C, P>>,
) -> OrderResult<Json<OrderValue>>
where
    R: OrderRepository,
    C: ClientRepository,
    P: ProductRepository,
{
    let value = service.total_order_value().await?;
    Ok(Json(value))
}
