use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, ConflictResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{ProductFilter, ProductResponse, RegisterProduct, RegisteredProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(register_product, list_products, get_product, delete_product),
    components(
        schemas(RegisterProduct, RegisteredProduct, ProductResponse, ProductFilter),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", put(register_product).get(list_products))
        .route("/{id}", get(get_product).delete(delete_product))
        .with_state(shared_service)
}

/// Register a new product
#[utoipa::path(
    put,
    path = "",
    tag = "Products",
    request_body = RegisterProduct,
    responses(
        (status = 201, description = "Product registered successfully", body = RegisteredProduct),
        (status = 400, response = BadRequestValidationResponse),
        (status = 400, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn register_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<RegisterProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.register_product(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisteredProduct { id: product.id }),
    ))
}

/// List products, optionally filtered by category
///
/// The category filter travels as a `?category=` query parameter. A JSON
/// request body on this endpoint is ignored.
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductFilter),
    responses(
        (status = 200, description = "List of products", body = Vec<ProductResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    filter: Result<Query<ProductFilter>, QueryRejection>,
) -> ProductResult<Json<Vec<ProductResponse>>> {
    // An absent or unparsable query string means no filter.
    let filter = filter.map(|Query(f)| f).unwrap_or_default();

    let products = service.list_products(filter).await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<ProductResponse>> {
    let product = service.get_product(&id).await?;
    Ok(Json(product.into()))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<impl IntoResponse> {
    service.delete_product(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
