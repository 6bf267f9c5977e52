use axum::{
    Json, Router,
    extract::{Path, State},
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

use crate::error::ClientResult;
use crate::models::{ClientResponse, RegisterClient, RegisteredClient};
use crate::repository::ClientRepository;
use crate::service::ClientService;

/// OpenAPI documentation for Clients API
#[derive(OpenApi)]
#[openapi(
    paths(register_client, get_client, delete_client),
    components(
        schemas(RegisterClient, RegisteredClient, ClientResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Clients", description = "Client registry endpoints")
    )
)]
pub struct ApiDoc;

/// Create the clients router with all HTTP endpoints
pub fn router<R: ClientRepository + 'static>(service: ClientService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", put(register_client))
        .route("/{id}", get(get_client).delete(delete_client))
        .with_state(shared_service)
}

/// Register a new client
#[utoipa::path(
    put,
    path = "",
    tag = "Clients",
    request_body = RegisterClient,
    responses(
        (status = 201, description = "Client registered successfully", body = RegisteredClient),
        (status = 400, response = BadRequestValidationResponse),
        (status = 400, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn register_client<R: ClientRepository>(
    State(service): State<Arc<ClientService<R>>>,
    ValidatedJson(input): ValidatedJson<RegisterClient>,
) -> ClientResult<impl IntoResponse> {
    let client = service.register_client(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisteredClient { id: client.id }),
    ))
}

/// Get a client by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Clients",
    params(
        ("id" = String, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Client found", body = ClientResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_client<R: ClientRepository>(
    State(service): State<Arc<ClientService<R>>>,
    Path(id): Path<String>,
) -> ClientResult<Json<ClientResponse>> {
    let client = service.get_client(&id).await?;
    Ok(Json(client.into()))
}

/// Delete a client and all of its orders
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Clients",
    params(
        ("id" = String, Path, description = "Client ID")
    ),
    responses(
        (status = 204, description = "Client deleted successfully"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_client<R: ClientRepository>(
    State(service): State<Arc<ClientService<R>>>,
    Path(id): Path<String>,
) -> ClientResult<impl IntoResponse> {
    service.delete_client(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
