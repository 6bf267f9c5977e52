use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Client entity as stored in MongoDB
///
/// The identifier is externally supplied at registration time and stored as
/// the document `_id`. Clients are immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Client {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
}

/// Client representation returned over HTTP
///
/// Same fields as the stored entity, with the identifier under `id` rather
/// than the raw `_id` key.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClientResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            name: client.name,
            email: client.email,
        }
    }
}

/// DTO for registering a new client
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterClient {
    #[validate(length(min = 1, max = 100))]
    pub id: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 200))]
    pub email: String,
}

/// Response body for a successful registration
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RegisteredClient {
    pub id: String,
}

impl Client {
    /// Build a client entity from a registration request
    pub fn new(input: RegisterClient) -> Self {
        Self {
            id: input.id,
            name: input.name,
            email: input.email,
        }
    }
}
