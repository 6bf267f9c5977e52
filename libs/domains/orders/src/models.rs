use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// One line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product referenced by this line
    pub product_id: String,
    /// Ordered quantity, must be at least 1
    pub quantity: i64,
}

/// Order entity as stored in MongoDB
///
/// The identifier is a sequential `ord<N>` token assigned at creation time.
/// Orders are immutable; they are only removed as a cascade of client
/// deletion.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Sequential identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Owning client
    pub client_id: String,
    /// Ordered item lines, kept verbatim from the request
    pub items: Vec<OrderItem>,
}

/// DTO for creating a new order
///
/// Referential checks (client and product existence, positive quantities)
/// happen in the service layer, item by item.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    pub client_id: String,
    pub items: Vec<OrderItem>,
}

/// Response body for a successful order creation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreatedOrder {
    pub id: String,
}

/// Order as returned from the per-client listing
///
/// The client ID is dropped from each record since the listing is already
/// scoped to one client.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClientOrder {
    pub id: String,
    pub items: Vec<OrderItem>,
}

impl From<Order> for ClientOrder {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            items: order.items,
        }
    }
}
