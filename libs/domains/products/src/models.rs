use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Product entity as stored in MongoDB
///
/// The identifier is externally supplied at registration time and stored as
/// the document `_id`. Products are immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Product name
    pub name: String,
    /// Category used for filtered listings
    pub category: String,
    /// Free-form description
    pub description: String,
    /// Unit price, non-negative
    pub price: f64,
}

/// Product representation returned over HTTP
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            category: product.category,
            description: product.description,
            price: product.price,
        }
    }
}

/// DTO for registering a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterProduct {
    #[validate(length(min = 1, max = 100))]
    pub id: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
}

/// Response body for a successful registration
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RegisteredProduct {
    pub id: String,
}

/// Query filters for listing products
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct ProductFilter {
    /// Filter by category
    pub category: Option<String>,
}

impl Product {
    /// Build a product entity from a registration request
    pub fn new(input: RegisterProduct) -> Self {
        Self {
            id: input.id,
            name: input.name,
            category: input.category,
            description: input.description,
            price: input.price,
        }
    }
}
