//! Statistics result types and their aggregation pipelines
//!
//! All statistics are computed live against the orders collection; the
//! pipeline shapes its output to match the serde names on these structs so
//! result documents deserialize directly.

use mongodb::bson::{Bson, Document, doc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Per-client order count, as returned by the top-clients query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopClient {
    pub client_id: String,
    pub total_orders: i64,
}

/// Per-product ordered quantity, as returned by the top-products query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    pub product_id: String,
    pub total_quantity: i64,
}

/// Total number of orders in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderTotals {
    pub total: u64,
}

/// Combined value of all orders at current product prices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderValue {
    pub total_value: f64,
}

/// Pipeline: group orders by client, count per client, top 10 by count.
pub fn top_clients_pipeline() -> Vec<Document> {
    vec![
        doc! {
            "$group": {
                "_id": "$clientId",
                "totalOrders": { "$sum": 1 }
            }
        },
        doc! { "$sort": { "totalOrders": -1 } },
        doc! { "$limit": 10 },
        doc! {
            "$project": {
                "_id": 0,
                "clientId": "$_id",
                "totalOrders": 1
            }
        },
    ]
}

/// Pipeline: flatten order items, sum quantity per product, top 10 by sum.
pub fn top_products_pipeline() -> Vec<Document> {
    vec![
        doc! { "$unwind": "$items" },
        doc! {
            "$group": {
                "_id": "$items.productId",
                "totalQuantity": { "$sum": "$items.quantity" }
            }
        },
        doc! { "$sort": { "totalQuantity": -1 } },
        doc! { "$limit": 10 },
        doc! {
            "$project": {
                "_id": 0,
                "productId": "$_id",
                "totalQuantity": 1
            }
        },
    ]
}

/// Pipeline: flatten order items, join each against the products collection
/// for the current price, and sum quantity * price.
///
/// Items whose product has been deleted are dropped by the join, so they
/// contribute nothing to the total. With no matched items the pipeline
/// yields no row at all; the repository turns that into a zero total.
pub fn total_value_pipeline() -> Vec<Document> {
    vec![
        doc! { "$unwind": "$items" },
        doc! {
            "$lookup": {
                "from": "products",
                "localField": "items.productId",
                "foreignField": "_id",
                "as": "productDetails"
            }
        },
        doc! { "$unwind": "$productDetails" },
        doc! {
            "$group": {
                "_id": Bson::Null,
                "totalValue": {
                    "$sum": { "$multiply": ["$items.quantity", "$productDetails.price"] }
                }
            }
        },
        doc! {
            "$project": {
                "_id": 0,
                "totalValue": 1
            }
        },
    ]
}
