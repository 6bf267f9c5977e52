//! Bulk data reset endpoint
//!
//! Removes every document from every collection in the database. Intended
//! for test and demo environments only; there is no confirmation step.

use axum::{Router, extract::State, http::StatusCode, routing::post};
use axum_helpers::AppError;
use mongodb::{
    Database,
    bson::{Document, doc},
};
use tracing::info;

use crate::state::AppState;

/// Create the cleanup router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/cleanup", post(cleanup_all))
        .with_state(state)
}

/// Remove every document from every collection, the order counter included
pub(crate) async fn purge_database(db: &Database) -> Result<Vec<String>, mongodb::error::Error> {
    let collections = db.list_collection_names().await?;

    for name in &collections {
        db.collection::<Document>(name).delete_many(doc! {}).await?;
    }

    Ok(collections)
}

/// Delete all documents from every collection
#[utoipa::path(
    post,
    path = "/cleanup",
    tag = "Cleanup",
    responses(
        (status = 204, description = "All collections emptied"),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn cleanup_all(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let collections = purge_database(&state.db)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    info!(collections = collections.len(), "All collections emptied");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_purge_empties_every_collection_including_counters() {
        let mongo_url = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let client = mongodb::Client::with_uri_str(&mongo_url).await.unwrap();
        let db = client.database("cleanup_test");
        db.drop().await.unwrap();

        db.collection::<Document>("clients")
            .insert_one(doc! { "_id": "c1", "name": "Alice", "email": "alice@example.com" })
            .await
            .unwrap();
        db.collection::<Document>("products")
            .insert_one(doc! { "_id": "p1", "name": "Widget", "category": "", "description": "", "price": 5.0 })
            .await
            .unwrap();
        db.collection::<Document>("orders")
            .insert_one(doc! { "_id": "ord1", "clientId": "c1", "items": [] })
            .await
            .unwrap();
        db.collection::<Document>("counters")
            .insert_one(doc! { "_id": "orders", "seq": 1_i64 })
            .await
            .unwrap();

        let purged = purge_database(&db).await.unwrap();
        assert_eq!(purged.len(), 4);

        for name in ["clients", "products", "orders", "counters"] {
            let count = db
                .collection::<Document>(name)
                .count_documents(doc! {})
                .await
                .unwrap();
            assert_eq!(count, 0, "collection {} not empty", name);
        }
    }
}
