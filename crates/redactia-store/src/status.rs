use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Database;
use tracing::info;

use redactia_core::models::status::StatusCheck;

use crate::error::StoreError;

const COLLECTION: &str = "status_checks";

/// Append one status check. Checks are never updated or deleted.
///
/// The driver serializes through serde, so `id` lands as a UUID string and
/// `timestamp` as an ISO-8601 string.
pub async fn append_status_check(db: &Database, check: &StatusCheck) -> Result<(), StoreError> {
    db.collection::<StatusCheck>(COLLECTION)
        .insert_one(check)
        .await
        .map_err(|e| StoreError::Insert(e.to_string()))?;

    info!(id = %check.id, client_name = %check.client_name, "status check recorded");

    Ok(())
}

/// List every status check in insertion order.
///
/// MongoDB's `_id` is projected out so documents deserialize straight into
/// [`StatusCheck`]. No sort and no cap: natural order, all documents.
pub async fn list_status_checks(db: &Database) -> Result<Vec<StatusCheck>, StoreError> {
    let cursor = db
        .collection::<StatusCheck>(COLLECTION)
        .find(doc! {})
        .projection(doc! { "_id": 0 })
        .await
        .map_err(|e| StoreError::Find(e.to_string()))?;

    cursor
        .try_collect()
        .await
        .map_err(|e| StoreError::Find(e.to_string()))
}
