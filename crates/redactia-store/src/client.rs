use mongodb::{Client, Database};
use tracing::info;

use crate::error::StoreError;

/// Build a database handle from a connection string and database name.
///
/// The driver connects lazily: an unreachable server surfaces on the first
/// operation, not here. Only a malformed connection string fails.
pub async fn connect(uri: &str, db_name: &str) -> Result<Database, StoreError> {
    let client = Client::with_uri_str(uri)
        .await
        .map_err(|e| StoreError::Connect(e.to_string()))?;

    info!(db_name, "database handle ready");

    Ok(client.database(db_name))
}
