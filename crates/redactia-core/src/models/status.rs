use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A health-check ping recorded by a client. Append-only; never updated
/// or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: Uuid,
    pub client_name: String,
    pub timestamp: jiff::Timestamp,
}

impl StatusCheck {
    /// Stamp a new check with a fresh id and the current instant.
    pub fn new(client_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_name,
            timestamp: jiff::Timestamp::now(),
        }
    }
}
