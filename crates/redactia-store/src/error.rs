use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid connection string: {0}")]
    Connect(String),

    #[error("insert failed: {0}")]
    Insert(String),

    #[error("find failed: {0}")]
    Find(String),
}
