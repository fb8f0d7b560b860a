//! redactia-store
//!
//! Status-check persistence. Thin wrapper around the MongoDB driver.

pub mod client;
pub mod error;
pub mod status;
