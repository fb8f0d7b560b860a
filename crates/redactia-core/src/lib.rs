//! redactia-core
//!
//! Pure domain types and input validation for the Redactia clear-language
//! analyzer. No I/O and no HTTP; this is the shared vocabulary of the system.

pub mod error;
pub mod models;
pub mod validate;
