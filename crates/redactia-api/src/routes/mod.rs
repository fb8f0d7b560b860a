pub mod analyze;
pub mod root;
pub mod status;
