use thiserror::Error;

use crate::validate::MAX_TEXT_CHARS;

/// Rejections produced by input validation, before any external call.
///
/// The display strings are the exact Spanish messages shown to API clients.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("El texto no puede estar vacío")]
    EmptyInput,

    #[error("El texto excede el límite de {max} caracteres", max = MAX_TEXT_CHARS)]
    TextTooLong,
}
