use crate::error::ValidationError;

/// Maximum accepted input length, counted in Unicode code points of the
/// raw (untrimmed) text.
pub const MAX_TEXT_CHARS: usize = 4000;

/// Input text that passed validation. Always holds the trimmed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedText(String);

impl ValidatedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in Unicode code points.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

/// Validate raw request text.
///
/// Rejects text that is empty after trimming, then text whose raw length
/// exceeds [`MAX_TEXT_CHARS`] code points. The length check runs on the
/// untrimmed input, so whitespace padding counts against the limit. The
/// accepted value is the trimmed text; trimming is the only normalization.
pub fn validate_text(raw: &str) -> Result<ValidatedText, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    if raw.chars().count() > MAX_TEXT_CHARS {
        return Err(ValidationError::TextTooLong);
    }
    Ok(ValidatedText(trimmed.to_string()))
}
