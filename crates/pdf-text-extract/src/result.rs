//! The uniform record every invocation produces.

use serde::Serialize;

use crate::error::ShimError;

/// Outcome of one extraction, serialized as a single JSON object.
///
/// On success `error` is `null` and `length` holds the character count of
/// `text`. On failure `text` is empty and `length` is omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    success: bool,
    error: Option<String>,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    length: Option<usize>,
}

impl ExtractionResult {
    /// Successful result for already-trimmed text.
    pub fn success(text: String) -> Self {
        let length = text.chars().count();
        Self {
            success: true,
            error: None,
            text,
            length: Some(length),
        }
    }

    /// Failed result with a human-readable message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            text: String::new(),
            length: None,
        }
    }

    /// Whether the document yielded usable text.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Failure message, `None` on success.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Trimmed text, empty on failure.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Character count of [`text`](Self::text), `None` on failure.
    pub fn length(&self) -> Option<usize> {
        self.length
    }

    /// Process exit status for this outcome: 0 on success, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.success { 0 } else { 1 }
    }

    /// Serialize to a single line of JSON.
    pub fn to_json_line(&self) -> String {
        // Only plain strings, bools and integers: serialization cannot fail.
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(
                r#"{{"success":false,"error":{},"text":""}}"#,
                serde_json::Value::String(format!("failed to serialize result: {e}"))
            )
        })
    }
}

impl From<ShimError> for ExtractionResult {
    fn from(err: ShimError) -> Self {
        ExtractionResult::failure(err.to_string())
    }
}

impl From<Result<String, ShimError>> for ExtractionResult {
    fn from(outcome: Result<String, ShimError>) -> Self {
        match outcome {
            Ok(text) => ExtractionResult::success(text),
            Err(err) => err.into(),
        }
    }
}
