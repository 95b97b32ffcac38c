//! Structured spec error: code + JSON pointer + message + optional hint.

use serde::Serialize;

use super::error_code::ErrorCode;

/// One problem found in a [`SummarizerSpec`](super::spec::SummarizerSpec).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecError {
    pub code: ErrorCode,
    /// JSON pointer to the offending field (e.g. `/limits/max_sentences`)
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl SpecError {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl std::fmt::Display for SpecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.path, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_hint() {
        let err = SpecError::new(ErrorCode::InvalidValue, "/n", "n must be >= 0")
            .with_hint("Use 0 for an empty summary");
        assert_eq!(
            err.to_string(),
            "[invalid_value] /n: n must be >= 0 (hint: Use 0 for an empty summary)"
        );
    }

    #[test]
    fn test_serialize_skips_missing_hint() {
        let err = SpecError::new(ErrorCode::UnknownField, "/foo", "unrecognized field \"foo\"");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "unknown_field");
        assert!(json.get("hint").is_none());
    }
}
