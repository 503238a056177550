use serde::Deserialize;
use serde_json::Value;

/// Error body returned by the API, `{"detail": ...}`.
///
/// `detail` is usually a string. Request validation failures carry a list of
/// objects with a `msg` field instead.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorDetail {
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(message) => Some(message.clone()),
            Value::Array(items) => {
                let messages = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect::<Vec<_>>();
                (!messages.is_empty()).then(|| messages.join("; "))
            }
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// Extracts the message from a raw response body, if there is one.
    #[must_use]
    pub fn message_from_body(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorDetail>(body).ok()?.message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail() {
        assert_eq!(
            ErrorDetail::message_from_body(r#"{"detail": "Email already registered"}"#),
            Some("Email already registered".to_owned())
        );
    }

    #[test]
    fn test_validation_detail() {
        assert_eq!(
            ErrorDetail::message_from_body(
                r#"{"detail": [{"loc": ["body", "email"], "msg": "value is not a valid email address"}]}"#
            ),
            Some("value is not a valid email address".to_owned())
        );
    }

    #[test]
    fn test_missing_detail() {
        assert_eq!(ErrorDetail::message_from_body(r#"{"error": "nope"}"#), None);
        assert_eq!(ErrorDetail::message_from_body("<html>Bad Gateway</html>"), None);
    }
}
