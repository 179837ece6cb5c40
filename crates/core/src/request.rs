use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::AssistantError;

/// Inbound body of `POST /api/assistant`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantRequest {
    #[serde(default)]
    pub query: Option<String>,

    /// Caller's patient records, passed through to the prompt untouched
    #[serde(default)]
    pub context: JsonValue,
}

impl AssistantRequest {
    pub fn new(query: impl Into<String>, context: JsonValue) -> Self {
        Self {
            query: Some(query.into()),
            context,
        }
    }

    /// The user query, or `InvalidInput` if it is missing or blank
    pub fn query(&self) -> Result<&str, AssistantError> {
        match self.query.as_deref() {
            Some(query) if !query.trim().is_empty() => Ok(query),
            _ => Err(AssistantError::InvalidInput(
                "query must not be empty".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_default() {
        let request: AssistantRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.query.is_none());
        assert!(request.context.is_null());
        assert!(matches!(
            request.query(),
            Err(AssistantError::InvalidInput(_))
        ));
    }

    #[test]
    fn blank_query_is_invalid() {
        for query in ["", "   ", "\n\t"] {
            let request = AssistantRequest::new(query, JsonValue::Null);
            assert!(request.query().is_err(), "{query:?} should be rejected");
        }
    }

    #[test]
    fn query_is_returned_verbatim() {
        let request = AssistantRequest::new("  có bao nhiêu bệnh nhân? ", json!([]));
        assert_eq!(request.query().unwrap(), "  có bao nhiêu bệnh nhân? ");
    }
}
