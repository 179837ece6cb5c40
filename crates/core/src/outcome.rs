use serde::{Deserialize, Serialize};

use crate::result::AssistantResult;

/// Body returned with HTTP 500.
///
/// Carries `message` for older clients and the full result shape
/// (`action: "error"`) so newer clients can treat every reply alike.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,

    #[serde(flatten)]
    pub result: AssistantResult,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            result: AssistantResult::error(message.clone()),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flattens_result_fields() {
        let body = serde_json::to_value(ErrorBody::new("boom")).unwrap();
        assert_eq!(
            body,
            json!({
                "message": "boom",
                "response": "boom",
                "action": "error",
                "patientId": null,
                "updates": {}
            })
        );
    }
}
