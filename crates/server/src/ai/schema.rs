//! Response schema declared to Gemini so the reply is constrained JSON

use clinic_assistant_core::{Action, UPDATABLE_FIELDS};
use serde_json::{Map, Value as JsonValue, json};

/// Schema of the `AssistantResult` object the model must produce
pub fn assistant_result() -> JsonValue {
    let actions: Vec<&str> = Action::MODEL_CHOICES.iter().map(Action::as_str).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "action": { "type": "STRING", "enum": actions },
            "response": { "type": "STRING" },
            "patientId": { "type": "STRING", "nullable": true },
            "updates": {
                "type": "OBJECT",
                "properties": update_properties(),
                "nullable": true
            }
        },
        "required": ["action", "response"]
    })
}

fn update_properties() -> Map<String, JsonValue> {
    UPDATABLE_FIELDS
        .iter()
        .map(|field| (field.to_string(), field_schema(field)))
        .collect()
}

fn field_schema(field: &str) -> JsonValue {
    match field {
        "yearOfBirth" | "revisitDays" => json!({ "type": "INTEGER" }),
        "lastExamDate" | "nextExamDate" => {
            json!({ "type": "STRING", "description": "Date in YYYY-MM-DD format" })
        }
        _ => json!({ "type": "STRING" }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_properties_follow_whitelist() {
        let schema = assistant_result();
        let properties = schema["properties"]["updates"]["properties"]
            .as_object()
            .unwrap();
        assert_eq!(properties.len(), UPDATABLE_FIELDS.len());
        for field in UPDATABLE_FIELDS {
            assert!(properties.contains_key(field), "missing {field}");
        }
        assert_eq!(properties["revisitDays"]["type"], "INTEGER");
    }

    #[test]
    fn error_action_is_not_offered_to_model() {
        let schema = assistant_result();
        let actions = schema["properties"]["action"]["enum"].as_array().unwrap();
        assert_eq!(actions.len(), 4);
        assert!(!actions.iter().any(|a| a == "error"));
    }
}
