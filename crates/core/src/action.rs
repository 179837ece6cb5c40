use serde::{Deserialize, Serialize};

/// Intent classification returned to the front-end
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Informational answer, nothing to apply
    Query,
    /// Change fields of an existing patient
    Update,
    /// Add a new patient
    Create,
    /// The request was ambiguous; `response` asks the user to be more specific
    Clarify,
    /// Relay-side failure
    Error,
}

impl Action {
    /// Actions the model is allowed to pick (`error` is reserved for the relay)
    pub const MODEL_CHOICES: [Action; 4] =
        [Action::Query, Action::Update, Action::Create, Action::Clarify];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Query => "query",
            Action::Update => "update",
            Action::Create => "create",
            Action::Clarify => "clarify",
            Action::Error => "error",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_display() {
        for action in [
            Action::Query,
            Action::Update,
            Action::Create,
            Action::Clarify,
            Action::Error,
        ] {
            let wire = serde_json::to_value(action).unwrap();
            assert_eq!(wire, action.as_str());
        }
    }

    #[test]
    fn rejects_unknown_action() {
        assert!(serde_json::from_str::<Action>("\"delete\"").is_err());
    }
}
