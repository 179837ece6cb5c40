use thiserror::Error;

/// Assistant relay error types
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upstream service error: {status} {reason}")]
    Upstream { status: u16, reason: String },

    /// Upstream answered with nothing usable because of its safety filters
    #[error("Upstream response was withheld by content filtering")]
    ContentFiltered,

    #[error("Malformed upstream envelope: {0}")]
    MalformedEnvelope(String),

    #[error("Malformed upstream response: {0}")]
    MalformedUpstreamResponse(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AssistantError {
    /// Short label used for metrics and logs
    pub fn kind(&self) -> &'static str {
        match self {
            AssistantError::InvalidInput(_) => "invalid_input",
            AssistantError::Upstream { .. } => "upstream_error",
            AssistantError::ContentFiltered => "content_filtered",
            AssistantError::MalformedEnvelope(_) => "malformed_envelope",
            AssistantError::MalformedUpstreamResponse(_) => "malformed_response",
            AssistantError::Internal(_) => "internal_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_message_names_status() {
        let err = AssistantError::Upstream {
            status: 503,
            reason: "Service Unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Upstream service error: 503 Service Unavailable"
        );
    }
}
