//! Two-stage decoding of Gemini responses
//!
//! Stage 1 reads the transport envelope and pulls out the generated text.
//! Stage 2 parses that text as an `AssistantResult`. Each stage fails with
//! its own error kind and nothing is repaired or guessed.

use clinic_assistant_core::{AssistantError, AssistantResult};
use serde::Deserialize;

/// Finish reasons meaning the candidate was withheld by safety filtering
const FILTERED_FINISH_REASONS: [&str; 4] = ["SAFETY", "PROHIBITED_CONTENT", "BLOCKLIST", "SPII"];

/// Response envelope from generateContent
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Only text parts matter here; other part kinds decode with `text: None`
#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// First non-blank text part of the first candidate
    fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|part| part.text.as_deref().filter(|text| !text.trim().is_empty()))
    }

    fn is_filtered(&self) -> bool {
        let blocked_prompt = self
            .prompt_feedback
            .as_ref()
            .is_some_and(|feedback| feedback.block_reason.is_some());

        let blocked_candidate = self
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
            .is_some_and(|reason| FILTERED_FINISH_REASONS.contains(&reason));

        blocked_prompt || blocked_candidate
    }
}

/// Stage 1: extract the generated text from the raw response body
pub fn generated_text(raw: &str) -> Result<String, AssistantError> {
    if raw.trim().is_empty() {
        return Err(AssistantError::ContentFiltered);
    }

    let envelope: GenerateContentResponse = serde_json::from_str(raw)
        .map_err(|e| AssistantError::MalformedEnvelope(e.to_string()))?;

    match envelope.first_text() {
        Some(text) => Ok(text.to_string()),
        None if envelope.is_filtered() => Err(AssistantError::ContentFiltered),
        None => Err(AssistantError::MalformedEnvelope(
            "no generated text in response".to_string(),
        )),
    }
}

/// Stage 2: parse the generated text as the structured assistant reply
pub fn assistant_result(text: &str) -> Result<AssistantResult, AssistantError> {
    let result: AssistantResult = serde_json::from_str(text.trim())
        .map_err(|e| AssistantError::MalformedUpstreamResponse(e.to_string()))?;

    result
        .validate()
        .map_err(AssistantError::MalformedUpstreamResponse)?;

    Ok(result)
}
