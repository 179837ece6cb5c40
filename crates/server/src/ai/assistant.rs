//! The assistant relay: validate, build the prompt, call Gemini, unwrap

use chrono::NaiveDate;
use clinic_assistant_core::{AssistantError, AssistantRequest, AssistantResult};

use super::client::GeminiClient;
use super::{decode, prompt, schema};

/// Handle one assistant request.
///
/// Makes exactly one outbound call for a valid request and none for an
/// invalid one. A filtered upstream reply becomes a `query` result.
pub async fn handle(
    client: &GeminiClient,
    request: &AssistantRequest,
    today: NaiveDate,
) -> Result<AssistantResult, AssistantError> {
    let outcome = run(client, request, today).await;

    let label = match &outcome {
        Ok(result) => result.action.as_str(),
        Err(err) => err.kind(),
    };
    metrics::counter!("assistant_requests_total", "outcome" => label).increment(1);

    outcome
}

async fn run(
    client: &GeminiClient,
    request: &AssistantRequest,
    today: NaiveDate,
) -> Result<AssistantResult, AssistantError> {
    let query = request.query()?;
    let prompt = prompt::build(today, &request.context, query)?;

    match relay(client, &prompt).await {
        Err(AssistantError::ContentFiltered) => {
            tracing::warn!("Gemini returned no content, likely blocked by safety filters");
            Ok(AssistantResult::content_filtered())
        }
        other => other,
    }
}

async fn relay(client: &GeminiClient, prompt: &str) -> Result<AssistantResult, AssistantError> {
    let raw = client.generate(prompt, schema::assistant_result()).await?;

    let text = decode::generated_text(&raw).inspect_err(|e| {
        if !matches!(e, AssistantError::ContentFiltered) {
            tracing::error!(error = %e, body = %raw, "Could not read Gemini envelope");
        }
    })?;

    let result = decode::assistant_result(&text).inspect_err(|e| {
        tracing::error!(error = %e, text = %text, "Could not parse assistant reply");
    })?;

    tracing::info!(
        action = %result.action,
        patient_id = ?result.patient_id,
        "Assistant proposed action"
    );

    Ok(result)
}
