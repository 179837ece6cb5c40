//! Assistant endpoint

use axum::{Extension, Json, extract::rejection::JsonRejection};
use chrono::Utc;
use clinic_assistant_core::{AssistantRequest, AssistantResult};

use crate::ai::{GeminiClient, assistant};
use crate::error::AppError;
use crate::middleware::RequestId;

/// POST /api/assistant - Interpret a natural-language request about patients
///
/// Forwards the query and the caller's patient context to Gemini and returns
/// the proposed action. Nothing is applied or stored here.
pub async fn assist(
    Extension(client): Extension<GeminiClient>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<AssistantRequest>, JsonRejection>,
) -> Result<Json<AssistantResult>, AppError> {
    let Json(body) = payload.inspect_err(|rejection| {
        tracing::warn!(
            request_id = %request_id.0,
            error = %rejection,
            "Rejected assistant body"
        );
    })?;

    tracing::info!(request_id = %request_id.0, "Assistant request");

    let today = Utc::now().date_naive();
    let result = assistant::handle(&client, &body, today)
        .await
        .map_err(|e| {
            tracing::error!(
                request_id = %request_id.0,
                kind = e.kind(),
                error = %e,
                "Assistant request failed"
            );
            AppError::from(e)
        })?;

    Ok(Json(result))
}
