//! Instruction text sent to Gemini for each assistant request

use chrono::NaiveDate;
use clinic_assistant_core::{AssistantError, UPDATABLE_FIELDS};
use serde_json::Value as JsonValue;

const ROLE: &str = "You are the assistant of a clinic management application. \
Analyse the user's request together with the patient data (context) below and reply \
with a SINGLE JSON object the application can act on. Write `response` in the same \
language as the user's request.";

const INTENTS: &str = r#"OUTPUT FORMAT (follow the response schema):
1. The user only asks for information (e.g. "how many patients are due this week?"):
   action is "query" and `response` holds the answer.
2. The user asks to UPDATE an existing patient (e.g. "change A's phone to X"):
   action is "update"; set `patientId` to the exact `id` from the context, put the
   changed fields in `updates`, and summarise the change in `response`.
3. The user asks to CREATE a new patient (e.g. "add patient B, phone Y, born Z"):
   action is "create"; put the provided fields in `updates`, summarise in `response`,
   and leave `patientId` null.
4. The request is ambiguous (e.g. several patients match the name):
   action is "clarify" and `response` asks the user to be more specific."#;

const RULES: &str = r#"RULES:
- For "update", `patientId` MUST be copied from the `id` of a patient in the context.
  If no patient matches, or you are not certain, answer with action "query" or
  "clarify" and explain instead of guessing.
- If the user says the patient has been examined, set `lastExamDate` to today; if the
  patient has `revisitDays`, also set `nextExamDate` to today plus that many days.
- For "create", default `lastExamDate` to today when no exam date is given.
- Reply with the JSON object only, no surrounding text."#;

/// Build the full instruction text for one request.
///
/// The context is embedded as pretty-printed JSON and the query verbatim.
pub fn build(
    today: NaiveDate,
    context: &JsonValue,
    query: &str,
) -> Result<String, AssistantError> {
    let context = serde_json::to_string_pretty(context)
        .map_err(|e| AssistantError::Internal(format!("Failed to serialize context: {}", e)))?;

    let fields = UPDATABLE_FIELDS
        .iter()
        .map(|field| format!("`{}`", field))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!(
        "{ROLE}\n\n\
         Today is {today}.\n\n\
         {INTENTS}\n\n\
         UPDATABLE FIELDS: {fields}. \
         Dates (`lastExamDate`, `nextExamDate`) use the YYYY-MM-DD format; \
         `yearOfBirth` and `revisitDays` are integers.\n\n\
         {RULES}\n\n\
         Current patient data (context):\n{context}\n\n\
         User request: \"{query}\"",
        today = today.format("%Y-%m-%d"),
    ))
}
