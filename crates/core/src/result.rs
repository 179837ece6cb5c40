use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

use crate::action::Action;

/// Fields the assistant may propose to change, in wire spelling
pub const UPDATABLE_FIELDS: [&str; 8] = [
    "subject",
    "name",
    "yearOfBirth",
    "phone",
    "lastExamDate",
    "nextExamDate",
    "revisitDays",
    "notes",
];

/// Reply shown when the upstream withheld its answer
pub const CONTENT_FILTERED_RESPONSE: &str =
    "Tôi không thể xử lý yêu cầu này do có thể vi phạm chính sách nội dung.";

/// Partial patient record proposed by the assistant.
///
/// Only whitelisted fields are accepted; anything else fails to decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PatientUpdates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(
        default,
        deserialize_with = "optional_integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub year_of_birth: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(
        default,
        deserialize_with = "optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_exam_date: Option<NaiveDate>,

    #[serde(
        default,
        deserialize_with = "optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_exam_date: Option<NaiveDate>,

    #[serde(
        default,
        deserialize_with = "optional_integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub revisit_days: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PatientUpdates {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Structured answer relayed back to the front-end
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssistantResult {
    pub response: String,

    pub action: Action,

    #[serde(default)]
    pub patient_id: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub updates: PatientUpdates,
}

impl AssistantResult {
    /// Soft-fail reply used when the upstream filtered the request
    pub fn content_filtered() -> Self {
        Self {
            response: CONTENT_FILTERED_RESPONSE.to_string(),
            action: Action::Query,
            patient_id: None,
            updates: PatientUpdates::default(),
        }
    }

    /// Error-shaped reply, kept uniform with successful ones for the client
    pub fn error(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            action: Action::Error,
            patient_id: None,
            updates: PatientUpdates::default(),
        }
    }

    /// Check the invariants the front-end relies on
    pub fn validate(&self) -> Result<(), String> {
        if self.action == Action::Error {
            return Err("error action is reserved for the relay".to_string());
        }
        if self.action == Action::Update
            && self.patient_id.as_deref().is_none_or(|id| id.trim().is_empty())
        {
            return Err("update action without a patientId".to_string());
        }
        Ok(())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Integer field that also accepts integral floats such as `1985.0`
fn optional_integer<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let whole = match number.as_i64() {
        Some(whole) => whole,
        None => match number.as_f64() {
            Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                f as i64
            }
            _ => return Err(D::Error::custom(format!("expected an integer, got {number}"))),
        },
    };

    T::try_from(whole)
        .map(Some)
        .map_err(|_| D::Error::custom(format!("integer {whole} is out of range")))
}

/// `YYYY-MM-DD` date; an empty string means the field is not set
fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid date {raw:?}: {e}"))),
    }
}
