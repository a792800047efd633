//! Shared wire-protocol DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the knowledge-base and diagnosis REST payloads. Fields
//! the backend adds over time (timestamps, case ids) are optional so older
//! and newer backends both deserialize.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A classification bucket for knowledge entries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Backend primary key.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Unique display name.
    pub name: String,
    /// Free-form description; blank or absent when not provided.
    #[serde(default)]
    pub description: Option<String>,
    /// ISO 8601 creation timestamp, if the backend reports it.
    #[serde(default)]
    pub created_at: Option<String>,
    /// ISO 8601 last-modified timestamp, if the backend reports it.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A stored symptom/solution record tied to a category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// Backend primary key.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Short title.
    pub title: String,
    /// Owning category id. Some list payloads omit it.
    #[serde(default, deserialize_with = "deserialize_opt_i64_from_number")]
    pub category: Option<i64>,
    /// Owning category name, denormalized by the backend.
    #[serde(default)]
    pub category_name: String,
    pub symptoms: String,
    pub solution: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for `POST /api/knowledge/categories/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

/// Payload for `POST /api/knowledge/knowledge/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NewKnowledge {
    /// Category id as submitted by the selector.
    pub category: String,
    pub title: String,
    pub symptoms: String,
    pub solution: String,
}

/// Observations submitted for analysis. Never stored client-side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisRequest {
    pub alert_info: String,
    pub metrics_info: String,
    pub log_info: String,
}

/// Server-computed analysis returned by the analyze endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    /// Stored case id, if the backend persisted the analysis.
    #[serde(default, deserialize_with = "deserialize_opt_i64_from_number")]
    pub id: Option<i64>,
    /// Fault category suggested by the analysis.
    #[serde(deserialize_with = "deserialize_display_string")]
    pub category: String,
    /// Model-written text; lists and objects are flattened to lines.
    #[serde(deserialize_with = "deserialize_display_string")]
    pub analysis: String,
    #[serde(deserialize_with = "deserialize_display_string")]
    pub solution: String,
    /// Best-matching knowledge entry, if one cleared the backend threshold.
    #[serde(default, deserialize_with = "deserialize_opt_i64_from_number")]
    pub matched_knowledge_id: Option<i64>,
    /// Similar knowledge entries in backend ranking order.
    #[serde(default)]
    pub reference_cases: Vec<ReferenceCase>,
}

/// A knowledge entry the backend judged similar to the submitted fault.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCase {
    #[serde(default, deserialize_with = "deserialize_opt_i64_from_number")]
    pub id: Option<i64>,
    pub title: String,
    /// Similarity as display text (e.g. `"87.50%"`); numeric scores are stringified.
    #[serde(deserialize_with = "deserialize_display_string")]
    pub similarity: String,
    pub category: String,
    pub symptoms: String,
    pub solution: String,
}

/// Error body shape used by the backend for non-2xx responses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    i64_from_value(&value).map_err(D::Error::custom)
}

fn deserialize_opt_i64_from_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    i64_from_value(&value).map(Some).map_err(D::Error::custom)
}

fn i64_from_value(value: &serde_json::Value) -> Result<i64, &'static str> {
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err("expected integer-compatible number")
        }
        serde_json::Value::String(text) => text.trim().parse::<i64>().map_err(|_| "expected integer string"),
        _ => Err("expected number"),
    }
}

fn deserialize_display_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(display_text(&value))
}

/// Render any JSON value as display text.
///
/// Strings pass through, scalars use their JSON spelling, arrays become one
/// line per item and objects one `key: value` line per field.
fn display_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Bool(flag) => flag.to_string(),
        serde_json::Value::Number(number) => number.to_string(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(display_text)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n"),
        serde_json::Value::Object(fields) => fields
            .iter()
            .map(|(key, field)| format!("{key}: {}", display_text(field)))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
