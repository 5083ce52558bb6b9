use serde::{Deserialize, Serialize};

use crate::utils::{coerce_duration, truncate_duration};

/// One entry in a user's log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    pub description: String,
    #[serde(deserialize_with = "stored_duration")]
    pub duration: i64,
    /// Canonical calendar date, e.g. "Mon Jan 01 2024"
    pub date: String,
}

/// Form or JSON body of `POST /api/users/{id}/exercises`
///
/// Everything is optional and kept raw; normalization happens in the
/// tracker service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewExercise {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub duration: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Flat echo returned after an exercise is appended
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseRecord {
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: String,
    #[serde(rename = "_id")]
    pub id: String,
}

/// Query string of `GET /api/users/{id}/logs`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// Response of `GET /api/users/{id}/logs`
///
/// `count` is the length of the whole log, not of the filtered `log`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogView {
    pub username: String,
    pub count: usize,
    #[serde(rename = "_id")]
    pub id: String,
    pub log: Vec<Exercise>,
}

// Earlier writers stored whatever `Number(duration)` produced, doubles included
fn stored_duration<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Int(value) => value.max(0),
        Raw::Float(value) => truncate_duration(value),
        Raw::Text(value) => coerce_duration(Some(&value)),
    })
}

// JSON clients send numbers, form clients send strings
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_exercise_accepts_numeric_json_duration() {
        let body: NewExercise =
            serde_json::from_str(r#"{"description":"run","duration":30}"#).unwrap();
        assert_eq!(body.duration.as_deref(), Some("30"));
        assert!(body.date.is_none());
    }

    #[test]
    fn test_new_exercise_accepts_string_duration() {
        let body: NewExercise =
            serde_json::from_str(r#"{"description":"swim","duration":"abc"}"#).unwrap();
        assert_eq!(body.duration.as_deref(), Some("abc"));
    }

    #[test]
    fn test_log_view_shape() {
        let view = LogView {
            username: "dan".to_string(),
            count: 3,
            id: "abc".to_string(),
            log: vec![],
        };
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["count"], 3);
        assert_eq!(value["_id"], "abc");
    }
}
