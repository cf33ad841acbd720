//! Data model shared by the service, presenter and view layers.
//!
//! The presenter treats [`UserRecord`] as opaque: it only looks at how many
//! records a fetch produced. Field interpretation belongs to the view.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Structured diagnostic fields attached to a failed fetch.
pub type Diagnostics = Map<String, Value>;

/// One user, as an opaque field-name → value mapping.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord(Map<String, Value>);

impl UserRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Convenience accessor for string-valued fields.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for UserRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Typed user profile used by the bundled mock service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: u32,
}

impl User {
    pub fn new(first_name: &str, last_name: &str, email: &str, age: u32) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            age,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Interpret a record as a typed user.
    ///
    /// Returns `None` when a field is missing or has the wrong type.
    pub fn from_record(record: &UserRecord) -> Option<Self> {
        serde_json::from_value(Value::Object(record.fields().clone())).ok()
    }
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        let mut fields = Map::new();
        fields.insert("first_name".to_string(), Value::from(user.first_name));
        fields.insert("last_name".to_string(), Value::from(user.last_name));
        fields.insert("email".to_string(), Value::from(user.email));
        fields.insert("age".to_string(), Value::from(user.age));
        Self(fields)
    }
}

/// The single failure kind a fetch can produce.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("user fetch failed: {}", summarize(.diagnostics))]
pub struct FetchFailure {
    pub diagnostics: Diagnostics,
}

impl FetchFailure {
    pub fn new(diagnostics: Diagnostics) -> Self {
        Self { diagnostics }
    }

    /// Build a failure from `(field, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let diagnostics = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self { diagnostics }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.diagnostics.get(field)
    }
}

fn summarize(diagnostics: &Diagnostics) -> String {
    if diagnostics.is_empty() {
        return "no diagnostics".to_string();
    }
    diagnostics
        .iter()
        .map(|(key, value)| match value {
            Value::String(text) => format!("{}={}", key, text),
            other => format!("{}={}", key, other),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Outcome of one fetch. Exactly one is produced per call.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult {
    Success(Vec<UserRecord>),
    Failure(FetchFailure),
}

impl FetchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchResult::Success(_))
    }
}

impl From<Result<Vec<UserRecord>, FetchFailure>> for FetchResult {
    fn from(result: Result<Vec<UserRecord>, FetchFailure>) -> Self {
        match result {
            Ok(users) => FetchResult::Success(users),
            Err(failure) => FetchResult::Failure(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_converts_to_record() {
        let record = UserRecord::from(User::new("Iyad", "Agha", "iyad@test.com", 36));
        assert_eq!(record.get_str("first_name"), Some("Iyad"));
        assert_eq!(record.get("age"), Some(&json!(36)));
        assert_eq!(record.fields().len(), 4);
    }

    #[test]
    fn test_user_from_record_rejects_partial_fields() {
        let mut fields = Map::new();
        fields.insert("first_name".to_string(), json!("Mila"));
        assert!(User::from_record(&UserRecord::new(fields)).is_none());
    }

    #[test]
    fn test_user_from_record_reads_typed_user() {
        let user = User::new("Mark", "Astun", "mark@test.com", 39);
        let record = UserRecord::from(user.clone());
        assert_eq!(User::from_record(&record), Some(user));
    }

    #[test]
    fn test_failure_display_lists_diagnostics() {
        let failure = FetchFailure::from_pairs([("kind", "io"), ("path", "/tmp/users.json")]);
        assert_eq!(
            failure.to_string(),
            "user fetch failed: kind=io, path=/tmp/users.json"
        );
    }

    #[test]
    fn test_failure_display_without_diagnostics() {
        let failure = FetchFailure::new(Diagnostics::new());
        assert_eq!(failure.to_string(), "user fetch failed: no diagnostics");
    }

    #[test]
    fn test_record_deserializes_from_json_object() {
        let record: UserRecord = serde_json::from_value(json!({"name": "a", "x": 1})).unwrap();
        assert_eq!(record.get_str("name"), Some("a"));
    }
}
