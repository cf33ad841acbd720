use std::path::{Path, PathBuf};
use std::time::Duration;

use serde_json::Value;
use tokio::runtime::Handle;

use crate::model::{FetchFailure, FetchResult, UserRecord};
use crate::service::{FetchCompletion, ServiceError, UserService};

/// Service that loads user records from a JSON array on disk.
///
/// Each element of the top-level array must be an object; it becomes one
/// [`UserRecord`] without further interpretation.
pub struct JsonFileUserService {
    handle: Handle,
    path: PathBuf,
    delay: Duration,
}

impl JsonFileUserService {
    /// Create a file service bound to the current tokio runtime.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ServiceError> {
        Ok(Self::with_handle(path, Handle::try_current()?))
    }

    pub fn with_handle(path: impl Into<PathBuf>, handle: Handle) -> Self {
        Self {
            handle,
            path: path.into(),
            delay: Duration::ZERO,
        }
    }

    /// Artificial latency before the file is read.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UserService for JsonFileUserService {
    fn fetch_users(&self, completion: FetchCompletion) {
        let path = self.path.clone();
        let delay = self.delay;
        self.handle.spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let result = load_records(&path).await;
            if let Err(failure) = &result {
                tracing::debug!(path = %path.display(), error = %failure, "Failed to load users");
            }
            completion(FetchResult::from(result));
        });
    }
}

async fn load_records(path: &Path) -> Result<Vec<UserRecord>, FetchFailure> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        FetchFailure::from_pairs([
            ("kind", "io".to_string()),
            ("path", path.display().to_string()),
            ("error", e.to_string()),
        ])
    })?;

    let payload: Value = serde_json::from_str(&content).map_err(|e| {
        FetchFailure::from_pairs([
            ("kind", "parse".to_string()),
            ("path", path.display().to_string()),
            ("error", e.to_string()),
        ])
    })?;

    parse_records(payload).map_err(|message| {
        FetchFailure::from_pairs([
            ("kind", "invalid_payload".to_string()),
            ("path", path.display().to_string()),
            ("error", message),
        ])
    })
}

fn parse_records(payload: Value) -> Result<Vec<UserRecord>, String> {
    let Value::Array(items) = payload else {
        return Err("expected a JSON array of user objects".to_string());
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(UserRecord::new(fields)),
            _ => Err(format!("element {} is not an object", index)),
        })
        .collect()
}
