use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;

use crate::model::{FetchFailure, FetchResult, User, UserRecord};
use crate::service::{FetchCompletion, ServiceError, UserService};

/// Delay before the mock service answers.
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_secs(2);

/// What the mock service answers with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum MockMode {
    /// The three demo users.
    #[default]
    Users,
    /// A successful but empty batch.
    Empty,
    /// A failure with mock diagnostics.
    Failure,
}

/// Service that answers with canned data after a fixed delay.
pub struct MockUserService {
    handle: Handle,
    delay: Duration,
    mode: MockMode,
}

impl MockUserService {
    /// Create a mock bound to the current tokio runtime.
    pub fn new() -> Result<Self, ServiceError> {
        Ok(Self::with_handle(Handle::try_current()?))
    }

    pub fn with_handle(handle: Handle) -> Self {
        Self {
            handle,
            delay: DEFAULT_MOCK_DELAY,
            mode: MockMode::default(),
        }
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn mode(mut self, mode: MockMode) -> Self {
        self.mode = mode;
        self
    }

    /// The canned users returned in [`MockMode::Users`].
    pub fn demo_users() -> Vec<User> {
        vec![
            User::new("Iyad", "Agha", "iyad@test.com", 36),
            User::new("Mila", "Haward", "mila@test.om", 24),
            User::new("Mark", "Astun", "mark@test.com", 39),
        ]
    }

    fn result(&self) -> FetchResult {
        match self.mode {
            MockMode::Users => FetchResult::Success(
                Self::demo_users()
                    .into_iter()
                    .map(UserRecord::from)
                    .collect(),
            ),
            MockMode::Empty => FetchResult::Success(Vec::new()),
            MockMode::Failure => FetchResult::Failure(FetchFailure::from_pairs([
                ("kind", "mock"),
                ("error", "mock service configured to fail"),
            ])),
        }
    }
}

impl UserService for MockUserService {
    fn fetch_users(&self, completion: FetchCompletion) {
        let result = self.result();
        let delay = self.delay;
        tracing::debug!(delay_ms = delay.as_millis() as u64, mode = ?self.mode, "Mock fetch scheduled");
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            completion(result);
        });
    }
}
