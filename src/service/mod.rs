//! Data services that fetch user records for the presenter.
//!
//! A service knows nothing about presenters or views. It receives a
//! completion, runs its fetch asynchronously and invokes the completion
//! exactly once with either the records or a structured failure.

mod file;
mod mock;

pub use file::JsonFileUserService;
pub use mock::{MockMode, MockUserService, DEFAULT_MOCK_DELAY};

use thiserror::Error;
use tokio::runtime::Handle;

use crate::config::{ServiceConfig, ServiceSource};
use crate::model::{FetchFailure, FetchResult, UserRecord};

/// Continuation handed to [`UserService::fetch_users`].
pub type FetchCompletion = Box<dyn FnOnce(FetchResult) + Send + 'static>;

/// Asynchronous source of user records.
pub trait UserService: Send + Sync {
    /// Start a fetch and return immediately.
    ///
    /// `completion` must be invoked exactly once, after the fetch logic has
    /// finished, possibly on another thread.
    ///
    /// Services that run on a tokio runtime cannot honour this once the
    /// runtime is shutting down: the spawned task is cancelled and
    /// `completion` is dropped without being called.
    fn fetch_users(&self, completion: FetchCompletion);
}

impl<S: UserService + ?Sized> UserService for Box<S> {
    fn fetch_users(&self, completion: FetchCompletion) {
        (**self).fetch_users(completion)
    }
}

/// Build a completion from separate success and failure continuations.
///
/// Exactly one of the two runs, matching the result variant.
pub fn split_completion<F, G>(on_success: F, on_failure: G) -> FetchCompletion
where
    F: FnOnce(Vec<UserRecord>) + Send + 'static,
    G: FnOnce(FetchFailure) + Send + 'static,
{
    Box::new(move |result| match result {
        FetchResult::Success(users) => on_success(users),
        FetchResult::Failure(failure) => on_failure(failure),
    })
}

/// Errors raised while constructing a service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("a tokio runtime is required to run the user service: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),

    #[error("service source '{source_name}' requires a file path")]
    MissingPath { source_name: &'static str },
}

/// Build the service described by `config` on the given runtime.
pub fn from_config(
    config: &ServiceConfig,
    handle: Handle,
) -> Result<Box<dyn UserService>, ServiceError> {
    match config.source {
        ServiceSource::Mock => Ok(Box::new(
            MockUserService::with_handle(handle)
                .delay(config.delay())
                .mode(config.mode),
        )),
        ServiceSource::File => {
            let path = config.path.clone().ok_or(ServiceError::MissingPath {
                source_name: "file",
            })?;
            Ok(Box::new(
                JsonFileUserService::with_handle(path, handle).delay(config.delay()),
            ))
        }
    }
}
