//! Presenter mediating between a [`UserService`] and an attached [`UserView`].
//!
//! The presenter owns its service but never its view: it keeps a `Weak`
//! handle so the screen host controls the view's lifetime. One call to
//! [`UserPresenter::fetch_data`] drives one fetch cycle:
//!
//! ```text
//! fetch_data ──→ show_loading_indicator ──→ service.fetch_users
//!                                                  │ (async)
//!        ┌─────────────────────────────────────────┘
//!        ▼
//! hide_loading_indicator ──→ present_users      (non-empty success)
//!                        └─→ show_empty_state   (empty success, failure)
//! ```
//!
//! Completion targets whichever view is attached when the service answers.
//! Overlapping cycles are not cancelled or merged; the last delivery wins.

mod slot;

use std::sync::{Arc, Weak};

use uuid::Uuid;

use crate::model::FetchResult;
use crate::service::UserService;
use crate::view::UserView;

use slot::ViewSlot;

/// Terminal outcome of one fetch cycle, as delivered to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Records were handed to `present_users`.
    Rendered { records: usize },
    /// The empty placeholder was shown after a successful, empty fetch.
    EmptySuccess,
    /// The empty placeholder was shown after a failed fetch.
    Failed,
}

impl CycleOutcome {
    fn from_result(result: &FetchResult) -> Self {
        match result {
            FetchResult::Success(users) if users.is_empty() => CycleOutcome::EmptySuccess,
            FetchResult::Success(users) => CycleOutcome::Rendered {
                records: users.len(),
            },
            FetchResult::Failure(_) => CycleOutcome::Failed,
        }
    }
}

pub struct UserPresenter<S: UserService> {
    service: S,
    view: Arc<ViewSlot>,
}

impl<S: UserService> UserPresenter<S> {
    /// Create a presenter with no view attached.
    pub fn new(service: S) -> Self {
        Self {
            service,
            view: Arc::new(ViewSlot::default()),
        }
    }

    /// Attach `view`, replacing any previously attached view.
    ///
    /// Only a weak handle is kept. Attaching never triggers a fetch or any
    /// view callback.
    pub fn attach_view<V: UserView + 'static>(&self, view: &Arc<V>) {
        let weak: Weak<V> = Arc::downgrade(view);
        self.view.replace(weak);
        tracing::debug!("View attached");
    }

    /// Drop the reference to the current view, if any.
    pub fn detach_view(&self) {
        self.view.clear();
        tracing::debug!("View detached");
    }

    /// Whether a live view is currently attached.
    pub fn has_view(&self) -> bool {
        self.view.current().is_some()
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Run one fetch cycle. Returns as soon as the service has been invoked.
    ///
    /// Never fails: service failures end at the view's empty state. With no
    /// view attached the service still runs and its result is dropped.
    pub fn fetch_data(&self) {
        let cycle_id = Uuid::new_v4();

        match self.view.current() {
            Some(view) => view.show_loading_indicator(),
            None => tracing::debug!(%cycle_id, "No view attached at fetch start"),
        }

        let slot = Arc::clone(&self.view);
        tracing::debug!(%cycle_id, "Fetching users");
        self.service
            .fetch_users(Box::new(move |result| deliver(&slot, cycle_id, result)));
    }
}

fn deliver(slot: &ViewSlot, cycle_id: Uuid, result: FetchResult) {
    let outcome = CycleOutcome::from_result(&result);

    if let FetchResult::Failure(failure) = &result {
        tracing::warn!(%cycle_id, error = %failure, "User fetch failed");
    }

    let Some(view) = slot.current() else {
        tracing::debug!(%cycle_id, ?outcome, "No view attached at completion, dropping result");
        return;
    };

    view.hide_loading_indicator();
    match result {
        FetchResult::Success(users) if !users.is_empty() => view.present_users(&users),
        FetchResult::Success(_) | FetchResult::Failure(_) => view.show_empty_state(),
    }

    tracing::info!(%cycle_id, ?outcome, "Fetch cycle delivered");
}
