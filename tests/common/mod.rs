//! Shared test doubles for presenter tests.

#![allow(dead_code)]

use parking_lot::Mutex;
use serde_json::json;
use std::sync::Arc;

use userscreen::model::{FetchFailure, FetchResult, UserRecord};
use userscreen::service::{FetchCompletion, UserService};
use userscreen::view::UserView;

/// A call observed by [`RecordingView`].
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    PresentUsers(Vec<UserRecord>),
    ShowLoading,
    HideLoading,
    ShowEmpty,
}

/// View that records every call it receives, in order.
#[derive(Default)]
pub struct RecordingView {
    calls: Mutex<Vec<ViewCall>>,
}

impl RecordingView {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<ViewCall> {
        self.calls.lock().clone()
    }

    pub fn count(&self, matcher: fn(&ViewCall) -> bool) -> usize {
        self.calls.lock().iter().filter(|call| matcher(call)).count()
    }

    fn record(&self, call: ViewCall) {
        self.calls.lock().push(call);
    }
}

impl UserView for RecordingView {
    fn present_users(&self, users: &[UserRecord]) {
        self.record(ViewCall::PresentUsers(users.to_vec()));
    }

    fn show_loading_indicator(&self) {
        self.record(ViewCall::ShowLoading);
    }

    fn hide_loading_indicator(&self) {
        self.record(ViewCall::HideLoading);
    }

    fn show_empty_state(&self) {
        self.record(ViewCall::ShowEmpty);
    }
}

/// Service that parks completions until the test resolves them.
///
/// Clones share the same queue, so a test can keep a handle after moving
/// the service into a presenter.
#[derive(Clone, Default)]
pub struct ManualUserService {
    pending: Arc<Mutex<Vec<FetchCompletion>>>,
}

impl ManualUserService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.pending.lock().len()
    }

    /// Resolve the oldest pending fetch.
    pub fn complete_next(&self, result: FetchResult) {
        let completion = {
            let mut pending = self.pending.lock();
            assert!(!pending.is_empty(), "no pending fetch to complete");
            pending.remove(0)
        };
        completion(result);
    }

    /// Resolve the most recent pending fetch.
    pub fn complete_last(&self, result: FetchResult) {
        let completion = self
            .pending
            .lock()
            .pop()
            .expect("no pending fetch to complete");
        completion(result);
    }
}

impl UserService for ManualUserService {
    fn fetch_users(&self, completion: FetchCompletion) {
        self.pending.lock().push(completion);
    }
}

pub fn record(name: &str) -> UserRecord {
    serde_json::from_value(json!({ "name": name })).expect("record")
}

pub fn records(names: &[&str]) -> Vec<UserRecord> {
    names.iter().map(|name| record(name)).collect()
}

pub fn failure() -> FetchResult {
    FetchResult::Failure(FetchFailure::from_pairs([
        ("kind", "network"),
        ("error", "connection reset"),
    ]))
}
