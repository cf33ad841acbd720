//! Event loop that owns the screen state on the UI thread.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::ui::mvi::Reducer;
use crate::ui::screen::{ScreenIntent, ScreenReducer, ScreenState};
use crate::view::ChannelView;

const TICK_RATE: Duration = Duration::from_millis(50);

#[derive(Debug, Error)]
pub enum HostError {
    #[error("screen did not settle within {waited:?}")]
    TimedOut { waited: Duration },
}

/// Owns the screen state and applies intents sent by [`ChannelView`]s.
///
/// Everything that mutates the state runs on the thread that drives the
/// host, whichever thread the presenter's completion ran on.
pub struct ScreenHost {
    state: ScreenState,
    tx: Sender<ScreenIntent>,
    rx: Receiver<ScreenIntent>,
}

impl ScreenHost {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            state: ScreenState::default(),
            tx,
            rx,
        }
    }

    /// A new view feeding this host.
    pub fn view(&self) -> Arc<ChannelView> {
        Arc::new(ChannelView::new(self.tx.clone()))
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    /// Apply every intent already queued, without blocking.
    ///
    /// Returns true if the state changed.
    pub fn drain(&mut self) -> bool {
        let before = self.state.clone();
        while let Ok(intent) = self.rx.try_recv() {
            self.apply(intent);
        }
        before != self.state
    }

    /// Block until the screen has settled on a result or `limit` elapses.
    ///
    /// Intents already queued are applied before the first settled check,
    /// so a cycle started after an earlier one settled is waited for.
    /// `on_change` runs after every intent that changed the state.
    pub fn run_until_settled<F>(
        &mut self,
        limit: Duration,
        mut on_change: F,
    ) -> Result<&ScreenState, HostError>
    where
        F: FnMut(&ScreenState),
    {
        let started = Instant::now();
        loop {
            while let Ok(intent) = self.rx.try_recv() {
                self.apply_reporting(intent, &mut on_change);
            }
            if self.state.is_settled() {
                return Ok(&self.state);
            }
            if started.elapsed() >= limit {
                return Err(HostError::TimedOut { waited: limit });
            }

            match self.rx.recv_timeout(TICK_RATE) {
                Ok(intent) => self.apply_reporting(intent, &mut on_change),
                Err(RecvTimeoutError::Timeout) => {}
                // The host keeps a sender, so the channel never disconnects.
                Err(RecvTimeoutError::Disconnected) => {}
            }
        }
    }

    fn apply_reporting<F>(&mut self, intent: ScreenIntent, on_change: &mut F)
    where
        F: FnMut(&ScreenState),
    {
        let before = self.state.clone();
        self.apply(intent);
        if before != self.state {
            on_change(&self.state);
        }
    }

    fn apply(&mut self, intent: ScreenIntent) {
        tracing::trace!(?intent, "Applying screen intent");
        let state = std::mem::take(&mut self.state);
        self.state = ScreenReducer::reduce(state, intent);
    }
}

impl Default for ScreenHost {
    fn default() -> Self {
        Self::new()
    }
}
