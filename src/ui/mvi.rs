//! Model-View-Intent primitives for screen state owned by the UI thread.
//!
//! ```text
//! UserView call ──→ Intent ──→ Reducer ──→ State ──→ render
//! ```
//!
//! Views forward presenter calls as intents; the UI thread folds them into
//! state with a pure reducer, so every visual transition is testable
//! without a terminal.

/// Snapshot of everything needed to draw a screen.
///
/// States are cloned rather than mutated in place, and compared to decide
/// whether a redraw is needed.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// An update requested by the presenter (through a view) or by the user.
pub trait Intent: Send + 'static {}

/// The only place where screen state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Fold one intent into the state. Must be free of side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
