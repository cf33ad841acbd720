//! View contract driven by the presenter.
//!
//! A view is passive: it never asks for data, it only reacts to the four
//! calls below. How records are laid out is entirely up to the
//! implementation.

mod channel;

pub use channel::ChannelView;

use crate::model::UserRecord;

/// Capabilities a screen must expose to be driven by a [`UserPresenter`].
///
/// Calls may arrive on any thread; implementations that own UI state
/// should forward them to the thread that owns it (see [`ChannelView`]).
///
/// [`UserPresenter`]: crate::presenter::UserPresenter
pub trait UserView: Send + Sync {
    /// Render a batch of records.
    fn present_users(&self, users: &[UserRecord]);

    /// Enter the busy state. Calling it while already busy is a no-op.
    fn show_loading_indicator(&self);

    /// Leave the busy state. Calling it while not busy is a no-op.
    fn hide_loading_indicator(&self);

    /// Render the "no data" placeholder.
    fn show_empty_state(&self);
}
