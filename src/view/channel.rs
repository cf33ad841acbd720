use std::sync::mpsc::Sender;

use crate::model::UserRecord;
use crate::ui::screen::ScreenIntent;
use crate::view::UserView;

/// View that marshals every call onto the UI thread as a [`ScreenIntent`].
///
/// The receiving end is owned by the event loop that holds the screen
/// state; it applies intents through the screen reducer in arrival order.
pub struct ChannelView {
    tx: Sender<ScreenIntent>,
}

impl ChannelView {
    pub fn new(tx: Sender<ScreenIntent>) -> Self {
        Self { tx }
    }

    fn send(&self, intent: ScreenIntent) {
        if self.tx.send(intent).is_err() {
            tracing::debug!("screen event loop gone, dropping view update");
        }
    }
}

impl UserView for ChannelView {
    fn present_users(&self, users: &[UserRecord]) {
        self.send(ScreenIntent::PresentUsers {
            users: users.to_vec(),
        });
    }

    fn show_loading_indicator(&self) {
        self.send(ScreenIntent::ShowLoading);
    }

    fn hide_loading_indicator(&self) {
        self.send(ScreenIntent::HideLoading);
    }

    fn show_empty_state(&self) {
        self.send(ScreenIntent::ShowEmpty);
    }
}
