use crate::model::UserRecord;
use crate::ui::mvi::Intent;

/// One presenter-driven update, marshalled onto the UI thread.
#[derive(Debug, Clone)]
pub enum ScreenIntent {
    PresentUsers { users: Vec<UserRecord> },
    ShowLoading,
    HideLoading,
    ShowEmpty,
}

impl Intent for ScreenIntent {}
