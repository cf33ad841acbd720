use crate::model::UserRecord;
use crate::ui::mvi::UiState;

/// What the body of the user list screen shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScreenContent {
    /// Nothing fetched yet.
    #[default]
    Idle,
    Rendered {
        users: Vec<UserRecord>,
    },
    /// "No data" placeholder.
    Empty,
}

/// Coarse phase of the screen, for callers that only need to branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenPhase {
    Idle,
    Loading,
    Rendered,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScreenState {
    /// Busy indicator, independent of the content underneath it.
    pub loading: bool,
    pub content: ScreenContent,
}

impl UiState for ScreenState {}

impl ScreenState {
    pub fn phase(&self) -> ScreenPhase {
        if self.loading {
            return ScreenPhase::Loading;
        }
        match self.content {
            ScreenContent::Idle => ScreenPhase::Idle,
            ScreenContent::Rendered { .. } => ScreenPhase::Rendered,
            ScreenContent::Empty => ScreenPhase::Empty,
        }
    }

    /// True once a cycle has delivered its result and the indicator is off.
    pub fn is_settled(&self) -> bool {
        matches!(self.phase(), ScreenPhase::Rendered | ScreenPhase::Empty)
    }

    pub fn users(&self) -> &[UserRecord] {
        match &self.content {
            ScreenContent::Rendered { users } => users,
            _ => &[],
        }
    }
}
