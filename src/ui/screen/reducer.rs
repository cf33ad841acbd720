use crate::ui::mvi::Reducer;
use crate::ui::screen::intent::ScreenIntent;
use crate::ui::screen::state::{ScreenContent, ScreenState};

pub struct ScreenReducer;

impl Reducer for ScreenReducer {
    type State = ScreenState;
    type Intent = ScreenIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ScreenIntent::ShowLoading => ScreenState {
                loading: true,
                ..state
            },
            ScreenIntent::HideLoading => ScreenState {
                loading: false,
                ..state
            },
            // Content replaces whatever the previous cycle left behind;
            // the indicator is left to HideLoading.
            ScreenIntent::PresentUsers { users } => ScreenState {
                content: ScreenContent::Rendered { users },
                ..state
            },
            ScreenIntent::ShowEmpty => ScreenState {
                content: ScreenContent::Empty,
                ..state
            },
        }
    }
}
