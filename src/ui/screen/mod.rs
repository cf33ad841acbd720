//! The user list screen: state, intents, reducer and text layout.

mod intent;
mod reducer;
mod render;
mod state;

pub use intent::ScreenIntent;
pub use reducer::ScreenReducer;
pub use render::{render_lines, EMPTY_LINE, IDLE_LINE, LOADING_LINE};
pub use state::{ScreenContent, ScreenPhase, ScreenState};
