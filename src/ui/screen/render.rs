use serde_json::Value;

use crate::model::{User, UserRecord};
use crate::ui::screen::state::{ScreenContent, ScreenState};

pub const LOADING_LINE: &str = "Loading users...";
pub const IDLE_LINE: &str = "No users loaded yet";
pub const EMPTY_LINE: &str = "No users to show";

/// Lay out the screen as plain text lines.
pub fn render_lines(state: &ScreenState) -> Vec<String> {
    let mut lines = Vec::new();
    if state.loading {
        lines.push(LOADING_LINE.to_string());
    }

    match &state.content {
        ScreenContent::Idle => lines.push(IDLE_LINE.to_string()),
        ScreenContent::Empty => lines.push(EMPTY_LINE.to_string()),
        ScreenContent::Rendered { users } => {
            lines.extend(users.iter().map(render_record));
        }
    }
    lines
}

fn render_record(record: &UserRecord) -> String {
    if let Some(user) = User::from_record(record) {
        return format!("{} <{}>, {}", user.full_name(), user.email, user.age);
    }

    // Unknown shape: fall back to the raw fields.
    record
        .fields()
        .iter()
        .map(|(key, value)| match value {
            Value::String(text) => format!("{}: {}", key, text),
            other => format!("{}: {}", key, other),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
