//! Status icons for CLI output

use crate::domain::task::TaskState;

/// Status icons for task states
pub struct StatusIcon;

impl StatusIcon {
    /// Task completed
    pub const SUCCESS: &'static str = "✓";

    /// Task failed
    pub const ERROR: &'static str = "✗";

    /// Task queued, not started yet
    pub const PENDING: &'static str = "⏳";

    /// Task running
    pub const RUNNING: &'static str = "▶";

    /// Unknown icon
    pub const UNKNOWN: &'static str = "?";

    pub fn for_state(state: &TaskState) -> &'static str {
        match state {
            TaskState::Completed => Self::SUCCESS,
            TaskState::Error => Self::ERROR,
            TaskState::Queued => Self::PENDING,
            TaskState::Started => Self::RUNNING,
            TaskState::Unknown(_) => Self::UNKNOWN,
        }
    }
}
