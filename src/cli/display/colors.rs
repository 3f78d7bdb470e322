//! Color theme for CLI output

use crate::domain::task::TaskState;
use comfy_table::Color as TableColor;

/// Color theme for terminal output
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub success: TableColor,
    pub warning: TableColor,
    pub error: TableColor,
    pub info: TableColor,
    pub muted: TableColor,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            success: TableColor::Green,
            warning: TableColor::Yellow,
            error: TableColor::Red,
            info: TableColor::Cyan,
            muted: TableColor::DarkGrey,
        }
    }
}

impl ColorTheme {
    /// Get color based on task or step state
    pub fn state_color(&self, state: &TaskState) -> TableColor {
        match state {
            TaskState::Completed => self.success,
            TaskState::Started => self.info,
            TaskState::Queued => self.warning,
            TaskState::Error => self.error,
            TaskState::Unknown(_) => self.muted,
        }
    }
}
