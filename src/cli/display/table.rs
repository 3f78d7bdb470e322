//! Table rendering for CLI output

use super::{ColorTheme, StatusIcon};
use crate::domain::task::Task;
use chrono::{DateTime, Local};
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};

/// Table renderer for formatted output
pub struct TableRenderer {
    theme: ColorTheme,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    /// Create a new table renderer with default theme
    pub fn new() -> Self {
        Self {
            theme: ColorTheme::default(),
        }
    }

    fn table(&self, headers: &[&str]) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(
                headers
                    .iter()
                    .map(|h| Cell::new(h).set_alignment(CellAlignment::Left))
                    .collect::<Vec<_>>(),
            );
        table
    }

    /// Render plain string rows under `headers`
    pub fn render_rows(&self, headers: &[&str], rows: &[Vec<String>]) -> String {
        let mut table = self.table(headers);
        for row in rows {
            table.add_row(row.iter().map(Cell::new).collect::<Vec<_>>());
        }
        table.to_string()
    }

    /// Render a task list with colored states
    pub fn render_tasks(&self, tasks: &[Task]) -> String {
        let mut table = self.table(&[
            "TASK",
            "START TIME",
            "DURATION",
            "OPERATION",
            "STATE",
            "ENTITY",
        ]);

        for task in tasks {
            table.add_row(vec![
                Cell::new(&task.id),
                Cell::new(format_timestamp(task.started_time)),
                Cell::new(
                    task.duration_millis()
                        .map(format_duration)
                        .unwrap_or_else(|| "-".to_string()),
                ),
                Cell::new(&task.operation),
                Cell::new(format!(
                    "{} {}",
                    StatusIcon::for_state(&task.state),
                    task.state
                ))
                .fg(self.theme.state_color(&task.state)),
                Cell::new(format!("{} {}", task.entity.kind, task.entity.id)),
            ]);
        }

        table.to_string()
    }

    /// Render one task with its steps
    pub fn render_task(&self, task: &Task) -> String {
        let mut summary = Table::new();
        summary
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        let duration = task
            .duration_millis()
            .map(format_duration)
            .unwrap_or_else(|| "-".to_string());
        let rows = [
            ("Task", task.id.clone()),
            ("Operation", task.operation.clone()),
            ("Entity", format!("{} {}", task.entity.kind, task.entity.id)),
            ("Queued", format_timestamp(task.queued_time)),
            ("Started", format_timestamp(task.started_time)),
            ("Ended", format_timestamp(task.end_time)),
            ("Duration", duration),
        ];
        for (label, value) in rows {
            summary.add_row(vec![Cell::new(label), Cell::new(value)]);
        }
        summary.add_row(vec![
            Cell::new("State"),
            Cell::new(format!("{} {}", StatusIcon::for_state(&task.state), task.state))
                .fg(self.theme.state_color(&task.state)),
        ]);

        let mut output = summary.to_string();
        if task.steps.is_empty() {
            return output;
        }

        let mut steps = self.table(&["#", "STEP", "STATE", "ERRORS"]);
        let mut ordered: Vec<_> = task.steps.iter().collect();
        ordered.sort_by_key(|s| s.sequence);
        for step in ordered {
            let errors: Vec<String> = step
                .errors
                .iter()
                .map(|e| format!("{}: {}", e.code, e.message))
                .collect();
            steps.add_row(vec![
                Cell::new(step.sequence),
                Cell::new(&step.operation),
                Cell::new(&step.state).fg(self.theme.state_color(&step.state)),
                Cell::new(errors.join("\n")).fg(self.theme.error),
            ]);
        }

        output.push('\n');
        output.push_str(&steps.to_string());
        output
    }
}

/// Local time for an epoch-milliseconds timestamp, `-` when unset
pub fn format_timestamp(millis: i64) -> String {
    if millis <= 0 {
        return "-".to_string();
    }
    DateTime::from_timestamp_millis(millis)
        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// `HH:MM:SS` for a duration in milliseconds
pub fn format_duration(millis: i64) -> String {
    let secs = millis.max(0) / 1000;
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
