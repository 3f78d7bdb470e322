//! Interactive vs. machine-readable rendering of command results

use super::display::{format_timestamp, TableRenderer};
use crate::domain::task::Task;

/// How results are written to the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Tables, progress and prompts for a human at the terminal
    Interactive,
    /// Tab-delimited lines for scripts; never prompts
    NonInteractive,
}

impl OutputMode {
    pub fn from_flag(non_interactive: bool) -> Self {
        if non_interactive {
            OutputMode::NonInteractive
        } else {
            OutputMode::Interactive
        }
    }

    pub fn is_interactive(self) -> bool {
        self == OutputMode::Interactive
    }
}

/// A list result: a count line plus one tab-delimited line per row, or a
/// table followed by a total footer
pub fn render_listing(mode: OutputMode, headers: &[&str], rows: &[Vec<String>]) -> String {
    match mode {
        OutputMode::NonInteractive => {
            let mut output = format!("{}\n", rows.len());
            for row in rows {
                output.push_str(&row.join("\t"));
                output.push('\n');
            }
            output
        }
        OutputMode::Interactive => {
            let mut output = TableRenderer::new().render_rows(headers, rows);
            output.push_str(&format!("\nTotal: {}\n", rows.len()));
            output
        }
    }
}

/// A single record: its values on one tab-delimited line, or a titled
/// block of aligned fields
pub fn render_record(mode: OutputMode, title: &str, fields: &[(&str, String)]) -> String {
    match mode {
        OutputMode::NonInteractive => {
            let values: Vec<&str> = fields.iter().map(|(_, v)| v.as_str()).collect();
            format!("{}\n", values.join("\t"))
        }
        OutputMode::Interactive => {
            let width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 2;
            let mut output = format!("{}\n", title);
            for (label, value) in fields {
                output.push_str(&format!("  {:<width$}{}\n", format!("{}:", label), value));
            }
            output
        }
    }
}

pub fn render_task_list(mode: OutputMode, tasks: &[Task]) -> String {
    match mode {
        OutputMode::NonInteractive => {
            let rows: Vec<Vec<String>> = tasks
                .iter()
                .map(|task| {
                    vec![
                        task.id.clone(),
                        task.state.to_string(),
                        task.entity.id.clone(),
                        task.entity.kind.clone(),
                        task.operation.clone(),
                        task.started_time.to_string(),
                        task.duration_millis()
                            .map(|ms| (ms / 1000).to_string())
                            .unwrap_or_default(),
                    ]
                })
                .collect();
            render_listing(mode, &[], &rows)
        }
        OutputMode::Interactive => {
            let mut output = TableRenderer::new().render_tasks(tasks);
            output.push_str("\nYou can run 'photon task show <id>' for more information");
            output.push_str(&format!("\nTotal: {}\n", tasks.len()));
            output
        }
    }
}

/// A single task: one tab-delimited line, or a detail table with steps
pub fn render_task(mode: OutputMode, task: &Task) -> String {
    match mode {
        OutputMode::NonInteractive => render_record(
            mode,
            "",
            &[
                ("Task", task.id.clone()),
                ("State", task.state.to_string()),
                ("Entity", task.entity.id.clone()),
                ("Kind", task.entity.kind.clone()),
                ("Operation", task.operation.clone()),
                ("Started", format_timestamp(task.started_time)),
            ],
        ),
        OutputMode::Interactive => format!("{}\n", TableRenderer::new().render_task(task)),
    }
}
