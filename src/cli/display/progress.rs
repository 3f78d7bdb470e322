//! Live spinner shown while a task is polled

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const TICK: Duration = Duration::from_millis(80);

/// Spinner drawing to `target`; stderr hides itself when it is not a terminal
pub fn task_spinner(target: ProgressDrawTarget) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(None, target);
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    pb.set_style(style);
    pb
}

/// Start ticking so the spinner moves between status checks
pub fn start(pb: &ProgressBar) {
    pb.enable_steady_tick(TICK);
}
