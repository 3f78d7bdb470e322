//! Command line surface: argument parsing, handlers and rendering

pub mod availability_zone;
pub mod commands;
pub mod context;
pub mod deployment;
pub mod display;
pub mod network;
pub mod output;
pub mod prompt;
pub mod reporter;
pub mod task;

pub use commands::{CliArgs, Commands};
pub use context::CommandContext;
pub use output::OutputMode;
pub use reporter::{ReportState, Subject, TaskReporter};
