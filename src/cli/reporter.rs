//! Progress and outcome reporting for asynchronous tasks

use super::display::{progress, task_spinner, StatusIcon};
use super::output::OutputMode;
use crate::domain::task::{Task, TaskPoller, TaskState};
use crate::shared::{PhotonError, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget};
use std::io::Write;

/// What a finished task is reported as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject<'a> {
    /// A resource created under a user-supplied name
    Named { kind: &'a str, name: &'a str },
    /// The entity the task acted on, by id only
    Entity,
    /// Nothing is printed on completion
    Silent,
}

/// Where a reported task stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportState {
    Submitted,
    Polling,
    Done(String),
    Failed(String),
    Timeout,
}

impl ReportState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ReportState::Done(_) | ReportState::Failed(_) | ReportState::Timeout
        )
    }

    /// Move to `Polling` once a status has been seen
    pub fn observe(&mut self, _task: &Task) {
        if !self.is_terminal() {
            *self = ReportState::Polling;
        }
    }

    /// Settle on the outcome of the poll
    pub fn settle(&mut self, outcome: &Result<Task>) {
        if self.is_terminal() {
            return;
        }
        *self = match outcome {
            Ok(task) => ReportState::Done(task.entity.id.clone()),
            Err(PhotonError::TaskTimeout { .. }) => ReportState::Timeout,
            Err(PhotonError::TaskFailed { detail, .. }) => ReportState::Failed(detail.clone()),
            Err(err) => ReportState::Failed(err.to_string()),
        };
    }
}

pub struct TaskReporter<'a> {
    poller: TaskPoller<'a>,
    mode: OutputMode,
    spinner: ProgressBar,
}

impl<'a> TaskReporter<'a> {
    /// Interactive reports draw a spinner on stderr; non-interactive ones
    /// draw nothing
    pub fn new(poller: TaskPoller<'a>, mode: OutputMode) -> Self {
        let target = if mode.is_interactive() {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        Self {
            poller,
            mode,
            spinner: task_spinner(target),
        }
    }

    pub fn with_draw_target(mut self, target: ProgressDrawTarget) -> Self {
        self.spinner = task_spinner(target);
        self
    }

    pub fn spinner(&self) -> &ProgressBar {
        &self.spinner
    }

    /// Wait for `task_id` and report it as `subject`, returning the entity id.
    ///
    /// Poll errors are returned to the caller and never written to `out`.
    pub async fn report(
        &self,
        task_id: &str,
        subject: Subject<'_>,
        out: &mut dyn Write,
    ) -> Result<String> {
        let mut state = ReportState::Submitted;

        self.spinner.set_message(format!("Waiting for task {}", task_id));
        progress::start(&self.spinner);
        let outcome = self
            .poller
            .wait_with_progress(task_id, |task| {
                state.observe(task);
                self.spinner.set_message(progress_line(task));
            })
            .await;
        self.spinner.finish_and_clear();

        state.settle(&outcome);
        let task = outcome?;
        let entity_id = match state {
            ReportState::Done(id) => id,
            _ => task.entity.id.clone(),
        };

        let line = match (self.mode, subject) {
            (_, Subject::Silent) => None,
            (OutputMode::Interactive, Subject::Named { kind, name }) => Some(format!(
                "{} {} completed for {} '{}' ID: {}",
                StatusIcon::SUCCESS.green(),
                task.operation,
                kind,
                name,
                entity_id
            )),
            (OutputMode::Interactive, Subject::Entity) => Some(format!(
                "{} {} completed for '{}' entity {}",
                StatusIcon::SUCCESS.green(),
                task.operation,
                task.entity.kind,
                entity_id
            )),
            (OutputMode::NonInteractive, Subject::Named { name, .. }) => {
                Some(format!("{}\t{}", name, entity_id))
            }
            (OutputMode::NonInteractive, Subject::Entity) => Some(entity_id.clone()),
        };
        if let Some(line) = line {
            writeln!(out, "{}", line)?;
        }

        Ok(entity_id)
    }
}

/// One-line live status: icon, operation, state and step position
pub fn progress_line(task: &Task) -> String {
    let icon = StatusIcon::for_state(&task.state);
    let mut line = format!("{} {} {}", icon, task.operation, task.state);
    if let Some((index, total, step)) = task.step_progress() {
        line.push_str(&format!(" [{}/{}] {}", index, total, step.operation));
    }
    if task.state == TaskState::Queued {
        line.push_str(" (waiting)");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::{Entity, PollPolicy, Step, TaskSource};
    use async_trait::async_trait;
    use std::time::Duration;

    struct FixedSource(Result<Task>);

    #[async_trait]
    impl TaskSource for FixedSource {
        async fn get_task(&self, _task_id: &str) -> Result<Task> {
            match &self.0 {
                Ok(task) => Ok(task.clone()),
                Err(PhotonError::TaskFailed {
                    task_id,
                    operation,
                    detail,
                }) => Err(PhotonError::TaskFailed {
                    task_id: task_id.clone(),
                    operation: operation.clone(),
                    detail: detail.clone(),
                }),
                Err(_) => Err(PhotonError::api(404, "NotFound", "no such task")),
            }
        }
    }

    fn task(state: TaskState) -> Task {
        Task {
            id: "task-1".to_string(),
            operation: "CREATE_NETWORK".to_string(),
            state,
            entity: Entity {
                id: "network-ID".to_string(),
                kind: "network".to_string(),
            },
            ..Default::default()
        }
    }

    fn policy() -> PollPolicy {
        PollPolicy {
            interval: Duration::from_millis(1),
            timeout: Duration::from_secs(5),
            retry_count: 0,
        }
    }

    async fn run(mode: OutputMode, subject: Subject<'_>, source: &FixedSource) -> (Result<String>, String) {
        let reporter = TaskReporter::new(TaskPoller::new(source, policy()), mode)
            .with_draw_target(ProgressDrawTarget::hidden());
        let mut out = Vec::new();
        let result = reporter.report("task-1", subject, &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_non_interactive_named() {
        let source = FixedSource(Ok(task(TaskState::Completed)));
        let subject = Subject::Named {
            kind: "network",
            name: "network_name",
        };
        let (result, out) = run(OutputMode::NonInteractive, subject, &source).await;
        assert_eq!(result.unwrap(), "network-ID");
        assert_eq!(out, "network_name\tnetwork-ID\n");
    }

    #[tokio::test]
    async fn test_non_interactive_entity_and_silent() {
        let source = FixedSource(Ok(task(TaskState::Completed)));
        let (_, out) = run(OutputMode::NonInteractive, Subject::Entity, &source).await;
        assert_eq!(out, "network-ID\n");

        let (result, out) = run(OutputMode::NonInteractive, Subject::Silent, &source).await;
        assert_eq!(result.unwrap(), "network-ID");
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_interactive_summary() {
        let source = FixedSource(Ok(task(TaskState::Completed)));
        let subject = Subject::Named {
            kind: "network",
            name: "net-a",
        };
        let (_, out) = run(OutputMode::Interactive, subject, &source).await;
        assert!(out.contains("CREATE_NETWORK completed for network 'net-a' ID: network-ID"));

        let (_, out) = run(OutputMode::Interactive, Subject::Entity, &source).await;
        assert!(out.contains("CREATE_NETWORK completed for 'network' entity network-ID"));
    }

    #[tokio::test]
    async fn test_interactive_spinner_follows_task() {
        let source = FixedSource(Ok(task(TaskState::Completed)));
        let reporter = TaskReporter::new(TaskPoller::new(&source, policy()), OutputMode::Interactive)
            .with_draw_target(ProgressDrawTarget::hidden());
        assert!(!reporter.spinner().is_finished());

        let mut out = Vec::new();
        reporter.report("task-1", Subject::Entity, &mut out).await.unwrap();

        let spinner = reporter.spinner();
        assert!(spinner.is_finished());
        assert_eq!(spinner.message(), progress_line(&task(TaskState::Completed)));
        let out = String::from_utf8(out).unwrap();
        assert!(!out.contains("COMPLETED"));
    }

    #[tokio::test]
    async fn test_spinner_cleared_on_failure() {
        let source = FixedSource(Ok(task(TaskState::Error)));
        let reporter = TaskReporter::new(TaskPoller::new(&source, policy()), OutputMode::Interactive)
            .with_draw_target(ProgressDrawTarget::hidden());

        let mut out = Vec::new();
        assert!(reporter.report("task-1", Subject::Entity, &mut out).await.is_err());
        assert!(reporter.spinner().is_finished());
    }

    #[tokio::test]
    async fn test_failure_is_returned_not_printed() {
        let source = FixedSource(Ok(task(TaskState::Error)));
        let (result, out) = run(OutputMode::NonInteractive, Subject::Entity, &source).await;
        assert!(matches!(result, Err(PhotonError::TaskFailed { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn test_state_transitions() {
        let mut state = ReportState::Submitted;
        state.observe(&task(TaskState::Queued));
        assert_eq!(state, ReportState::Polling);

        state.settle(&Ok(task(TaskState::Completed)));
        assert_eq!(state, ReportState::Done("network-ID".to_string()));

        state.observe(&task(TaskState::Started));
        state.settle(&Err(PhotonError::usage("ignored")));
        assert_eq!(state, ReportState::Done("network-ID".to_string()));
    }

    #[test]
    fn test_settle_on_errors() {
        let mut state = ReportState::Polling;
        state.settle(&Err(PhotonError::TaskTimeout {
            task_id: "t".to_string(),
            timeout: Duration::from_secs(1),
        }));
        assert_eq!(state, ReportState::Timeout);

        let mut state = ReportState::Polling;
        state.settle(&Err(PhotonError::TaskFailed {
            task_id: "t".to_string(),
            operation: "DELETE_VM".to_string(),
            detail: "disk full".to_string(),
        }));
        assert_eq!(state, ReportState::Failed("disk full".to_string()));
    }

    #[test]
    fn test_progress_line_with_steps() {
        let mut t = task(TaskState::Started);
        t.steps = vec![
            Step {
                sequence: 0,
                operation: "RESERVE".to_string(),
                state: TaskState::Completed,
                ..Default::default()
            },
            Step {
                sequence: 1,
                operation: "ATTACH".to_string(),
                state: TaskState::Started,
                ..Default::default()
            },
        ];
        let line = progress_line(&t);
        assert!(line.contains("CREATE_NETWORK STARTED"));
        assert!(line.contains("[2/2] ATTACH"));
    }
}
