//! Task commands

use super::context::CommandContext;
use super::output::{render_task, render_task_list};
use super::reporter::Subject;
use crate::domain::task::{TaskFilter, TaskSource};
use clap::Subcommand;
use std::io::Write;

#[derive(Subcommand, Debug, Clone)]
pub enum TaskCommand {
    /// Show a task and its steps
    Show { id: String },

    /// List tasks
    List {
        /// Only tasks acting on this entity id
        #[arg(long, short = 'e')]
        entity_id: Option<String>,

        /// Only tasks acting on this entity kind
        #[arg(long, short = 'k')]
        entity_kind: Option<String>,

        /// Filter by task state
        #[arg(long, short = 's')]
        state: Option<String>,
    },

    /// Wait for a task to finish, showing its progress
    Monitor { id: String },
}

impl TaskCommand {
    pub async fn execute(&self, ctx: &CommandContext<'_>, out: &mut dyn Write) -> anyhow::Result<()> {
        match self {
            Self::Show { id } => {
                let task = ctx.client.get_task(id).await?;
                write!(out, "{}", render_task(ctx.mode, &task))?;
            }
            Self::List {
                entity_id,
                entity_kind,
                state,
            } => {
                let filter = TaskFilter {
                    entity_id: entity_id.clone(),
                    entity_kind: entity_kind.clone(),
                    state: state.clone(),
                };
                let tasks = ctx.client.list_tasks(&filter).await?;
                write!(out, "{}", render_task_list(ctx.mode, &tasks))?;
            }
            Self::Monitor { id } => {
                ctx.reporter().report(id, Subject::Entity, out).await?;
            }
        }
        Ok(())
    }
}
