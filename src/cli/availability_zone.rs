//! Availability zone commands

use super::context::CommandContext;
use super::output::{render_listing, render_record, render_task_list};
use super::prompt::ask_for_input;
use super::reporter::Subject;
use crate::domain::resources::{validate_name, AvailabilityZoneCreateSpec};
use crate::domain::task::TaskFilter;
use clap::Subcommand;
use std::io::Write;

#[derive(Subcommand, Debug, Clone)]
pub enum AvailabilityZoneCommand {
    /// Create a new availability zone
    Create {
        /// Availability zone name (prompted for when interactive)
        name: Option<String>,
    },

    /// Delete an availability zone
    Delete { id: String },

    /// List availability zones
    List,

    /// Show an availability zone
    Show { id: String },

    /// List the tasks of an availability zone
    Tasks {
        id: String,

        /// Filter by task state
        #[arg(long, short = 's')]
        state: Option<String>,
    },
}

impl AvailabilityZoneCommand {
    pub async fn execute(&self, ctx: &CommandContext<'_>, out: &mut dyn Write) -> anyhow::Result<()> {
        match self {
            Self::Create { name } => {
                let name = if ctx.is_interactive() {
                    ask_for_input("AvailabilityZone name: ", name.as_deref())?
                } else {
                    name.clone().unwrap_or_default()
                };
                validate_name("availability zone", &name)?;

                let task = ctx
                    .client
                    .create_availability_zone(&AvailabilityZoneCreateSpec { name: name.clone() })
                    .await?;
                let subject = Subject::Named {
                    kind: "availability zone",
                    name: &name,
                };
                ctx.reporter().report(&task.id, subject, out).await?;
            }
            Self::Delete { id } => {
                let task = ctx.client.delete_availability_zone(id).await?;
                ctx.reporter().report(&task.id, Subject::Entity, out).await?;
            }
            Self::List => {
                let zones = ctx.client.list_availability_zones().await?;
                let rows: Vec<Vec<String>> = zones
                    .iter()
                    .map(|z| vec![z.id.clone(), z.name.clone()])
                    .collect();
                write!(out, "{}", render_listing(ctx.mode, &["ID", "Name"], &rows))?;
            }
            Self::Show { id } => {
                let zone = ctx.client.get_availability_zone(id).await?;
                let title = format!("AvailabilityZone ID: {}", zone.id);
                let mut fields = vec![("Name", zone.name.clone()), ("State", zone.state.clone())];
                if !ctx.is_interactive() {
                    fields.insert(0, ("ID", zone.id.clone()));
                }
                write!(out, "{}", render_record(ctx.mode, &title, &fields))?;
            }
            Self::Tasks { id, state } => {
                let filter = TaskFilter::with_state(state.clone());
                let tasks = ctx.client.availability_zone_tasks(id, &filter).await?;
                write!(out, "{}", render_task_list(ctx.mode, &tasks))?;
            }
        }
        Ok(())
    }
}
