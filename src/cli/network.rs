//! Network commands

use super::context::CommandContext;
use super::output::{render_listing, render_record, render_task_list};
use super::prompt::ask_for_input;
use super::reporter::Subject;
use crate::domain::resources::{parse_list, validate_name, NetworkCreateSpec};
use crate::domain::task::TaskFilter;
use clap::Subcommand;
use std::io::Write;

#[derive(Subcommand, Debug, Clone)]
pub enum NetworkCommand {
    /// Create a new network
    Create {
        /// Network name
        #[arg(long, short = 'n')]
        name: Option<String>,

        /// Network description
        #[arg(long, short = 'd')]
        description: Option<String>,

        /// Comma-separated port group names
        #[arg(long, short = 'p')]
        portgroups: Option<String>,
    },

    /// Delete a network
    Delete { id: String },

    /// List networks
    List {
        /// Only networks with this name
        #[arg(long, short = 'n')]
        name: Option<String>,
    },

    /// Show a network
    Show { id: String },

    /// List the tasks of a network
    Tasks {
        id: String,

        /// Filter by task state
        #[arg(long, short = 's')]
        state: Option<String>,
    },
}

impl NetworkCommand {
    pub async fn execute(&self, ctx: &CommandContext<'_>, out: &mut dyn Write) -> anyhow::Result<()> {
        match self {
            Self::Create {
                name,
                description,
                portgroups,
            } => {
                let (name, description, portgroups) = if ctx.is_interactive() {
                    (
                        ask_for_input("Network name: ", name.as_deref())?,
                        ask_for_input("Description of network: ", description.as_deref())?,
                        ask_for_input(
                            "PortGroups of network (comma-separated): ",
                            portgroups.as_deref(),
                        )?,
                    )
                } else {
                    (
                        name.clone().unwrap_or_default(),
                        description.clone().unwrap_or_default(),
                        portgroups.clone().unwrap_or_default(),
                    )
                };

                validate_name("network", &name)?;
                if portgroups.trim().is_empty() {
                    return Err(crate::PhotonError::usage("Please provide portgroups").into());
                }
                let spec = NetworkCreateSpec {
                    name: name.clone(),
                    description,
                    port_groups: parse_list("--portgroups", &portgroups)?,
                };

                let task = ctx.client.create_network(&spec).await?;
                let subject = Subject::Named {
                    kind: "network",
                    name: &name,
                };
                ctx.reporter().report(&task.id, subject, out).await?;
            }
            Self::Delete { id } => {
                let task = ctx.client.delete_network(id).await?;
                ctx.reporter().report(&task.id, Subject::Entity, out).await?;
            }
            Self::List { name } => {
                let networks = ctx.client.list_networks(name.as_deref()).await?;
                let rows: Vec<Vec<String>> = networks
                    .iter()
                    .map(|n| {
                        vec![
                            n.id.clone(),
                            n.name.clone(),
                            n.state.clone(),
                            n.port_groups.join(","),
                            n.description.clone(),
                        ]
                    })
                    .collect();
                write!(
                    out,
                    "{}",
                    render_listing(
                        ctx.mode,
                        &["ID", "Name", "State", "PortGroups", "Descriptions"],
                        &rows
                    )
                )?;
            }
            Self::Show { id } => {
                let network = ctx.client.get_network(id).await?;
                let title = format!("Network ID: {}", network.id);
                let mut fields = vec![
                    ("Name", network.name.clone()),
                    ("State", network.state.clone()),
                    ("Description", network.description.clone()),
                    ("Port Groups", network.port_groups.join(",")),
                    ("Default", network.is_default.to_string()),
                ];
                if !ctx.is_interactive() {
                    fields.insert(0, ("ID", network.id.clone()));
                }
                write!(out, "{}", render_record(ctx.mode, &title, &fields))?;
            }
            Self::Tasks { id, state } => {
                let filter = TaskFilter::with_state(state.clone());
                let tasks = ctx.client.network_tasks(id, &filter).await?;
                write!(out, "{}", render_task_list(ctx.mode, &tasks))?;
            }
        }
        Ok(())
    }
}
