//! Deployment commands

use super::context::CommandContext;
use super::output::{render_listing, render_record};
use super::prompt::ask_for_input;
use super::reporter::Subject;
use crate::domain::resources::{
    parse_list, require_arg, AuthInfo, DeploymentCreateSpec, ImageDatastores, MigrationSpec,
};
use clap::{Args, Subcommand};
use std::io::Write;

#[derive(Subcommand, Debug, Clone)]
pub enum DeploymentCommand {
    /// Create a new deployment
    Create(DeploymentCreateArgs),

    /// Delete a deployment
    Delete { id: String },

    /// List deployments
    List,

    /// Show a deployment
    Show { id: String },

    /// List the hosts of a deployment
    ListHosts { id: String },

    /// List the VMs of a deployment
    ListVms { id: String },

    /// Start migrating from another deployment's load balancer
    PrepareMigration {
        /// Load balancer address of the source deployment
        source_address: String,
        id: String,
    },

    /// Complete a migration started with prepare-migration
    FinalizeMigration {
        /// Load balancer address of the source deployment
        source_address: String,
        id: String,
    },

    /// Replace the image datastores of a deployment
    SetImageDatastores {
        id: String,

        /// Comma-separated image datastore names
        datastores: String,
    },
}

impl DeploymentCommand {
    pub async fn execute(&self, ctx: &CommandContext<'_>, out: &mut dyn Write) -> anyhow::Result<()> {
        match self {
            Self::Create(args) => {
                let spec = args.create_spec(ctx)?;
                let task = ctx.client.create_deployment(&spec).await?;
                ctx.reporter().report(&task.id, Subject::Entity, out).await?;
            }
            Self::Delete { id } => {
                let task = ctx.client.delete_deployment(id).await?;
                ctx.reporter().report(&task.id, Subject::Entity, out).await?;
            }
            Self::List => {
                let deployments = ctx.client.list_deployments().await?;
                let rows: Vec<Vec<String>> = deployments
                    .iter()
                    .map(|d| vec![d.id.clone(), d.state.clone()])
                    .collect();
                write!(out, "{}", render_listing(ctx.mode, &["ID", "State"], &rows))?;
            }
            Self::Show { id } => {
                let deployment = ctx.client.get_deployment(id).await?;
                let title = format!("Deployment ID: {}", deployment.id);
                let mut fields = vec![
                    ("State", deployment.state.clone()),
                    ("Image Datastores", deployment.image_datastores.join(",")),
                    (
                        "Use image datastore for vms",
                        deployment.use_image_datastore_for_vms.to_string(),
                    ),
                    (
                        "Syslog Endpoint",
                        deployment.syslog_endpoint.clone().unwrap_or_default(),
                    ),
                    ("Ntp Endpoint", deployment.ntp_endpoint.clone().unwrap_or_default()),
                    ("Auth Enabled", deployment.auth.enabled.to_string()),
                ];
                if deployment.auth.enabled {
                    fields.push((
                        "Auth Endpoint",
                        deployment.auth.endpoint.clone().unwrap_or_default(),
                    ));
                    fields.push(("Auth Tenant", deployment.auth.tenant.clone().unwrap_or_default()));
                    fields.push(("Security Groups", deployment.auth.security_groups.join(",")));
                }
                if let Some(migration) = &deployment.migration {
                    fields.push((
                        "Migration Cycles",
                        migration.completed_data_migration_cycles.to_string(),
                    ));
                    fields.push((
                        "Migration Progress",
                        format!(
                            "{}/{}",
                            migration.data_migration_cycle_progress,
                            migration.data_migration_cycle_size
                        ),
                    ));
                }
                if !ctx.is_interactive() {
                    fields.insert(0, ("ID", deployment.id.clone()));
                }
                write!(out, "{}", render_record(ctx.mode, &title, &fields))?;
            }
            Self::ListHosts { id } => {
                let hosts = ctx.client.deployment_hosts(id).await?;
                let rows: Vec<Vec<String>> = hosts
                    .iter()
                    .map(|h| {
                        vec![
                            h.id.clone(),
                            h.state.clone(),
                            h.address.clone(),
                            h.tags.join(","),
                        ]
                    })
                    .collect();
                write!(
                    out,
                    "{}",
                    render_listing(ctx.mode, &["ID", "State", "IP", "Tags"], &rows)
                )?;
            }
            Self::ListVms { id } => {
                let vms = ctx.client.deployment_vms(id).await?;
                let rows: Vec<Vec<String>> = vms
                    .iter()
                    .map(|vm| vec![vm.id.clone(), vm.name.clone(), vm.state.clone()])
                    .collect();
                write!(out, "{}", render_listing(ctx.mode, &["ID", "Name", "State"], &rows))?;
            }
            Self::PrepareMigration { source_address, id } => {
                let spec = MigrationSpec {
                    source_load_balancer_address: source_address.clone(),
                };
                let task = ctx.client.initialize_migration(id, &spec).await?;
                ctx.reporter().report(&task.id, Subject::Entity, out).await?;
            }
            Self::FinalizeMigration { source_address, id } => {
                let spec = MigrationSpec {
                    source_load_balancer_address: source_address.clone(),
                };
                let task = ctx.client.finalize_migration(id, &spec).await?;
                ctx.reporter().report(&task.id, Subject::Entity, out).await?;
            }
            Self::SetImageDatastores { id, datastores } => {
                let datastores = ImageDatastores {
                    items: parse_list("image datastores", datastores)?,
                };
                let task = ctx.client.set_image_datastores(id, &datastores).await?;
                ctx.reporter().report(&task.id, Subject::Entity, out).await?;
            }
        }
        Ok(())
    }
}

#[derive(Args, Debug, Clone)]
pub struct DeploymentCreateArgs {
    /// Comma-separated image datastore names
    #[arg(long, short = 'i')]
    pub image_datastores: Option<String>,

    /// Syslog endpoint
    #[arg(long, short = 's')]
    pub syslog_endpoint: Option<String>,

    /// NTP endpoint
    #[arg(long, short = 'n')]
    pub ntp_endpoint: Option<String>,

    /// Use the image datastore for VMs
    #[arg(long, short = 'v')]
    pub use_image_datastore_for_vms: bool,

    /// Enable authentication
    #[arg(long, short = 'a')]
    pub enable_auth: bool,

    /// OAuth server address
    #[arg(long, short = 'o')]
    pub oauth_endpoint: Option<String>,

    /// OAuth server port
    #[arg(long, short = 'r')]
    pub oauth_port: Option<u16>,

    /// OAuth tenant
    #[arg(long, short = 't')]
    pub oauth_tenant: Option<String>,

    /// OAuth username
    #[arg(long, short = 'u')]
    pub oauth_username: Option<String>,

    /// OAuth password
    #[arg(long, short = 'p')]
    pub oauth_password: Option<String>,

    /// Comma-separated OAuth security groups
    #[arg(long, short = 'g')]
    pub security_groups: Option<String>,
}

impl DeploymentCreateArgs {
    /// Build the create request, prompting for the datastores when interactive
    fn create_spec(&self, ctx: &CommandContext<'_>) -> crate::Result<DeploymentCreateSpec> {
        let Self {
            image_datastores,
            syslog_endpoint,
            ntp_endpoint,
            use_image_datastore_for_vms,
            enable_auth,
            oauth_endpoint,
            oauth_port,
            oauth_tenant,
            oauth_username,
            oauth_password,
            security_groups,
        } = self;

        let datastores = if ctx.is_interactive() {
            ask_for_input("Image datastore names (comma-separated): ", image_datastores.as_deref())?
        } else {
            image_datastores.clone().unwrap_or_default()
        };
        let usage = "deployment create --image-datastores <a,b> [<options>]";
        let datastores = require_arg(Some(&datastores), usage)?;

        let auth = if *enable_auth {
            let usage = "deployment create --enable-auth --oauth-endpoint <address> \
                --oauth-tenant <tenant> --oauth-username <user> --oauth-password <password>";
            AuthInfo {
                enabled: true,
                endpoint: Some(require_arg(oauth_endpoint.as_deref(), usage)?),
                port: *oauth_port,
                tenant: Some(require_arg(oauth_tenant.as_deref(), usage)?),
                username: Some(require_arg(oauth_username.as_deref(), usage)?),
                password: Some(require_arg(oauth_password.as_deref(), usage)?),
                security_groups: match security_groups.as_deref() {
                    Some(raw) if !raw.trim().is_empty() => parse_list("--security-groups", raw)?,
                    _ => Vec::new(),
                },
            }
        } else {
            AuthInfo::default()
        };

        Ok(DeploymentCreateSpec {
            image_datastores: parse_list("--image-datastores", &datastores)?,
            syslog_endpoint: syslog_endpoint.clone().filter(|s| !s.is_empty()),
            ntp_endpoint: ntp_endpoint.clone().filter(|s| !s.is_empty()),
            use_image_datastore_for_vms: *use_image_datastore_for_vms,
            auth,
        })
    }
}
