// CLI command definitions

use super::availability_zone::AvailabilityZoneCommand;
use super::context::CommandContext;
use super::deployment::DeploymentCommand;
use super::network::NetworkCommand;
use super::output::OutputMode;
use super::task::TaskCommand;
use crate::domain::config::{apply_to_cli_config, parse_properties, CliConfig};
use crate::infrastructure::constants::{ENV_CONFIG, ENV_TARGET, ENV_TOKEN};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "photon",
    version,
    about = "Command line client for the Photon control plane",
    long_about = "Manage availability zones, networks, deployments and tasks of a Photon control plane"
)]
pub struct CliArgs {
    /// Print machine-readable output and never prompt
    #[arg(long, global = true)]
    pub non_interactive: bool,

    /// Control plane endpoint, e.g. https://10.0.0.1:9000
    #[arg(long, global = true, env = ENV_TARGET)]
    pub target: Option<String>,

    /// Bearer token sent with every request
    #[arg(long, global = true, env = ENV_TOKEN, hide_env_values = true)]
    pub token: Option<String>,

    /// Path to the CLI configuration file (TOML or YAML)
    /// Defaults to ~/.photon/config.toml when it exists
    #[arg(long, global = true, env = ENV_CONFIG, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level written to stderr (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Configuration overrides (-D key=value)
    ///
    /// Keys: target, token, request.timeout-secs, poll.interval-ms,
    /// poll.timeout-secs, poll.retry-count
    ///
    /// Example: -Dpoll.timeout-secs=600 -Dpoll.retry-count=5
    #[arg(short = 'D', global = true, value_name = "KEY=VALUE")]
    pub properties: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Options for availability zones
    #[command(subcommand)]
    AvailabilityZone(AvailabilityZoneCommand),

    /// Options for networks
    #[command(subcommand)]
    Network(NetworkCommand),

    /// Options for deployments
    #[command(subcommand)]
    Deployment(DeploymentCommand),

    /// Options for tasks
    #[command(subcommand)]
    Task(TaskCommand),
}

impl CliArgs {
    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_flag(self.non_interactive)
    }

    /// Resolve the configuration: file, then flags and environment, then
    /// `-D` properties
    pub fn load_config(&self) -> crate::Result<CliConfig> {
        let mut config = CliConfig::load(self.config.as_deref())?;

        if let Some(target) = &self.target {
            config.target = Some(target.clone());
        }
        if let Some(token) = &self.token {
            config.token = Some(token.clone());
        }

        let properties = parse_properties(&self.properties)?;
        apply_to_cli_config(&properties, &mut config)?;
        Ok(config)
    }
}

impl Commands {
    pub async fn execute(&self, ctx: &CommandContext<'_>, out: &mut dyn Write) -> anyhow::Result<()> {
        match self {
            Commands::AvailabilityZone(cmd) => cmd.execute(ctx, out).await,
            Commands::Network(cmd) => cmd.execute(ctx, out).await,
            Commands::Deployment(cmd) => cmd.execute(ctx, out).await,
            Commands::Task(cmd) => cmd.execute(ctx, out).await,
        }
    }
}
