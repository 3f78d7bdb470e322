// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;
use photon_cli::cli::{CliArgs, CommandContext};
use photon_cli::infrastructure::photon::PhotonClient;
use tracing::Level;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Logs go to stderr so stdout stays parseable
    let level: Level = args
        .log_level
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid log level: {}", args.log_level))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = args.load_config()?;
    let client = PhotonClient::from_config(&config)?;
    let ctx = CommandContext::new(&client, args.output_mode());

    let mut stdout = std::io::stdout();
    args.command.execute(&ctx, &mut stdout).await
}
