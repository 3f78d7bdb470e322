//! Build automation for photon-cli
//!
//! Usage: cargo xtask <command>
//!
//! Available commands:
//! - build: Build the `photon` binary
//! - test: Run unit and/or integration tests
//! - dist: Package a release tarball for cargo-binstall
//! - ci: Run formatting, clippy and tests

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use xshell::{cmd, Shell};

const BIN: &str = "photon";
const PACKAGE: &str = "photon-cli";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for photon-cli")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the photon binary
    Build {
        /// Build in release mode
        #[arg(long)]
        release: bool,
    },
    /// Run tests
    Test {
        /// Only the unit tests inside src/
        #[arg(long, conflicts_with = "integration")]
        unit: bool,
        /// Only the integration tests under tests/
        #[arg(long)]
        integration: bool,
        /// Only tests whose name contains this filter
        filter: Option<String>,
    },
    /// Package target/<triple>/release/photon as photon-cli-<triple>.tar.gz
    Dist {
        /// Target triple (defaults to the host)
        #[arg(long)]
        target: Option<String>,
    },
    /// Run CI checks (format, clippy, test)
    Ci,
    /// Format code
    Format {
        /// Check formatting without modifying files
        #[arg(long)]
        check: bool,
    },
    /// Run clippy
    Clippy,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;

    sh.change_dir(project_root()?);

    match cli.command {
        Commands::Build { release } => build(&sh, release),
        Commands::Test {
            unit,
            integration,
            filter,
        } => test(&sh, unit, integration, filter.as_deref()),
        Commands::Dist { target } => dist(&sh, target),
        Commands::Ci => ci(&sh),
        Commands::Format { check } => format(&sh, check),
        Commands::Clippy => clippy(&sh),
    }
}

fn build(sh: &Shell, release: bool) -> Result<()> {
    println!("🔨 Building {}...", BIN);

    if release {
        cmd!(sh, "cargo build --release --bin {BIN}").run()?;
        println!("✅ Release build completed: target/release/{}", BIN);
    } else {
        cmd!(sh, "cargo build --bin {BIN}").run()?;
        println!("✅ Debug build completed: target/debug/{}", BIN);
    }

    Ok(())
}

fn test(sh: &Shell, unit: bool, integration: bool, filter: Option<&str>) -> Result<()> {
    println!("🧪 Running tests...");

    let filter: Vec<&str> = filter.into_iter().collect();
    if unit {
        cmd!(sh, "cargo test -p {PACKAGE} --lib {filter...}").run()?;
    } else if integration {
        cmd!(sh, "cargo test -p {PACKAGE} --tests {filter...}").run()?;
    } else {
        cmd!(sh, "cargo test --workspace {filter...}").run()?;
    }

    println!("✅ All tests passed");
    Ok(())
}

fn dist(sh: &Shell, target: Option<String>) -> Result<()> {
    let root = project_root()?;
    let triple = match target {
        Some(triple) => triple,
        None => host_triple(sh)?,
    };
    println!("📦 Packaging {} for {}...", BIN, triple);

    cmd!(sh, "cargo build --release --bin {BIN} --target {triple}").run()?;

    let binary = root.join("target").join(&triple).join("release").join(BIN);
    if !binary.exists() {
        bail!("Release binary not found at {}", binary.display());
    }

    let stage = root.join("dist").join(&triple);
    sh.create_dir(&stage)?;
    sh.copy_file(&binary, stage.join(BIN))?;

    let archive_name = format!("{}-{}.tar.gz", PACKAGE, triple);
    let archive = root.join("dist").join(&archive_name);
    cmd!(sh, "tar -czf {archive} -C {stage} {BIN}")
        .run()
        .context("Failed to create tarball")?;

    println!("✅ Distribution package created: dist/{}", archive_name);
    Ok(())
}

fn host_triple(sh: &Shell) -> Result<String> {
    let info = cmd!(sh, "rustc -vV").read()?;
    info.lines()
        .find_map(|line| line.strip_prefix("host: "))
        .map(|host| host.trim().to_string())
        .context("rustc -vV did not report a host triple")
}

fn ci(sh: &Shell) -> Result<()> {
    println!("🔍 Running CI checks...");

    println!("\n📝 Checking formatting...");
    format(sh, true)?;

    println!("\n🔧 Running clippy...");
    clippy(sh)?;

    println!("\n🧪 Running tests...");
    test(sh, false, false, None)?;

    println!("\n✅ All CI checks passed!");
    Ok(())
}

fn format(sh: &Shell, check: bool) -> Result<()> {
    if check {
        cmd!(sh, "cargo fmt --all -- --check").run()?;
        println!("✅ Code formatting is correct");
    } else {
        cmd!(sh, "cargo fmt --all").run()?;
        println!("✅ Code formatted");
    }
    Ok(())
}

fn clippy(sh: &Shell) -> Result<()> {
    cmd!(
        sh,
        "cargo clippy --workspace --all-targets -- -D warnings"
    )
    .run()?;
    println!("✅ Clippy checks passed");
    Ok(())
}

fn project_root() -> Result<PathBuf> {
    Path::new(&env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(1)
        .map(Path::to_path_buf)
        .context("xtask must live one level below the workspace root")
}
