//! # tf-cli
//!
//! Command-line interface for the TestFlight submission pipeline.
//!
//! - `tf submit` (alias `testflight`) — package the debug symbols of an
//!   archived build and upload both to TestFlight. Expects the host build's
//!   archive step to have run already; submission notes come from the
//!   `notes` environment variable.
//! - `tf config show` — print the resolved configuration snapshot.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// TestFlight submission pipeline.
#[derive(Parser)]
#[command(name = "tf", version, about)]
struct Cli {
    /// Project root directory (defaults to current directory).
    #[arg(long, default_value = ".")]
    project_root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit an archived build to TestFlight.
    #[command(alias = "testflight")]
    Submit {
        /// The archived build artifact to upload.
        #[arg(long)]
        archive: PathBuf,

        /// The built .app bundle; its .dSYM sibling is packaged alongside.
        #[arg(long)]
        app_bundle: PathBuf,
    },
    /// Inspect the TestFlight configuration.
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("tf_config=info".parse()?)
                .add_directive("tf_submit=info".parse()?)
                .add_directive("tf_cli=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let project_root = cli.project_root.canonicalize().unwrap_or(cli.project_root);

    match &cli.command {
        Commands::Submit {
            archive,
            app_bundle,
        } => commands::submit::execute(&project_root, archive, app_bundle),
        Commands::Config { command } => commands::config::execute(command, &project_root),
    }
}
