// config.rs — `tf config show`: print the resolved configuration.

use std::path::Path;

use clap::Subcommand;
use tf_build::ProjectModel;
use tf_config::manifest::MANIFEST_FILE;
use tf_config::{TestFlightConfig, TestFlightManifest};

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the configuration snapshot as JSON.
    Show,
}

pub fn execute(cmd: &ConfigCommands, project_root: &Path) -> anyhow::Result<()> {
    match cmd {
        ConfigCommands::Show => show(project_root),
    }
}

fn show(project_root: &Path) -> anyhow::Result<()> {
    let manifest = TestFlightManifest::load_or_default(&project_root.join(MANIFEST_FILE));
    let mut host = ProjectModel::new(project_root);
    let mut config = TestFlightConfig::new();
    manifest.apply(&mut config, &mut host)?;

    println!("{}", serde_json::to_string_pretty(&config.describe())?);
    Ok(())
}
