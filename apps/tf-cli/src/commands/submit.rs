// submit.rs — `tf submit`: package debug symbols and upload the build.

use std::path::Path;

use tf_build::ProjectModel;
use tf_config::manifest::MANIFEST_FILE;
use tf_config::{TestFlightConfig, TestFlightManifest};
use tf_submit::SubmitTask;

pub fn execute(project_root: &Path, archive: &Path, app_bundle: &Path) -> anyhow::Result<()> {
    let manifest = TestFlightManifest::load_or_default(&project_root.join(MANIFEST_FILE));
    let mut host = ProjectModel::new(project_root);
    let mut config = TestFlightConfig::new();
    manifest.apply(&mut config, &mut host)?;

    // Notes travel out-of-band, per invocation, not in the manifest.
    let notes = std::env::var("notes").ok();

    let task = SubmitTask::new(archive, app_bundle);
    task.run(&config, notes.as_deref())?;

    tracing::info!("submitted {}", archive.display());
    Ok(())
}
