// task.rs — The one-shot submission routine.
//
// Runs after the host's archive step has produced the build artifact.
// Validation comes first and touches nothing; only once every mandatory
// input is present does the task derive paths, refresh the symbol archive,
// and upload.

use std::path::{Path, PathBuf};

use tf_config::TestFlightConfig;

use crate::archive;
use crate::error::SubmitError;
use crate::upload::UploadRequest;

/// Submission of one archived build.
pub struct SubmitTask {
    /// The archived build artifact to upload.
    archive: PathBuf,
    /// The built .app bundle; the .dSYM bundle sits next to it.
    app_bundle: PathBuf,
}

impl SubmitTask {
    pub fn new(archive: impl Into<PathBuf>, app_bundle: impl Into<PathBuf>) -> Self {
        Self {
            archive: archive.into(),
            app_bundle: app_bundle.into(),
        }
    }

    pub fn archive(&self) -> &Path {
        &self.archive
    }

    pub fn app_bundle(&self) -> &Path {
        &self.app_bundle
    }

    /// Validate, package the debug symbols, and upload.
    ///
    /// `notes` comes from the `notes` environment variable, not from the
    /// configuration. Runs to completion or fails fast on the first error.
    pub fn run(&self, config: &TestFlightConfig, notes: Option<&str>) -> Result<(), SubmitError> {
        let api_token = config.api_token().ok_or(SubmitError::MissingApiToken)?;
        let team_token = config.team_token().ok_or(SubmitError::MissingTeamToken)?;
        let notes = notes.ok_or(SubmitError::MissingNotes)?;

        let bundle = archive::dsym_bundle(&self.app_bundle);
        let dsym_zip = archive::ensure_archive(&bundle)?;

        UploadRequest::build(
            &self.archive,
            &dsym_zip,
            api_token,
            team_token,
            notes,
            config.distribution_lists(),
        )
        .execute()
    }
}
