// error.rs — Error types for the submission task.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while packaging and uploading a build.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// No API token configured.
    #[error("a value for testflight.api_token is mandatory")]
    MissingApiToken,

    /// No team token configured.
    #[error("a value for testflight.team_token is mandatory")]
    MissingTeamToken,

    /// No submission notes supplied.
    #[error("submission notes are mandatory and come from the `notes` environment variable. Example: notes='fixed the login crash' tf submit")]
    MissingNotes,

    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The external packaging command failed.
    #[error("packaging failed: {0}")]
    PackagingError(String),

    /// The endpoint rejected the upload.
    #[error("upload rejected: {0}")]
    UploadError(String),

    /// The upload could not be transported.
    #[error("upload failed: {0}")]
    TransportError(#[from] reqwest::Error),
}
