// upload.rs — Multipart form submission to the builds endpoint.
//
// Construction is a pure function of the finalized inputs; execution is the
// only part that touches the network. Field names are a wire contract with
// the service and must not change.

use std::path::{Path, PathBuf};

use crate::error::SubmitError;

/// Fixed submission endpoint.
pub const BUILDS_ENDPOINT: &str = "http://testflightapp.com/api/builds.json";

/// The service expects the literal string "True", not a boolean.
const NOTIFY: &str = "True";

/// One part of the multipart form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormField {
    Text { name: &'static str, value: String },
    File { name: &'static str, path: PathBuf },
}

/// A fully constructed upload, ready to execute once.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    endpoint: String,
    fields: Vec<FormField>,
}

impl UploadRequest {
    /// Assemble the form for one submission.
    ///
    /// `distribution_lists` is joined with commas; an absent or empty list
    /// omits the field entirely.
    pub fn build(
        build_archive: &Path,
        dsym_archive: &Path,
        api_token: &str,
        team_token: &str,
        notes: &str,
        distribution_lists: Option<&[String]>,
    ) -> Self {
        let mut fields = vec![
            FormField::File {
                name: "file",
                path: build_archive.to_path_buf(),
            },
            FormField::File {
                name: "dsym",
                path: dsym_archive.to_path_buf(),
            },
            FormField::Text {
                name: "api_token",
                value: api_token.to_string(),
            },
            FormField::Text {
                name: "team_token",
                value: team_token.to_string(),
            },
            FormField::Text {
                name: "notes",
                value: notes.to_string(),
            },
            FormField::Text {
                name: "notify",
                value: NOTIFY.to_string(),
            },
        ];
        if let Some(lists) = distribution_lists.filter(|l| !l.is_empty()) {
            fields.push(FormField::Text {
                name: "distribution_lists",
                value: lists.join(","),
            });
        }

        Self {
            endpoint: BUILDS_ENDPOINT.to_string(),
            fields,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Post the form and fail on any non-success status. Single attempt,
    /// no retry; the call blocks until the transfer completes.
    pub fn execute(&self) -> Result<(), SubmitError> {
        tracing::info!("uploading to {}: {}", self.endpoint, self.summary());

        let mut form = reqwest::blocking::multipart::Form::new();
        for field in &self.fields {
            form = match field {
                FormField::Text { name, value } => form.text(*name, value.clone()),
                FormField::File { name, path } => {
                    form.file(*name, path).map_err(|source| SubmitError::IoError {
                        path: path.clone(),
                        source,
                    })?
                }
            };
        }

        let client = reqwest::blocking::Client::builder().build()?;
        let response = client.post(&self.endpoint).multipart(form).send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SubmitError::UploadError(format!(
                "{} returned {}: {}",
                self.endpoint,
                status,
                body.trim()
            )));
        }

        Ok(())
    }

    /// Audit line for the request: field names and file paths, never token
    /// values.
    fn summary(&self) -> String {
        self.fields
            .iter()
            .map(|field| match field {
                FormField::Text { name, .. } => format!("-F {name}"),
                FormField::File { name, path } => format!("-F {name}=@{}", path.display()),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
