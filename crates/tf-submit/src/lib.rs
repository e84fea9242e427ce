//! # tf-submit
//!
//! One-shot submission of an archived build to TestFlight.
//!
//! [`SubmitTask`] reads a finalized [`tf_config::TestFlightConfig`],
//! validates it, makes sure a fresh zip of the `.dSYM` bundle exists
//! (repackaging only when the bundle is newer than the archive), and posts a
//! multipart upload to the builds endpoint. Each step is a hard precondition
//! for the next; the first failure aborts the task.

pub mod archive;
pub mod error;
pub mod task;
pub mod upload;

pub use error::SubmitError;
pub use task::SubmitTask;
pub use upload::{FormField, UploadRequest, BUILDS_ENDPOINT};
