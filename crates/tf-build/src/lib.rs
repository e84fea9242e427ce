//! # tf-build
//!
//! Contract between the TestFlight extension and the host build system.
//!
//! The extension never drives the build itself — it registers inputs with
//! whatever owns the build graph. That seam is the [`BuildHost`] trait:
//! vendored-dependency swaps, link-library additions, and generated-file
//! registration, all idempotent under repeated identical calls.
//!
//! [`ProjectModel`] is the in-process realization used by the CLI and by
//! tests: plain registration lists the host build consumes after the
//! extension has run.

pub mod host;
pub mod project;

pub use host::{BuildHost, Linkage};
pub use project::ProjectModel;
