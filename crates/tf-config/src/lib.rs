//! # tf-config
//!
//! TestFlight settings for a build target, and the side effects that keep
//! the host build consistent with them.
//!
//! [`TestFlightConfig`] holds four pieces of pure state (SDK reference, API
//! token, team token, distribution lists). The two effectful transitions are
//! explicit setter methods that take the host:
//!
//! - [`TestFlightConfig::set_sdk`] — swaps the vendored SDK and ensures the
//!   zlib link library is registered once.
//! - [`TestFlightConfig::set_team_token`] — regenerates the launcher source
//!   file that activates the SDK at application start.
//!
//! [`TestFlightManifest`] loads the same settings from `.tf/testflight.toml`
//! and replays them through the setters so the side effects fire.

pub mod config;
pub mod error;
pub mod launcher;
pub mod manifest;

pub use config::{ConfigSnapshot, TestFlightConfig};
pub use error::ConfigError;
pub use manifest::TestFlightManifest;
