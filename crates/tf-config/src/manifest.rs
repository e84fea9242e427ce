// manifest.rs — On-disk settings, replayed through the config setters.
//
// The host build evaluates its configuration on every run, so `apply` goes
// through the same setters user code would call — the vendor swap and
// launcher generation fire exactly as if the fields were set by hand.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tf_build::BuildHost;

use crate::config::TestFlightConfig;
use crate::error::ConfigError;

/// Project-relative location of the manifest.
pub const MANIFEST_FILE: &str = ".tf/testflight.toml";

/// TestFlight settings as stored in `.tf/testflight.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestFlightManifest {
    /// Path to the TestFlight SDK checkout to vendor.
    #[serde(default)]
    pub sdk: Option<String>,

    /// Account API token.
    #[serde(default)]
    pub api_token: Option<String>,

    /// Team token; also drives launcher generation.
    #[serde(default)]
    pub team_token: Option<String>,

    /// Distribution lists to notify, in order.
    #[serde(default)]
    pub distribution_lists: Option<Vec<String>>,
}

impl TestFlightManifest {
    /// Load the manifest from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Try to load the manifest, returning defaults if the file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Replay the manifest through the config setters, firing side effects.
    pub fn apply(
        &self,
        config: &mut TestFlightConfig,
        host: &mut dyn BuildHost,
    ) -> Result<(), ConfigError> {
        if let Some(sdk) = &self.sdk {
            config.set_sdk(host, sdk.clone());
        }
        if let Some(token) = &self.api_token {
            config.set_api_token(token.clone());
        }
        if let Some(token) = &self.team_token {
            config.set_team_token(host, token.clone())?;
        }
        if let Some(lists) = &self.distribution_lists {
            config.set_distribution_lists(lists.clone());
        }
        Ok(())
    }
}
