// config.rs — TestFlight settings for one build target.
//
// Pure state (tokens, lists) is separated from the two effectful
// transitions (SDK swap, launcher regeneration), which take the host
// explicitly instead of holding a back-reference to it.

use serde::Serialize;
use tf_build::{BuildHost, Linkage};

use crate::error::ConfigError;
use crate::launcher;

/// zlib is required by the TestFlight SDK's crash-report compression.
const LIBZ: &str = "/usr/lib/libz.dylib";

/// TestFlight settings for a build target.
///
/// One instance per target, owned by the host build context and threaded
/// into the submission task at run time.
#[derive(Debug, Default)]
pub struct TestFlightConfig {
    sdk: Option<String>,
    api_token: Option<String>,
    team_token: Option<String>,
    distribution_lists: Option<Vec<String>>,
}

impl TestFlightConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently configured SDK reference.
    pub fn sdk(&self) -> Option<&str> {
        self.sdk.as_deref()
    }

    pub fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }

    pub fn team_token(&self) -> Option<&str> {
        self.team_token.as_deref()
    }

    pub fn distribution_lists(&self) -> Option<&[String]> {
        self.distribution_lists.as_deref()
    }

    /// Point the build at a TestFlight SDK checkout.
    ///
    /// No-op when `sdk` equals the current value, so re-evaluated
    /// configuration blocks don't churn the vendor directory. Otherwise the
    /// previous SDK is deregistered, the new one is vendored with static
    /// linkage, and the zlib link library is registered (once, however many
    /// times the SDK changes).
    pub fn set_sdk(&mut self, host: &mut dyn BuildHost, sdk: impl Into<String>) {
        let sdk = sdk.into();
        if self.sdk.as_deref() == Some(sdk.as_str()) {
            return;
        }
        if let Some(previous) = self.sdk.take() {
            host.unvendor_dependency(&previous);
        }
        host.vendor_dependency(&sdk, Linkage::Static);
        host.add_link_library(LIBZ);
        self.sdk = Some(sdk);
    }

    /// Set the team token and regenerate the launcher source.
    ///
    /// The launcher is written only when its rendered content differs from
    /// what is on disk, and registered with the host's build-file list.
    pub fn set_team_token(
        &mut self,
        host: &mut dyn BuildHost,
        token: impl Into<String>,
    ) -> Result<(), ConfigError> {
        let token = token.into();
        self.team_token = Some(token.clone());
        if !token.is_empty() {
            launcher::sync(host, &token)?;
        }
        Ok(())
    }

    /// Set the API token. Plain store, no side effects.
    pub fn set_api_token(&mut self, token: impl Into<String>) {
        self.api_token = Some(token.into());
    }

    /// Set the distribution lists. Plain store, no side effects.
    pub fn set_distribution_lists(&mut self, lists: Vec<String>) {
        self.distribution_lists = Some(lists);
    }

    /// Snapshot of all four fields for diagnostics.
    pub fn describe(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            sdk: self.sdk.clone(),
            api_token: self.api_token.clone(),
            team_token: self.team_token.clone(),
            distribution_lists: self.distribution_lists.clone(),
        }
    }
}

/// Plain-data view of a [`TestFlightConfig`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigSnapshot {
    pub sdk: Option<String>,
    pub api_token: Option<String>,
    pub team_token: Option<String>,
    pub distribution_lists: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;
    use tf_build::ProjectModel;

    /// Host double that records every mutation call in order.
    struct RecordingHost {
        root: PathBuf,
        events: Vec<String>,
        libs: Vec<String>,
    }

    impl RecordingHost {
        fn new(root: impl Into<PathBuf>) -> Self {
            Self {
                root: root.into(),
                events: Vec::new(),
                libs: Vec::new(),
            }
        }
    }

    impl BuildHost for RecordingHost {
        fn project_root(&self) -> &Path {
            &self.root
        }

        fn vendor_dependency(&mut self, reference: &str, _linkage: Linkage) {
            self.events.push(format!("vendor {reference}"));
        }

        fn unvendor_dependency(&mut self, reference: &str) {
            self.events.push(format!("unvendor {reference}"));
        }

        fn add_link_library(&mut self, lib: &str) {
            if !self.libs.iter().any(|l| l == lib) {
                self.libs.push(lib.to_string());
            }
            self.events.push(format!("lib {lib}"));
        }

        fn register_build_file(&mut self, path: &Path) {
            self.events.push(format!("file {}", path.display()));
        }
    }

    #[test]
    fn set_sdk_vendors_statically_and_links_zlib() {
        let dir = tempdir().unwrap();
        let mut host = ProjectModel::new(dir.path());
        let mut config = TestFlightConfig::new();

        config.set_sdk(&mut host, "vendor/TestFlight");

        assert_eq!(
            host.vendored(),
            [("vendor/TestFlight".to_string(), Linkage::Static)]
        );
        assert_eq!(host.link_libraries(), [LIBZ]);
        assert_eq!(config.sdk(), Some("vendor/TestFlight"));
    }

    #[test]
    fn redundant_set_sdk_is_a_no_op() {
        let dir = tempdir().unwrap();
        let mut host = RecordingHost::new(dir.path());
        let mut config = TestFlightConfig::new();

        config.set_sdk(&mut host, "vendor/TestFlight");
        let events_after_first = host.events.len();
        config.set_sdk(&mut host, "vendor/TestFlight");

        assert_eq!(host.events.len(), events_after_first);
    }

    #[test]
    fn changing_sdk_unvendors_previous_before_vendoring_next() {
        let dir = tempdir().unwrap();
        let mut host = RecordingHost::new(dir.path());
        let mut config = TestFlightConfig::new();

        config.set_sdk(&mut host, "vendor/sdk-1.0");
        config.set_sdk(&mut host, "vendor/sdk-1.1");

        let vendor_events: Vec<&str> = host
            .events
            .iter()
            .filter(|e| e.contains("vendor"))
            .map(String::as_str)
            .collect();
        assert_eq!(
            vendor_events,
            [
                "vendor vendor/sdk-1.0",
                "unvendor vendor/sdk-1.0",
                "vendor vendor/sdk-1.1",
            ]
        );
    }

    #[test]
    fn zlib_registered_once_across_sdk_changes() {
        let dir = tempdir().unwrap();
        let mut host = RecordingHost::new(dir.path());
        let mut config = TestFlightConfig::new();

        config.set_sdk(&mut host, "vendor/sdk-1.0");
        config.set_sdk(&mut host, "vendor/sdk-1.1");
        config.set_sdk(&mut host, "vendor/sdk-1.2");

        assert_eq!(host.libs, [LIBZ]);
    }

    #[test]
    fn plain_setters_have_no_side_effects() {
        let mut config = TestFlightConfig::new();

        config.set_api_token("api-token");
        config.set_distribution_lists(vec!["internal".to_string()]);

        assert_eq!(config.api_token(), Some("api-token"));
        assert_eq!(
            config.distribution_lists(),
            Some(&["internal".to_string()][..])
        );
    }

    #[test]
    fn describe_snapshots_all_fields() {
        let dir = tempdir().unwrap();
        let mut host = ProjectModel::new(dir.path());
        let mut config = TestFlightConfig::new();

        config.set_sdk(&mut host, "vendor/TestFlight");
        config.set_api_token("api");
        config.set_team_token(&mut host, "team").unwrap();
        config.set_distribution_lists(vec!["qa".to_string(), "beta".to_string()]);

        assert_eq!(
            config.describe(),
            ConfigSnapshot {
                sdk: Some("vendor/TestFlight".to_string()),
                api_token: Some("api".to_string()),
                team_token: Some("team".to_string()),
                distribution_lists: Some(vec!["qa".to_string(), "beta".to_string()]),
            }
        );
    }

    #[test]
    fn empty_team_token_skips_launcher_generation() {
        let dir = tempdir().unwrap();
        let mut host = ProjectModel::new(dir.path());
        let mut config = TestFlightConfig::new();

        config.set_team_token(&mut host, "").unwrap();

        assert!(!dir.path().join(launcher::LAUNCHER_FILE).exists());
        assert!(host.build_files().is_empty());
        assert_eq!(config.team_token(), Some(""));
    }
}
