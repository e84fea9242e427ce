// launcher.rs — Generated launcher source that activates the SDK on start.
//
// The launcher is a deterministic function of the team token. It is written
// only when the on-disk content differs (a rewrite with identical content
// would still bump the mtime and defeat incremental builds), and registered
// with the host's build-file list, which deduplicates repeated paths.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tf_build::BuildHost;

use crate::error::ConfigError;

/// Fixed project-relative path of the generated launcher source.
pub const LAUNCHER_FILE: &str = "app/testflight_launcher.rb";

/// Render the launcher source for a team token.
///
/// The generated program: if the TestFlight class is compiled in and the
/// runtime is not the simulator, take off on the first "application did
/// become active" notification.
pub fn render(team_token: &str) -> String {
    format!(
        r#"# This file is automatically generated. Do not edit.

if Object.const_defined?('TestFlight') and !UIDevice.currentDevice.model.include?('Simulator')
  NSNotificationCenter.defaultCenter.addObserverForName(UIApplicationDidBecomeActiveNotification, object:nil, queue:nil, usingBlock:lambda do |notification|
  TestFlight.takeOff('{team_token}')
  end)
end
"#
    )
}

/// Bring the on-disk launcher in line with the token and register it.
///
/// Returns `true` when the file was (re)written, `false` when the existing
/// content already matched.
pub fn sync(host: &mut dyn BuildHost, team_token: &str) -> Result<bool, ConfigError> {
    let code = render(team_token);
    let path = host.project_root().join(LAUNCHER_FILE);

    let stale = match fs::read_to_string(&path) {
        Ok(existing) => existing != code,
        Err(err) if err.kind() == ErrorKind::NotFound => true,
        Err(source) => return Err(ConfigError::IoError { path, source }),
    };

    if stale {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::IoError {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, &code).map_err(|source| ConfigError::IoError {
            path: path.clone(),
            source,
        })?;
        tracing::info!("generated {}", path.display());
    }

    host.register_build_file(Path::new(LAUNCHER_FILE));
    Ok(stale)
}
