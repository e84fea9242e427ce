// archive.rs — Debug-symbol bundle packaging with a freshness check.
//
// The .dSYM bundle sits next to the .app bundle and must be uploaded as a
// zip. Zipping a large symbol directory on every invocation would be wasted
// work, so the archive is rebuilt only when missing or older than the
// bundle. The zip runs with the bundle's parent as working directory so the
// archive holds relative entries only.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::SubmitError;

/// Derive the debug-symbol bundle path from the built app bundle
/// (`Foo.app` → `Foo.dSYM`).
pub fn dsym_bundle(app_bundle: &Path) -> PathBuf {
    app_bundle.with_extension("dSYM")
}

/// Derive the archive path from the bundle path (`Foo.dSYM` → `Foo.dSYM.zip`).
pub fn zip_archive(bundle: &Path) -> PathBuf {
    let mut name = bundle.as_os_str().to_os_string();
    name.push(".zip");
    PathBuf::from(name)
}

/// Whether the archive must be rebuilt: it is missing, or the bundle has
/// been modified since the archive was written.
pub fn needs_repack(bundle: &Path, archive: &Path) -> Result<bool, SubmitError> {
    if !archive.exists() {
        return Ok(true);
    }
    let bundle_mtime = modified(bundle)?;
    let archive_mtime = modified(archive)?;
    Ok(bundle_mtime > archive_mtime)
}

/// Make sure a fresh zip of the bundle exists, rebuilding it if stale.
/// Returns the archive path.
pub fn ensure_archive(bundle: &Path) -> Result<PathBuf, SubmitError> {
    let archive = zip_archive(bundle);
    if needs_repack(bundle, &archive)? {
        repack(bundle)?;
    } else {
        tracing::debug!("{} is up to date", archive.display());
    }
    Ok(archive)
}

/// Zip the bundle directory into `<bundle>.zip`, replacing any previous
/// archive. Runs `zip -q -r` from the bundle's parent directory; zip writes
/// to a temp file and renames on success, so a failed run never leaves a
/// half-written archive that the next freshness check would accept.
fn repack(bundle: &Path) -> Result<(), SubmitError> {
    let parent = bundle
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let name = bundle.file_name().ok_or_else(|| {
        SubmitError::PackagingError(format!("'{}' has no bundle name", bundle.display()))
    })?;

    let previous = zip_archive(bundle);
    if previous.exists() {
        fs::remove_file(&previous).map_err(|source| SubmitError::IoError {
            path: previous.clone(),
            source,
        })?;
    }
    let mut archive_name = name.to_os_string();
    archive_name.push(".zip");

    tracing::info!(
        "running: zip -q -r \"{}\" \"{}\" (in {})",
        archive_name.to_string_lossy(),
        name.to_string_lossy(),
        parent.display()
    );

    let output = Command::new("zip")
        .arg("-q")
        .arg("-r")
        .arg(&archive_name)
        .arg(name)
        .current_dir(parent)
        .output()
        .map_err(|source| SubmitError::IoError {
            path: bundle.to_path_buf(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SubmitError::PackagingError(format!(
            "zip exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    Ok(())
}

fn modified(path: &Path) -> Result<std::time::SystemTime, SubmitError> {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|source| SubmitError::IoError {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::{Duration, SystemTime};
    use tempfile::tempdir;

    fn set_mtime(path: &Path, time: SystemTime) {
        File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(time)
            .unwrap();
    }

    #[test]
    fn dsym_path_derived_from_app_bundle() {
        assert_eq!(
            dsym_bundle(Path::new("/build/Release/Timer.app")),
            Path::new("/build/Release/Timer.dSYM")
        );
    }

    #[test]
    fn archive_path_appends_zip() {
        assert_eq!(
            zip_archive(Path::new("/build/Release/Timer.dSYM")),
            Path::new("/build/Release/Timer.dSYM.zip")
        );
    }

    #[test]
    fn missing_archive_needs_repack() {
        let dir = tempdir().unwrap();
        let bundle = dir.path().join("Timer.dSYM");
        fs::create_dir(&bundle).unwrap();

        assert!(needs_repack(&bundle, &zip_archive(&bundle)).unwrap());
    }

    #[test]
    fn stale_archive_needs_repack() {
        let dir = tempdir().unwrap();
        let bundle = dir.path().join("Timer.dSYM");
        fs::create_dir(&bundle).unwrap();
        let archive = zip_archive(&bundle);
        fs::write(&archive, b"old archive").unwrap();
        set_mtime(&archive, SystemTime::UNIX_EPOCH);

        assert!(needs_repack(&bundle, &archive).unwrap());
    }

    #[test]
    fn fresh_archive_skips_repack() {
        let dir = tempdir().unwrap();
        let bundle = dir.path().join("Timer.dSYM");
        fs::create_dir(&bundle).unwrap();
        let archive = zip_archive(&bundle);
        fs::write(&archive, b"archive").unwrap();
        set_mtime(&archive, SystemTime::now() + Duration::from_secs(600));

        assert!(!needs_repack(&bundle, &archive).unwrap());
    }

    #[test]
    fn ensure_archive_leaves_fresh_archive_untouched() {
        let dir = tempdir().unwrap();
        let bundle = dir.path().join("Timer.dSYM");
        fs::create_dir(&bundle).unwrap();
        let archive = zip_archive(&bundle);
        fs::write(&archive, b"MARKER").unwrap();
        set_mtime(&archive, SystemTime::now() + Duration::from_secs(600));

        let returned = ensure_archive(&bundle).unwrap();

        assert_eq!(returned, archive);
        assert_eq!(fs::read(&archive).unwrap(), b"MARKER");
    }

    #[test]
    fn missing_bundle_surfaces_io_error() {
        let dir = tempdir().unwrap();
        let bundle = dir.path().join("Gone.dSYM");
        let archive = zip_archive(&bundle);
        fs::write(&archive, b"archive").unwrap();

        let err = needs_repack(&bundle, &archive).unwrap_err();
        assert!(matches!(err, SubmitError::IoError { .. }));
        assert!(err.to_string().contains("Gone.dSYM"));
    }
}
