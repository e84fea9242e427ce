//! Core BuildHost trait and linkage mode

use std::path::Path;

/// How a vendored dependency is linked into the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linkage {
    /// Compiled into the binary at link time.
    Static,
    /// Resolved by the loader at runtime.
    Dynamic,
}

/// The build-system hooks the extension registers its inputs through.
///
/// All registration methods are idempotent: repeating a call with the same
/// argument leaves the host state unchanged. Callers rely on that to stay
/// re-runnable — a configuration block may be evaluated on every build.
pub trait BuildHost {
    /// Root directory of the project being built. Fixed relative artifact
    /// paths (generated sources) are resolved against this.
    fn project_root(&self) -> &Path;

    /// Register a third-party dependency as a vendored build input.
    fn vendor_dependency(&mut self, reference: &str, linkage: Linkage);

    /// Deregister a previously vendored dependency. Unknown references are
    /// ignored.
    fn unvendor_dependency(&mut self, reference: &str);

    /// Add a library to the link line unless it is already present.
    fn add_link_library(&mut self, lib: &str);

    /// Add a source file to the compiled-file list unless an existing entry
    /// resolves to the same absolute path. Relative paths are resolved
    /// against [`project_root`](Self::project_root).
    fn register_build_file(&mut self, path: &Path);
}
