// project.rs — In-memory project model implementing the BuildHost contract.
//
// Stands in for the host build system's own project object: the extension
// registers vendored dependencies, link libraries, and generated files here,
// and the build (or a test) reads the lists back out.

use std::path::{Component, Path, PathBuf};

use crate::host::{BuildHost, Linkage};

/// In-memory registration state for one build target.
pub struct ProjectModel {
    root: PathBuf,
    vendored: Vec<(String, Linkage)>,
    libs: Vec<String>,
    files: Vec<PathBuf>,
}

impl ProjectModel {
    /// Create a model rooted at the given project directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            vendored: Vec::new(),
            libs: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Vendored dependencies in registration order.
    pub fn vendored(&self) -> &[(String, Linkage)] {
        &self.vendored
    }

    /// Link libraries in registration order.
    pub fn link_libraries(&self) -> &[String] {
        &self.libs
    }

    /// Registered build files, as passed in (not normalized).
    pub fn build_files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Resolve a path to its normalized absolute form for deduplication.
    ///
    /// Lexical only — `canonicalize` would fail for files that are about to
    /// be generated but do not exist yet.
    fn absolutize(&self, path: &Path) -> PathBuf {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };
        normalize(&joined)
    }
}

impl BuildHost for ProjectModel {
    fn project_root(&self) -> &Path {
        &self.root
    }

    fn vendor_dependency(&mut self, reference: &str, linkage: Linkage) {
        if !self.vendored.iter().any(|(r, _)| r == reference) {
            self.vendored.push((reference.to_string(), linkage));
        }
    }

    fn unvendor_dependency(&mut self, reference: &str) {
        self.vendored.retain(|(r, _)| r != reference);
    }

    fn add_link_library(&mut self, lib: &str) {
        if !self.libs.iter().any(|l| l == lib) {
            self.libs.push(lib.to_string());
        }
    }

    fn register_build_file(&mut self, path: &Path) {
        let abs = self.absolutize(path);
        if !self.files.iter().any(|f| self.absolutize(f) == abs) {
            self.files.push(path.to_path_buf());
        }
    }
}

/// Resolve `.` and `..` components lexically.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component.as_os_str());
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
