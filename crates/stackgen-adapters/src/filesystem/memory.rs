//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use stackgen_core::application::{ports::Filesystem, ApplicationError};

/// In-memory filesystem for testing.
///
/// Behaves like a strict filesystem: writing a file demands that its parent
/// directory already exists. Failures can be injected to drive abort paths
/// in service tests. Clones share state.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    executables: HashSet<PathBuf>,
    fail_dir_creation: bool,
    fail_write_fragments: Vec<String>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Check if a file is marked executable.
    pub fn is_executable(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.executables.contains(path)
    }

    /// Check if a file or directory exists.
    pub fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Clear all contents and injected failures.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
        inner.executables.clear();
        inner.fail_dir_creation = false;
        inner.fail_write_fragments.clear();
    }

    /// Make every subsequent `create_dir_all` call fail.
    pub fn fail_dir_creation(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.fail_dir_creation = true;
    }

    /// Make writes fail for any path whose string form contains `fragment`.
    pub fn fail_writes_matching(&self, fragment: impl Into<String>) {
        let mut inner = self.inner.write().unwrap();
        inner.fail_write_fragments.push(fragment.into());
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> Result<(), ApplicationError> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::LockPoisoned)?;

        if inner.fail_dir_creation {
            return Err(ApplicationError::DirectoryCreationFailed {
                path: path.to_path_buf(),
                reason: "injected directory failure".into(),
            });
        }

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), ApplicationError> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::LockPoisoned)?;

        let display = path.display().to_string();
        if inner
            .fail_write_fragments
            .iter()
            .any(|fragment| display.contains(fragment))
        {
            return Err(ApplicationError::FileWriteFailed {
                path: path.to_path_buf(),
                reason: "injected write failure".into(),
            });
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FileWriteFailed {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                });
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> Result<(), ApplicationError> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::LockPoisoned)?;

        if executable {
            inner.executables.insert(path.to_path_buf());
        } else {
            inner.executables.remove(path);
        }

        Ok(())
    }
}
