//! Local filesystem adapter using std::fs.

use std::path::Path;

use stackgen_core::application::{ports::Filesystem, ApplicationError};

/// Production filesystem implementation using `std::fs`.
///
/// Errors carry the failing path and are already shaped as the
/// operation-specific `ApplicationError` variant, so the service layer can
/// attribute them to a materialization step without inspecting causes.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> Result<(), ApplicationError> {
        std::fs::create_dir_all(path).map_err(|e| ApplicationError::DirectoryCreationFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), ApplicationError> {
        std::fs::write(path, content).map_err(|e| ApplicationError::FileWriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> Result<(), ApplicationError> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if executable {
                let metadata =
                    std::fs::metadata(path).map_err(|e| ApplicationError::FileWriteFailed {
                        path: path.to_path_buf(),
                        reason: format!("Failed to read metadata: {}", e),
                    })?;
                let mut perms = metadata.permissions();
                let mode = perms.mode();
                perms.set_mode(mode | 0o111);
                std::fs::set_permissions(path, perms).map_err(|e| {
                    ApplicationError::FileWriteFailed {
                        path: path.to_path_buf(),
                        reason: format!("Failed to set permissions: {}", e),
                    }
                })?;
            }
        }
        #[cfg(windows)]
        {
            // Windows doesn't have executable bit in the same way
            let _ = executable; // Silence unused warning
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let nested = tmp.path().join("a/b/c");

        fs.create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn writes_and_overwrites_files() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("out.txt");

        fs.write_file(&file, "first").unwrap();
        fs.write_file(&file, "second").unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "second");
    }

    #[test]
    fn write_into_missing_directory_reports_the_path() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("nope/out.txt");

        let err = fs.write_file(&file, "content").unwrap_err();
        match err {
            ApplicationError::FileWriteFailed { path, .. } => assert_eq!(path, file),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn marks_files_executable() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let script = tmp.path().join("run.sh");

        fs.write_file(&script, "#!/bin/bash\n").unwrap();
        fs.set_permissions(&script, true).unwrap();

        let mode = std::fs::metadata(&script).unwrap().permissions().mode();
        assert_ne!(mode & 0o111, 0, "executable bits should be set");
    }
}
