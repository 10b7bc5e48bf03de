//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stackgen-adapters` crate provides implementations. Both ports
//! return `ApplicationError` directly: the materializer attributes the
//! failure to the step that was running, and adapters already know which
//! operation failed.

use crate::application::ApplicationError;
use crate::domain::{TemplatePayload, TemplateSelector};
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stackgen_adapters::filesystem::LocalFilesystem` (production)
/// - `stackgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Callers pass full target paths; adapters never resolve against a root
/// - Permissions are capability-based, not Unix-specific
/// - Async-ready (can be extended with async-trait later)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> Result<(), ApplicationError>;

    /// Write content to a file, replacing any previous content.
    ///
    /// The parent directory must already exist.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), ApplicationError>;

    /// Set file permissions (a no-op where the platform has no such bit).
    fn set_permissions(&self, path: &Path, executable: bool) -> Result<(), ApplicationError>;
}

/// Port for resolving a template selector to an application payload.
///
/// Implemented by:
/// - `stackgen_adapters::registry::PresetRegistry` (compiled-in presets,
///   plus the external-file fallback)
///
/// ## Contract
///
/// - Preset selectors resolve without touching the filesystem
/// - `ExternalFile` reads exactly the given path, once
/// - Payloads come back verbatim; no validation, no substitution
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRegistry: Send + Sync {
    /// Resolve `selector` to its payload.
    fn resolve(&self, selector: &TemplateSelector) -> Result<TemplatePayload, ApplicationError>;
}
