//! Application template registry.
//!
//! Resolves a [`TemplateSelector`] to the payload that becomes
//! `server/main.go`:
//!
//! - **Presets** are compiled into the binary with `include_str!`.
//!   Resolving one performs no I/O, so `preset:simple` works even when a
//!   file of that name exists in the working directory.
//! - **External files** are read verbatim from the given path, once, at
//!   resolution time. Payloads are opaque: whatever the file contains is
//!   what lands in the generated project.

use std::path::Path;

use tracing::{debug, instrument};

use stackgen_core::application::ApplicationError;
use stackgen_core::application::ports::TemplateRegistry;
use stackgen_core::domain::{PresetKind, TemplatePayload, TemplateSelector};

// ── Embedded payloads ─────────────────────────────────────────────────────────

const SIMPLE_PAYLOAD: &str = include_str!("payloads/simple.go");
const MULTI_PAYLOAD: &str = include_str!("payloads/multi.go");

/// Registry backed by the compiled-in presets, with an external-file
/// fallback for custom payloads.
#[derive(Debug, Clone, Copy)]
pub struct PresetRegistry;

impl PresetRegistry {
    /// Create a new preset registry.
    pub fn new() -> Self {
        Self
    }

    /// The payload text of a built-in preset.
    pub fn preset_payload(kind: PresetKind) -> &'static str {
        match kind {
            PresetKind::Simple => SIMPLE_PAYLOAD,
            PresetKind::Multi => MULTI_PAYLOAD,
        }
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    fn read_external(&self, path: &Path) -> Result<TemplatePayload, ApplicationError> {
        debug!("Reading external template payload");
        std::fs::read_to_string(path)
            .map(TemplatePayload::from_owned)
            .map_err(|e| ApplicationError::TemplateNotFound {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRegistry for PresetRegistry {
    fn resolve(&self, selector: &TemplateSelector) -> Result<TemplatePayload, ApplicationError> {
        match selector {
            TemplateSelector::Preset(kind) => {
                debug!(preset = %kind, "Resolved built-in template payload");
                Ok(TemplatePayload::from_static(Self::preset_payload(*kind)))
            }
            TemplateSelector::ExternalFile(path) => self.read_external(path),
        }
    }
}
