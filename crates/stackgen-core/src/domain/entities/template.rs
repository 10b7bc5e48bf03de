//! Template text, substitution slots, and the rendering table.
//!
//! The fixed artifact templates carry named `{{SLOT}}` placeholders. Each
//! slot maps to exactly one field of the [`GenerationRequest`], which makes
//! the template/request contract explicit instead of positional:
//!
//! | Slot            | Filled from        |
//! |-----------------|--------------------|
//! | `ADMIN_UI_PORT` | admin-UI host port |
//! | `DB_PORT`       | database host port |
//! | `HTTP_PORT`     | HTTP host port     |
//! | `DB_USER`       | credential user    |
//! | `DB_PASS`       | credential pass    |
//! | `API_KEY`       | server API key     |
//!
//! Application payloads never pass through rendering; they are opaque.

use std::collections::HashMap;
use std::fmt;

use super::request::GenerationRequest;

/// A named substitution slot in one of the fixed artifact templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    AdminUiPort,
    DbPort,
    HttpPort,
    DbUser,
    DbPass,
    ApiKey,
}

impl Slot {
    pub const ALL: [Slot; 6] = [
        Slot::AdminUiPort,
        Slot::DbPort,
        Slot::HttpPort,
        Slot::DbUser,
        Slot::DbPass,
        Slot::ApiKey,
    ];

    /// The name as it appears between braces in template bodies.
    pub const fn name(self) -> &'static str {
        match self {
            Slot::AdminUiPort => "ADMIN_UI_PORT",
            Slot::DbPort => "DB_PORT",
            Slot::HttpPort => "HTTP_PORT",
            Slot::DbUser => "DB_USER",
            Slot::DbPass => "DB_PASS",
            Slot::ApiKey => "API_KEY",
        }
    }

    /// The request field this slot is filled from.
    pub fn value(self, request: &GenerationRequest) -> String {
        match self {
            Slot::AdminUiPort => request.admin_ui_port().to_string(),
            Slot::DbPort => request.db_port().to_string(),
            Slot::HttpPort => request.http_port().to_string(),
            Slot::DbUser => request.db_user().to_string(),
            Slot::DbPass => request.db_pass().to_string(),
            Slot::ApiKey => request.api_key().to_string(),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Variable table used when rendering slotted templates.
///
/// Rendering replaces every `{{KEY}}` whose key is present in the table and
/// leaves unknown placeholders untouched. Linear scans are fine here: the
/// table has a handful of entries and templates are a few hundred bytes.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Build the table for one request, with every slot filled.
    pub fn for_request(request: &GenerationRequest) -> Self {
        let mut variables = HashMap::new();
        for slot in Slot::ALL {
            variables.insert(slot.name().to_string(), slot.value(request));
        }
        Self { variables }
    }

    /// Add or override a variable (builder style).
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Substitute all known variables into `template`.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

/// Where template text lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Compile-time string literal (e.g., `include_str!(...)`).
    Static(&'static str),
    /// Owned string loaded at runtime.
    Owned(String),
}

impl TemplateSource {
    pub fn as_str(&self) -> &str {
        match self {
            TemplateSource::Static(s) => s,
            TemplateSource::Owned(s) => s,
        }
    }
}

impl From<&'static str> for TemplateSource {
    fn from(s: &'static str) -> Self {
        TemplateSource::Static(s)
    }
}

impl From<String> for TemplateSource {
    fn from(s: String) -> Self {
        TemplateSource::Owned(s)
    }
}

/// An application-source payload as served by a template registry.
///
/// Opaque to the engine: never parsed, never substituted into, written out
/// exactly as resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePayload {
    source: TemplateSource,
}

impl TemplatePayload {
    pub const fn from_static(text: &'static str) -> Self {
        Self {
            source: TemplateSource::Static(text),
        }
    }

    pub fn from_owned(text: impl Into<String>) -> Self {
        Self {
            source: TemplateSource::Owned(text.into()),
        }
    }

    pub fn as_str(&self) -> &str {
        self.source.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}
