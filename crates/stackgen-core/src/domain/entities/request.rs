//! Generation request: the validated parameter set for one stack.
//!
//! The builder is the parameter resolver. It owns every fallible check on
//! raw inputs (emptiness, port ranges, selector syntax), so a constructed
//! [`GenerationRequest`] is valid by definition and the materializer never
//! re-validates.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Built-in defaults, applied when an invocation does not override them.
pub mod defaults {
    pub const DB_PORT: u16 = 27017;
    pub const HTTP_PORT: u16 = 8080;
    pub const ADMIN_UI_PORT: u16 = 8081;
    pub const DB_USER: &str = "admin";
    pub const DB_PASS: &str = "p455w0rd";
    pub const API_KEY: &str = "sample-abcdef";
}

/// Application payloads compiled into the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetKind {
    /// Single-resource storage app: accounts, scopes, and per-scope maps.
    Simple,
    /// Multi-resource variant adding per-account characters.
    Multi,
}

impl PresetKind {
    pub const ALL: [PresetKind; 2] = [PresetKind::Simple, PresetKind::Multi];

    pub const fn as_str(self) -> &'static str {
        match self {
            PresetKind::Simple => "simple",
            PresetKind::Multi => "multi",
        }
    }

    /// The selector string that names this preset on the command line.
    pub const fn selector(self) -> &'static str {
        match self {
            PresetKind::Simple => "preset:simple",
            PresetKind::Multi => "preset:multi",
        }
    }

    pub const fn describe(self) -> &'static str {
        match self {
            PresetKind::Simple => "Single-resource HTTP storage app (accounts, scopes, maps)",
            PresetKind::Multi => "Multi-resource HTTP storage app with per-account characters",
        }
    }
}

impl fmt::Display for PresetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the application source payload comes from.
///
/// Parsed exactly once from the raw selector string. Downstream code
/// matches on the variants; nothing re-inspects the original string, so a
/// file that happens to be named `preset:simple` can never shadow the
/// built-in preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSelector {
    /// A compiled-in payload. Resolving it never touches the filesystem.
    Preset(PresetKind),
    /// A file read verbatim at generation time.
    ExternalFile(PathBuf),
}

impl TemplateSelector {
    /// Parse a raw selector string.
    ///
    /// `preset:simple` and `preset:multi` name the built-in payloads; any
    /// other non-empty string is a path to a template file.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        match raw {
            "" => Err(DomainError::MissingRequiredField { field: "template" }),
            "preset:simple" => Ok(Self::Preset(PresetKind::Simple)),
            "preset:multi" => Ok(Self::Preset(PresetKind::Multi)),
            path => Ok(Self::ExternalFile(PathBuf::from(path))),
        }
    }
}

impl fmt::Display for TemplateSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(kind) => f.write_str(kind.selector()),
            Self::ExternalFile(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Everything the materializer needs to produce one project stack.
///
/// Immutable once built. Port fields are `u16` because construction already
/// proved they fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    target_dir: PathBuf,
    selector: TemplateSelector,
    db_port: u16,
    http_port: u16,
    admin_ui_port: u16,
    db_user: String,
    db_pass: String,
    api_key: String,
}

impl GenerationRequest {
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::new()
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn selector(&self) -> &TemplateSelector {
        &self.selector
    }

    pub fn db_port(&self) -> u16 {
        self.db_port
    }

    pub fn http_port(&self) -> u16 {
        self.http_port
    }

    pub fn admin_ui_port(&self) -> u16 {
        self.admin_ui_port
    }

    pub fn db_user(&self) -> &str {
        &self.db_user
    }

    pub fn db_pass(&self) -> &str {
        &self.db_pass
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

/// Builder for [`GenerationRequest`].
///
/// Starts from the built-in defaults; only the target directory and the
/// template selector have no default. Ports are accepted as `u32` so the
/// range check lives here rather than in every caller's argument parsing.
#[derive(Debug, Clone)]
pub struct GenerationRequestBuilder {
    target_dir: PathBuf,
    template: String,
    db_port: u32,
    http_port: u32,
    admin_ui_port: u32,
    db_user: String,
    db_pass: String,
    api_key: String,
}

impl GenerationRequestBuilder {
    fn new() -> Self {
        Self {
            target_dir: PathBuf::new(),
            template: String::new(),
            db_port: defaults::DB_PORT as u32,
            http_port: defaults::HTTP_PORT as u32,
            admin_ui_port: defaults::ADMIN_UI_PORT as u32,
            db_user: defaults::DB_USER.to_string(),
            db_pass: defaults::DB_PASS.to_string(),
            api_key: defaults::API_KEY.to_string(),
        }
    }

    pub fn target_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.target_dir = path.into();
        self
    }

    pub fn template(mut self, selector: impl Into<String>) -> Self {
        self.template = selector.into();
        self
    }

    pub fn db_port(mut self, port: u32) -> Self {
        self.db_port = port;
        self
    }

    pub fn http_port(mut self, port: u32) -> Self {
        self.http_port = port;
        self
    }

    pub fn admin_ui_port(mut self, port: u32) -> Self {
        self.admin_ui_port = port;
        self
    }

    pub fn db_user(mut self, user: impl Into<String>) -> Self {
        self.db_user = user.into();
        self
    }

    pub fn db_pass(mut self, pass: impl Into<String>) -> Self {
        self.db_pass = pass.into();
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Validate and build.
    ///
    /// Checks run in a fixed order and the first violation wins: target
    /// directory, template selector, then database, HTTP, and admin-UI
    /// ports. Credentials and the API key are opaque here; emptiness rules
    /// for them belong to the invoking layer.
    pub fn build(self) -> Result<GenerationRequest, DomainError> {
        if self.target_dir.as_os_str().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "project path",
            });
        }
        let selector = TemplateSelector::parse(&self.template)?;
        let db_port = check_port("database port", self.db_port)?;
        let http_port = check_port("HTTP port", self.http_port)?;
        let admin_ui_port = check_port("admin UI port", self.admin_ui_port)?;

        Ok(GenerationRequest {
            target_dir: self.target_dir,
            selector,
            db_port,
            http_port,
            admin_ui_port,
            db_user: self.db_user,
            db_pass: self.db_pass,
            api_key: self.api_key,
        })
    }
}

impl Default for GenerationRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn check_port(field: &'static str, value: u32) -> Result<u16, DomainError> {
    u16::try_from(value).map_err(|_| DomainError::InvalidPort { field, value })
}
