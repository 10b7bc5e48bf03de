//! The fixed artifact layout of a generated project stack.
//!
//! Every generated project contains the same six files. Their bodies live
//! in this crate as compile-time assets; only the application source comes
//! from outside (a template registry). The write order below is part of the
//! engine's contract with its callers.

use super::common::{Permissions, RelativePath};
use super::template::{Slot, TemplateSource};
use std::fmt;

/// Directory that holds the server-side artifacts, relative to the root.
pub const SERVER_DIR: &str = "server";

// Fixed artifact bodies.
const COMPOSE_TEMPLATE: &str = include_str!("../templates/docker-compose.yml");
const LAUNCHER_TEMPLATE: &str = include_str!("../templates/compose.sh");
const ENV_TEMPLATE: &str = include_str!("../templates/env");
const DOCKERFILE_TEMPLATE: &str = include_str!("../templates/Dockerfile");
const GO_MOD_TEMPLATE: &str = include_str!("../templates/go.mod");

/// The six files every generated stack contains, in write order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// `docker-compose.yml`: admin UI, database, and HTTP service wiring.
    ComposeDescriptor,
    /// `compose.sh`: executable wrapper that runs docker-compose from the
    /// project directory.
    LauncherScript,
    /// `.env`: credentials and API key shared by all three containers.
    EnvironmentFile,
    /// `server/Dockerfile`: two-stage build of the storage server.
    BuildDescriptor,
    /// `server/go.mod`: module manifest with the storage framework pinned.
    ModuleDescriptor,
    /// `server/main.go`: registry-resolved application payload.
    ApplicationSource,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 6] = [
        ArtifactKind::ComposeDescriptor,
        ArtifactKind::LauncherScript,
        ArtifactKind::EnvironmentFile,
        ArtifactKind::BuildDescriptor,
        ArtifactKind::ModuleDescriptor,
        ArtifactKind::ApplicationSource,
    ];

    /// Position in the write order, starting at 0.
    pub const fn index(self) -> u8 {
        match self {
            ArtifactKind::ComposeDescriptor => 0,
            ArtifactKind::LauncherScript => 1,
            ArtifactKind::EnvironmentFile => 2,
            ArtifactKind::BuildDescriptor => 3,
            ArtifactKind::ModuleDescriptor => 4,
            ArtifactKind::ApplicationSource => 5,
        }
    }

    /// Path of this artifact relative to the project root.
    pub const fn relative_path(self) -> &'static str {
        match self {
            ArtifactKind::ComposeDescriptor => "docker-compose.yml",
            ArtifactKind::LauncherScript => "compose.sh",
            ArtifactKind::EnvironmentFile => ".env",
            ArtifactKind::BuildDescriptor => "server/Dockerfile",
            ArtifactKind::ModuleDescriptor => "server/go.mod",
            ArtifactKind::ApplicationSource => "server/main.go",
        }
    }

    pub const fn describe(self) -> &'static str {
        match self {
            ArtifactKind::ComposeDescriptor => "compose descriptor",
            ArtifactKind::LauncherScript => "launcher script",
            ArtifactKind::EnvironmentFile => "environment file",
            ArtifactKind::BuildDescriptor => "build descriptor",
            ArtifactKind::ModuleDescriptor => "module descriptor",
            ArtifactKind::ApplicationSource => "application source",
        }
    }

    /// Full spec (body, slots, permissions) for this artifact.
    pub fn spec(self) -> ArtifactSpec {
        let content = match self {
            ArtifactKind::ComposeDescriptor => ArtifactContent::Slotted {
                source: TemplateSource::Static(COMPOSE_TEMPLATE),
                slots: &[Slot::AdminUiPort, Slot::DbPort, Slot::HttpPort],
            },
            ArtifactKind::LauncherScript => {
                ArtifactContent::Fixed(TemplateSource::Static(LAUNCHER_TEMPLATE))
            }
            ArtifactKind::EnvironmentFile => ArtifactContent::Slotted {
                source: TemplateSource::Static(ENV_TEMPLATE),
                slots: &[Slot::DbUser, Slot::DbPass, Slot::ApiKey],
            },
            ArtifactKind::BuildDescriptor => {
                ArtifactContent::Fixed(TemplateSource::Static(DOCKERFILE_TEMPLATE))
            }
            ArtifactKind::ModuleDescriptor => {
                ArtifactContent::Fixed(TemplateSource::Static(GO_MOD_TEMPLATE))
            }
            ArtifactKind::ApplicationSource => ArtifactContent::Application,
        };
        let permissions = if matches!(self, ArtifactKind::LauncherScript) {
            Permissions::executable()
        } else {
            Permissions::read_write()
        };
        ArtifactSpec {
            kind: self,
            path: RelativePath::new(self.relative_path()),
            permissions,
            content,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// What fills an artifact's bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactContent {
    /// Fixed body, copied as-is.
    Fixed(TemplateSource),
    /// Body with the listed slots substituted from the request.
    Slotted {
        source: TemplateSource,
        slots: &'static [Slot],
    },
    /// The registry-resolved application payload, copied verbatim.
    Application,
}

impl ArtifactContent {
    /// Slots this content consumes (empty for fixed and payload content).
    pub fn slots(&self) -> &'static [Slot] {
        match self {
            ArtifactContent::Slotted { slots, .. } => slots,
            _ => &[],
        }
    }
}

/// Static description of one artifact in the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSpec {
    pub kind: ArtifactKind,
    pub path: RelativePath,
    pub permissions: Permissions,
    pub content: ArtifactContent,
}

/// An artifact with its final bytes, ready to be written under a target
/// root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub path: RelativePath,
    pub content: String,
    pub permissions: Permissions,
}

/// The full layout in write order.
pub fn stack_artifacts() -> [ArtifactSpec; 6] {
    ArtifactKind::ALL.map(ArtifactKind::spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_order_matches_write_order() {
        let specs = stack_artifacts();
        let paths: Vec<_> = specs.iter().map(|s| s.path.to_string()).collect();
        assert_eq!(
            paths,
            [
                "docker-compose.yml",
                "compose.sh",
                ".env",
                "server/Dockerfile",
                "server/go.mod",
                "server/main.go",
            ]
        );
        for (i, spec) in specs.iter().enumerate() {
            assert_eq!(spec.kind.index() as usize, i);
        }
    }

    #[test]
    fn only_the_launcher_is_executable() {
        for spec in stack_artifacts() {
            let expected = spec.kind == ArtifactKind::LauncherScript;
            assert_eq!(spec.permissions.executable_flag(), expected, "{}", spec.kind);
        }
    }

    #[test]
    fn slot_declarations_match_template_bodies() {
        for spec in stack_artifacts() {
            let body = match &spec.content {
                ArtifactContent::Fixed(source) => source.as_str(),
                ArtifactContent::Slotted { source, .. } => source.as_str(),
                ArtifactContent::Application => continue,
            };
            for slot in Slot::ALL {
                let placeholder = format!("{{{{{}}}}}", slot.name());
                let declared = spec.content.slots().contains(&slot);
                assert_eq!(
                    body.contains(&placeholder),
                    declared,
                    "{}: slot {} declaration out of sync",
                    spec.kind,
                    slot
                );
            }
        }
    }

    #[test]
    fn compose_ports_appear_in_host_mapping_and_expose() {
        let body = COMPOSE_TEMPLATE;
        for (slot, internal) in [
            (Slot::AdminUiPort, "8081"),
            (Slot::DbPort, "27017"),
            (Slot::HttpPort, "80"),
        ] {
            let mapping = format!("- {{{{{}}}}}:{}", slot.name(), internal);
            assert!(body.contains(&mapping), "missing mapping {mapping}");
            let occurrences = body.matches(&format!("{{{{{}}}}}", slot.name())).count();
            assert_eq!(occurrences, 2, "{} should appear twice", slot.name());
        }
    }

    #[test]
    fn env_template_keeps_fixed_container_wiring() {
        assert!(ENV_TEMPLATE.contains("DB_HOST=mongodb"));
        assert!(ENV_TEMPLATE.contains("DB_PORT=27017"));
        assert!(ENV_TEMPLATE.contains("ME_CONFIG_MONGODB_SERVER=mongodb"));
        assert!(ENV_TEMPLATE.contains("ME_CONFIG_MONGODB_PORT=27017"));
        assert_eq!(ENV_TEMPLATE.matches("{{DB_USER}}").count(), 3);
        assert_eq!(ENV_TEMPLATE.matches("{{DB_PASS}}").count(), 3);
        assert_eq!(ENV_TEMPLATE.matches("{{API_KEY}}").count(), 1);
    }

    #[test]
    fn fixed_bodies_are_what_the_stack_expects() {
        assert!(LAUNCHER_TEMPLATE.starts_with("#!/bin/bash"));
        assert!(LAUNCHER_TEMPLATE.contains("docker-compose $@"));
        assert!(DOCKERFILE_TEMPLATE.contains("FROM golang:1.22 AS builder"));
        assert!(DOCKERFILE_TEMPLATE.contains("CMD [\"./myapp\"]"));
        assert!(GO_MOD_TEMPLATE.contains("module my-project"));
        assert!(
            GO_MOD_TEMPLATE
                .contains("require github.com/AlephVault/golang-standard-http-mongodb-storage")
        );
    }
}
