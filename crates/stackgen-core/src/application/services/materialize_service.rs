//! Materialize Service - main application orchestrator.
//!
//! This service turns one validated request into an on-disk project stack:
//! 1. Create the target directory tree (including `server/`)
//! 2. Write the five fixed artifacts in layout order
//! 3. Resolve the application payload and write it last
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).
//!
//! Steps run strictly in order; the first failure aborts the remainder and
//! leaves everything already written in place. There is deliberately no
//! rollback: a half-written target tells the caller exactly how far the run
//! got, and cleaning it up is their decision.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{Filesystem, TemplateRegistry},
        ApplicationError,
    },
    domain::{
        stack_artifacts, ArtifactContent, ArtifactKind, GenerationRequest, RenderContext,
        RenderedArtifact, SERVER_DIR,
    },
};

/// One step of the materialization sequence.
///
/// Directory creation is step 1; the six artifact writes are steps 2-7 in
/// layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterializeStep {
    CreateDirectories,
    WriteArtifact(ArtifactKind),
}

impl MaterializeStep {
    pub const TOTAL: u8 = 7;

    pub const fn number(self) -> u8 {
        match self {
            MaterializeStep::CreateDirectories => 1,
            MaterializeStep::WriteArtifact(kind) => 2 + kind.index(),
        }
    }
}

impl fmt::Display for MaterializeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterializeStep::CreateDirectories => f.write_str("create directories"),
            MaterializeStep::WriteArtifact(kind) => write!(f, "write {kind}"),
        }
    }
}

/// Terminal failure outcome of a materialization run.
///
/// Artifacts written by earlier steps stay on disk.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("aborted at step {}/{} ({}): {}", .step.number(), MaterializeStep::TOTAL, .step, .source)]
pub struct GenerationAborted {
    pub step: MaterializeStep,
    #[source]
    pub source: ApplicationError,
}

impl GenerationAborted {
    fn at(step: MaterializeStep, source: ApplicationError) -> Self {
        Self { step, source }
    }
}

/// Successful materialization report: where the stack landed and which
/// files were written, in write order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterializeReport {
    pub root: PathBuf,
    pub artifacts: Vec<PathBuf>,
}

/// Main materialization service.
///
/// Orchestrates rendering and writing of the full artifact layout.
pub struct MaterializeService {
    registry: Box<dyn TemplateRegistry>,
    filesystem: Box<dyn Filesystem>,
}

impl MaterializeService {
    /// Create a new materialize service with the given adapters.
    pub fn new(registry: Box<dyn TemplateRegistry>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            registry,
            filesystem,
        }
    }

    /// Materialize the full artifact layout for `request`.
    ///
    /// This is the main use case. The registry is consulted exactly once,
    /// when the application source itself is reached, so an abort in an
    /// earlier step never triggers a template read.
    #[instrument(
        skip_all,
        fields(
            target = %request.target_dir().display(),
            template = %request.selector()
        )
    )]
    pub fn materialize(
        &self,
        request: &GenerationRequest,
    ) -> Result<MaterializeReport, GenerationAborted> {
        info!("Materializing project stack");

        // 1. Target directory tree, server/ included.
        let server_dir = request.target_dir().join(SERVER_DIR);
        self.filesystem
            .create_dir_all(&server_dir)
            .map_err(|e| GenerationAborted::at(MaterializeStep::CreateDirectories, e))?;
        debug!(path = %server_dir.display(), "Directories created");

        // 2-7. Artifacts in layout order.
        let context = RenderContext::for_request(request);
        let mut artifacts = Vec::with_capacity(ArtifactKind::ALL.len());
        for spec in stack_artifacts() {
            let step = MaterializeStep::WriteArtifact(spec.kind);
            let content = match &spec.content {
                ArtifactContent::Fixed(source) => source.as_str().to_string(),
                ArtifactContent::Slotted { source, .. } => context.render(source.as_str()),
                ArtifactContent::Application => {
                    let payload = self
                        .registry
                        .resolve(request.selector())
                        .map_err(|e| GenerationAborted::at(step, e))?;
                    payload.as_str().to_string()
                }
            };
            let rendered = RenderedArtifact {
                path: spec.path.clone(),
                content,
                permissions: spec.permissions,
            };
            let written = self
                .write_artifact(request.target_dir(), &rendered)
                .map_err(|e| GenerationAborted::at(step, e))?;
            debug!(step = step.number(), path = %written.display(), "Artifact written");
            artifacts.push(written);
        }

        info!(count = artifacts.len(), "Materialization completed");
        Ok(MaterializeReport {
            root: request.target_dir().to_path_buf(),
            artifacts,
        })
    }

    fn write_artifact(
        &self,
        root: &Path,
        artifact: &RenderedArtifact,
    ) -> Result<PathBuf, ApplicationError> {
        let path = root.join(artifact.path.as_path());
        self.filesystem.write_file(&path, &artifact.content)?;
        if artifact.permissions.executable_flag() {
            self.filesystem.set_permissions(&path, true)?;
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::MockTemplateRegistry;
    use crate::domain::{PresetKind, TemplatePayload, TemplateSelector};
    use stackgen_adapters::MemoryFilesystem;
    use std::path::Path;

    const PAYLOAD: &str = "package main\n\nfunc main() {}\n";

    fn request(target: &str) -> GenerationRequest {
        GenerationRequest::builder()
            .target_dir(target)
            .template("preset:simple")
            .build()
            .unwrap()
    }

    fn registry_serving_payload() -> MockTemplateRegistry {
        let mut registry = MockTemplateRegistry::new();
        registry
            .expect_resolve()
            .withf(|selector| {
                matches!(selector, TemplateSelector::Preset(PresetKind::Simple))
            })
            .times(1)
            .returning(|_| Ok(TemplatePayload::from_static(PAYLOAD)));
        registry
    }

    fn untouchable_registry() -> MockTemplateRegistry {
        let mut registry = MockTemplateRegistry::new();
        registry.expect_resolve().times(0);
        registry
    }

    fn service(registry: MockTemplateRegistry) -> (MaterializeService, MemoryFilesystem) {
        let filesystem = MemoryFilesystem::new();
        let handle = filesystem.clone();
        let service = MaterializeService::new(Box::new(registry), Box::new(filesystem));
        (service, handle)
    }

    // ===== Happy path =====

    #[test]
    fn materializes_the_full_layout() {
        let (service, fs) = service(registry_serving_payload());
        let report = service.materialize(&request("proj")).unwrap();

        assert_eq!(report.root, Path::new("proj"));
        assert_eq!(report.artifacts.len(), 6);
        assert_eq!(report.artifacts[0], Path::new("proj/docker-compose.yml"));
        assert_eq!(report.artifacts[5], Path::new("proj/server/main.go"));

        let compose = fs.read_file(Path::new("proj/docker-compose.yml")).unwrap();
        assert!(compose.contains("- 27017:27017"));
        assert!(compose.contains("- 8080:80\n"));
        assert!(compose.contains("- 8081:8081"));

        let env = fs.read_file(Path::new("proj/.env")).unwrap();
        assert!(env.contains("DB_USER=admin"));
        assert!(env.contains("DB_PASS=p455w0rd"));
        assert!(env.contains("SERVER_API_KEY=sample-abcdef"));

        assert_eq!(
            fs.read_file(Path::new("proj/server/main.go")).unwrap(),
            PAYLOAD
        );
        assert!(fs.is_executable(Path::new("proj/compose.sh")));
    }

    #[test]
    fn payload_is_copied_verbatim_even_with_placeholder_syntax() {
        let mut registry = MockTemplateRegistry::new();
        registry
            .expect_resolve()
            .times(1)
            .returning(|_| Ok(TemplatePayload::from_owned("x := \"{{DB_USER}}\"")));
        let (service, fs) = service(registry);

        service.materialize(&request("proj")).unwrap();
        assert_eq!(
            fs.read_file(Path::new("proj/server/main.go")).unwrap(),
            "x := \"{{DB_USER}}\""
        );
    }

    // ===== Abort semantics =====

    #[test]
    fn directory_failure_aborts_at_step_one_with_nothing_written() {
        let (service, fs) = service(untouchable_registry());
        fs.fail_dir_creation();

        let err = service.materialize(&request("proj")).unwrap_err();
        assert_eq!(err.step, MaterializeStep::CreateDirectories);
        assert_eq!(err.step.number(), 1);
        assert!(matches!(
            err.source,
            ApplicationError::DirectoryCreationFailed { .. }
        ));
        assert!(fs.list_files().is_empty());
    }

    #[test]
    fn write_failure_keeps_earlier_artifacts_and_skips_the_registry() {
        let (service, fs) = service(untouchable_registry());
        fs.fail_writes_matching(".env");

        let err = service.materialize(&request("proj")).unwrap_err();
        assert_eq!(
            err.step,
            MaterializeStep::WriteArtifact(ArtifactKind::EnvironmentFile)
        );
        assert_eq!(err.step.number(), 4);

        // Steps 2 and 3 landed, nothing after step 4 ran.
        assert!(fs.read_file(Path::new("proj/docker-compose.yml")).is_some());
        assert!(fs.read_file(Path::new("proj/compose.sh")).is_some());
        assert!(fs.read_file(Path::new("proj/.env")).is_none());
        assert!(fs.read_file(Path::new("proj/server/Dockerfile")).is_none());
        assert!(fs.read_file(Path::new("proj/server/main.go")).is_none());
    }

    #[test]
    fn registry_failure_aborts_at_step_seven_with_five_artifacts_left() {
        let mut registry = MockTemplateRegistry::new();
        registry.expect_resolve().times(1).returning(|_| {
            Err(ApplicationError::TemplateNotFound {
                path: PathBuf::from("missing.go"),
                reason: "no such file".into(),
            })
        });
        let (service, fs) = service(registry);

        let err = service.materialize(&request("proj")).unwrap_err();
        assert_eq!(
            err.step,
            MaterializeStep::WriteArtifact(ArtifactKind::ApplicationSource)
        );
        assert_eq!(err.step.number(), 7);
        assert_eq!(fs.list_files().len(), 5);
        assert!(fs.read_file(Path::new("proj/server/main.go")).is_none());
        assert!(err.to_string().contains("step 7/7"));
        assert!(err.to_string().contains("missing.go"));
    }

    #[test]
    fn abort_diagnostic_names_step_and_cause() {
        let (service, fs) = service(untouchable_registry());
        fs.fail_writes_matching("compose.sh");

        let err = service.materialize(&request("proj")).unwrap_err();
        let line = err.to_string();
        assert!(line.contains("step 3/7"), "{line}");
        assert!(line.contains("launcher script"), "{line}");
        assert!(line.contains("compose.sh"), "{line}");
    }

    // ===== Determinism =====

    #[test]
    fn identical_requests_materialize_identically() {
        let build = || {
            GenerationRequest::builder()
                .target_dir("proj")
                .template("preset:simple")
                .db_port(15_432)
                .db_user("svc")
                .api_key("key-1")
                .build()
                .unwrap()
        };
        let (first_service, first_fs) = service(registry_serving_payload());
        let (second_service, second_fs) = service(registry_serving_payload());

        first_service.materialize(&build()).unwrap();
        second_service.materialize(&build()).unwrap();

        let mut files = first_fs.list_files();
        files.sort();
        assert_eq!(files.len(), 6);
        for file in files {
            assert_eq!(
                first_fs.read_file(&file),
                second_fs.read_file(&file),
                "{} should render identically",
                file.display()
            );
        }
    }
}
