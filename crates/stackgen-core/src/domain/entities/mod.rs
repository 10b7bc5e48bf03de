pub mod artifact;
pub mod common;
pub mod request;
pub mod template;

pub use crate::domain::DomainError;
pub use artifact::{
    stack_artifacts, ArtifactContent, ArtifactKind, ArtifactSpec, RenderedArtifact, SERVER_DIR,
};
pub use common::{Permissions, RelativePath};
pub use request::{GenerationRequest, GenerationRequestBuilder, PresetKind, TemplateSelector};
pub use template::{RenderContext, Slot, TemplatePayload, TemplateSource};
