// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for stackgen.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O concerns (the filesystem, the template registry) are handled via
//! ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Rich domain model**: Behavior lives in entities, not services

// Public API - what the world sees
pub mod entities;
pub mod error;

// Re-exports for convenience
pub use entities::{
    artifact::{
        stack_artifacts, ArtifactContent, ArtifactKind, ArtifactSpec, RenderedArtifact, SERVER_DIR,
    },
    common::{Permissions, RelativePath},
    request::{defaults, GenerationRequest, GenerationRequestBuilder, PresetKind, TemplateSelector},
    template::{RenderContext, Slot, TemplatePayload, TemplateSource},
};

pub use error::DomainError;
