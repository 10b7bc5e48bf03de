//! Stackgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the stackgen
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          stackgen-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (MaterializeService)           │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Registry, Filesystem)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stackgen-adapters (Infrastructure)   │
//! │  (PresetRegistry, LocalFilesystem, etc) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │  (GenerationRequest, artifact layout,   │
//! │   selectors, slot rendering)            │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stackgen_core::{
//!     application::MaterializeService,
//!     domain::GenerationRequest,
//! };
//! # let registry: Box<dyn stackgen_core::application::TemplateRegistry> = unimplemented!();
//! # let filesystem: Box<dyn stackgen_core::application::Filesystem> = unimplemented!();
//!
//! // 1. Resolve parameters into a request
//! let request = GenerationRequest::builder()
//!     .target_dir("./my-stack")
//!     .template("preset:simple")
//!     .db_port(27017)
//!     .build()
//!     .unwrap();
//!
//! // 2. Use the application service (with injected adapters)
//! let service = MaterializeService::new(registry, filesystem);
//! let report = service.materialize(&request).unwrap();
//! assert_eq!(report.artifacts.len(), 6);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ports::{Filesystem, TemplateRegistry},
        GenerationAborted, MaterializeReport, MaterializeService, MaterializeStep,
    };
    pub use crate::domain::{
        defaults, stack_artifacts, ArtifactKind, GenerationRequest, GenerationRequestBuilder,
        PresetKind, TemplatePayload, TemplateSelector,
    };
    pub use crate::error::{StackgenError, StackgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
