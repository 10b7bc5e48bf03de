//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use case "materialize a project stack".

pub mod materialize_service;

pub use materialize_service::{
    GenerationAborted, MaterializeReport, MaterializeService, MaterializeStep,
};
