//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod artifact_fetcher;
pub mod automation_engine;
pub mod staging;

pub use artifact_fetcher::{ArtifactFetcher, FetchRequest};
pub use automation_engine::{AutomationEngine, EngineOutput};
pub use staging::{StagingConnector, StagingSession};
