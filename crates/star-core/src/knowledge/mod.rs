//! Knowledge artifact loading and validation.
//!
//! The artifact is produced by the vocabulary miner and read once by the
//! scoring engine. A missing or malformed file is never fatal: the built-in
//! seed vocabulary takes its place.

mod artifact;
mod schema;
pub mod seed;

pub use artifact::{ArtifactError, CorpusStats, KnowledgeArtifact};
pub use schema::validate_artifact_schema;
