//! The knowledge artifact: learned verbs, metric keywords and corpus stats.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

use super::schema::validate_artifact_schema;
use super::seed::{seed_metrics, seed_verbs};

/// Errors that can occur when reading or writing an artifact.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Failed to read knowledge artifact: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Knowledge artifact failed schema validation: {}", .0.join("; "))]
    SchemaError(Vec<String>),

    #[error("Knowledge artifact is invalid: {0}")]
    ValidationError(String),
}

/// Diagnostics about the corpus an artifact was mined from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    /// Documents long enough to be mined
    pub files_processed: usize,

    /// Distinct verb roots discovered before ranking
    pub verbs_found: usize,
}

/// Learned vocabulary consumed by the scoring engine.
///
/// Immutable once built. The scoring engine only ever borrows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeArtifact {
    /// Verb roots, highest-ranked first. Always starts with the seed verbs.
    pub verbs: Vec<String>,

    /// Keywords signalling a quantitative result
    pub metrics: Vec<String>,

    /// Corpus diagnostics; absent on the built-in seed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<CorpusStats>,
}

impl KnowledgeArtifact {
    /// The built-in artifact used when nothing has been learned yet.
    pub fn seed() -> Self {
        Self {
            verbs: seed_verbs(),
            metrics: seed_metrics(),
            stats: None,
        }
    }

    /// Parse an artifact from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        validate_artifact_schema(&value).map_err(ArtifactError::SchemaError)?;

        let artifact: KnowledgeArtifact = serde_json::from_value(value)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Parse an artifact from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load an artifact if the file exists.
    ///
    /// `Ok(None)` means there is nothing at `path`; any other failure is an error.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Option<Self>, ArtifactError> {
        match fs::read_to_string(path.as_ref()) {
            Ok(contents) => Self::from_json(&contents).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Load the artifact at `path`, substituting the seed when it is absent
    /// or unusable. Never fails.
    pub fn load_or_seed(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        match Self::try_load(path) {
            Ok(Some(artifact)) => {
                tracing::info!(
                    path = %path.display(),
                    verbs = artifact.verbs.len(),
                    "Loaded knowledge artifact"
                );
                artifact
            }
            Ok(None) => {
                tracing::warn!(path = %path.display(), "Knowledge artifact not found, using seed vocabulary");
                Self::seed()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Knowledge artifact unusable, using seed vocabulary");
                Self::seed()
            }
        }
    }

    /// Serialize as pretty-printed JSON, the on-disk format.
    pub fn to_json_pretty(&self) -> Result<String, ArtifactError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The `n` highest-ranked verbs (fewer if the list is shorter).
    pub fn top_verbs(&self, n: usize) -> &[String] {
        &self.verbs[..n.min(self.verbs.len())]
    }

    /// Check invariants the schema cannot express.
    pub(crate) fn validate(&self) -> Result<(), ArtifactError> {
        if self.verbs.is_empty() {
            return Err(ArtifactError::ValidationError(
                "verbs must not be empty".to_string(),
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for verb in &self.verbs {
            if verb.is_empty() {
                return Err(ArtifactError::ValidationError(
                    "verbs must not contain empty strings".to_string(),
                ));
            }
            if !seen.insert(verb.as_str()) {
                return Err(ArtifactError::ValidationError(format!(
                    "Duplicate verb: {}",
                    verb
                )));
            }
        }

        if self.metrics.iter().any(|m| m.is_empty()) {
            return Err(ArtifactError::ValidationError(
                "metrics must not contain empty strings".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for KnowledgeArtifact {
    fn default() -> Self {
        Self::seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::seed::{SEED_METRICS, SEED_VERBS};
    use std::io::Write;

    const LEARNED: &str = r#"{
  "verbs": ["분석", "기획", "개발", "해결", "주도", "달성", "개선", "구축", "설계", "운영"],
  "metrics": ["%", "원", "배", "시간", "단축", "증가", "감소"],
  "stats": { "files_processed": 82, "verbs_found": 412 }
}"#;

    #[test]
    fn test_seed_matches_seed_lists() {
        let seed = KnowledgeArtifact::seed();
        assert_eq!(seed.verbs, SEED_VERBS);
        assert_eq!(seed.metrics, SEED_METRICS);
        assert!(seed.stats.is_none());
    }

    #[test]
    fn test_parse_learned_artifact() {
        let artifact = KnowledgeArtifact::from_json(LEARNED).unwrap();
        assert_eq!(artifact.verbs.len(), 10);
        assert_eq!(artifact.top_verbs(3), ["분석", "기획", "개발"]);
        assert_eq!(
            artifact.stats,
            Some(CorpusStats {
                files_processed: 82,
                verbs_found: 412
            })
        );
    }

    #[test]
    fn test_duplicate_verbs_rejected() {
        let result = KnowledgeArtifact::from_json(r#"{ "verbs": ["분석", "분석"], "metrics": [] }"#);
        assert!(matches!(result, Err(ArtifactError::ValidationError(_))));
    }

    #[test]
    fn test_schema_violation_reported() {
        let result = KnowledgeArtifact::from_json(r#"{ "verbs": [], "metrics": [] }"#);
        assert!(matches!(result, Err(ArtifactError::SchemaError(_))));
    }

    #[test]
    fn test_seed_serializes_without_stats() {
        let json = KnowledgeArtifact::seed().to_json_pretty().unwrap();
        assert!(!json.contains("stats"));
        assert_eq!(KnowledgeArtifact::from_json(&json).unwrap(), KnowledgeArtifact::seed());
    }

    #[test]
    fn test_top_verbs_shorter_than_requested() {
        let artifact = KnowledgeArtifact {
            verbs: vec!["분석".to_string()],
            metrics: vec![],
            stats: None,
        };
        assert_eq!(artifact.top_verbs(3), ["분석"]);
    }

    #[test]
    fn test_missing_file_falls_back_to_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("knowledge_base.json");

        assert!(KnowledgeArtifact::try_load(&path).unwrap().is_none());
        assert_eq!(KnowledgeArtifact::load_or_seed(&path), KnowledgeArtifact::seed());
    }

    #[test]
    fn test_malformed_file_falls_back_to_seed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        assert!(KnowledgeArtifact::try_load(file.path()).is_err());
        assert_eq!(KnowledgeArtifact::load_or_seed(file.path()), KnowledgeArtifact::seed());
    }

    #[test]
    fn test_learned_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LEARNED.as_bytes()).unwrap();

        let artifact = KnowledgeArtifact::load_or_seed(file.path());
        assert_eq!(artifact.verbs.last().map(String::as_str), Some("운영"));
    }
}
