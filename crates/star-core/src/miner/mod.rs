//! Vocabulary miner.
//!
//! Builds a [`KnowledgeArtifact`] from a corpus of plain-text documents:
//!
//! 1. Unreadable documents contribute empty text and never abort the run
//! 2. Documents of `min_document_chars` characters or fewer are noise and skipped
//! 3. Verb roots are counted across the remaining documents in corpus order
//! 4. The top `top_verbs` roots are merged behind the seed verbs
//!
//! Metric keywords are not learned; they are always the seed metrics.

mod counts;
mod document;

pub use counts::{extract_verb_roots, rank_and_merge, VerbCounts, DEFAULT_TOP_VERBS, VERB_ROOT_PATTERN};
pub use document::{Document, ExtractionError, PlainTextExtractor, TextExtractor};

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::knowledge::seed::{seed_metrics, seed_verbs};
use crate::knowledge::{ArtifactError, CorpusStats, KnowledgeArtifact};

use counts::merge_with_seed;

/// Documents must be strictly longer than this many characters to be mined.
pub const DEFAULT_MIN_DOCUMENT_CHARS: usize = 100;

/// Mining options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MinerConfig {
    /// Character count a document must exceed to be considered
    pub min_document_chars: usize,

    /// Ranked roots kept before merging with the seed
    pub top_verbs: usize,

    /// Verbs that always lead the learned list
    pub seed_verbs: Vec<String>,

    /// Metric keywords copied into the artifact
    pub seed_metrics: Vec<String>,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            min_document_chars: DEFAULT_MIN_DOCUMENT_CHARS,
            top_verbs: DEFAULT_TOP_VERBS,
            seed_verbs: seed_verbs(),
            seed_metrics: seed_metrics(),
        }
    }
}

impl MinerConfig {
    /// Check that every artifact mined with this config will load back.
    ///
    /// The seed verbs alone must form a valid verb list: non-empty, with no
    /// empty or duplicate entries. Seed metrics must not contain empty strings.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        KnowledgeArtifact {
            verbs: self.seed_verbs.clone(),
            metrics: self.seed_metrics.clone(),
            stats: None,
        }
        .validate()
        .map_err(|e| match e {
            ArtifactError::ValidationError(msg) => {
                ArtifactError::ValidationError(format!("seed {}", msg))
            }
            other => other,
        })
    }
}

/// Mines action verbs from a document corpus.
#[derive(Debug, Clone, Default)]
pub struct VocabularyMiner {
    config: MinerConfig,
}

impl VocabularyMiner {
    /// Create a miner, rejecting configs whose seed cannot anchor an artifact.
    pub fn new(config: MinerConfig) -> Result<Self, ArtifactError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    /// Build an artifact from already-extracted documents.
    pub fn build_artifact<I>(&self, documents: I) -> KnowledgeArtifact
    where
        I: IntoIterator<Item = Document>,
    {
        let mut counts = VerbCounts::new();
        let mut scanned = 0usize;
        let mut files_processed = 0usize;

        for document in documents {
            scanned += 1;
            let source = document.source.clone();
            let text = document.into_text();
            let chars = text.chars().count();

            if chars <= self.config.min_document_chars {
                tracing::debug!(source = %source.display(), chars, "Skipping short document");
                continue;
            }

            files_processed += 1;
            let document_counts = extract_verb_roots(&text);
            tracing::debug!(
                source = %source.display(),
                chars,
                roots = document_counts.len(),
                "Mined document"
            );
            counts.merge(&document_counts);
        }

        let verbs = merge_with_seed(&self.config.seed_verbs, counts.ranked(self.config.top_verbs));

        tracing::info!(
            scanned,
            files_processed,
            verbs_found = counts.len(),
            verbs = verbs.len(),
            "Built knowledge artifact"
        );

        KnowledgeArtifact {
            verbs,
            metrics: self.config.seed_metrics.clone(),
            stats: Some(CorpusStats {
                files_processed,
                verbs_found: counts.len(),
            }),
        }
    }

    /// Extract every path with `extractor`, then build the artifact.
    pub fn mine<E, P>(&self, extractor: &E, paths: &[P]) -> KnowledgeArtifact
    where
        E: TextExtractor + ?Sized,
        P: AsRef<Path>,
    {
        self.build_artifact(paths.iter().map(|path| extractor.document(path.as_ref())))
    }
}

/// Build an artifact with the default mining options.
pub fn build_artifact<I>(documents: I) -> KnowledgeArtifact
where
    I: IntoIterator<Item = Document>,
{
    VocabularyMiner::default().build_artifact(documents)
}
