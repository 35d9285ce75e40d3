//! # star-core
//!
//! Deterministic STAR-method scoring engine and vocabulary miner.
//!
//! This crate answers, for a self-introduction text:
//! - Which of Situation, Task, Action and Result does it contain?
//! - How strong is it, on a 100-point rubric?
//! - What should the writer change?
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same text and artifact always produce the same result
//! 2. **Heuristic**: Literal cue words and number patterns, no language model
//! 3. **Total**: Every string, including empty, yields a result
//! 4. **Learned vocabulary**: Action verbs come from a mined corpus, with a
//!    built-in seed when nothing has been learned
//!
//! ## Example
//!
//! ```rust,ignore
//! use star_core::{KnowledgeArtifact, StarValidator};
//!
//! let artifact = KnowledgeArtifact::load_or_seed("knowledge_base.json");
//! let validator = StarValidator::new(artifact);
//! let result = validator.validate("당시 프로젝트에서 응답 속도를 40% 개선했습니다.");
//!
//! println!("{} {:?}", result.score, result.details.missing);
//! ```

pub mod advice;
pub mod detectors;
pub mod knowledge;
pub mod miner;
pub mod rubric;
pub mod scorer;
pub mod tool;
pub mod types;

// Re-export main types at crate root
pub use advice::AdviceTier;
pub use detectors::{
    ActionDetector, Detection, Detector, ResultDetector, SituationDetector, TaskDetector,
};
pub use knowledge::{ArtifactError, CorpusStats, KnowledgeArtifact};
pub use miner::{
    build_artifact, extract_verb_roots, rank_and_merge, Document, ExtractionError, MinerConfig,
    PlainTextExtractor, TextExtractor, VerbCounts, VocabularyMiner,
};
pub use rubric::{Rubric, RubricError};
pub use scorer::{Scorer, StarValidator};
pub use tool::{
    call_tool, decode_arguments, invoke, tool_definition, InvocationError, ToolDefinition,
    TOOL_NAME,
};
pub use types::{Component, Components, Details, ScoringRequest, ValidationResult};

/// Validate a text against the built-in rubric.
///
/// # Arguments
///
/// * `text` - The self-introduction to score
/// * `artifact` - The knowledge artifact supplying verbs and metrics
///
/// # Returns
///
/// A `ValidationResult` containing:
/// - `score`: 100 minus penalties, floored at 0
/// - `components`: which STAR components were detected
/// - `details`: missing components, weaknesses and strengths
/// - `advice`: one recommendation tiered by score
pub fn validate(text: &str, artifact: &KnowledgeArtifact) -> ValidationResult {
    let rubric = Rubric::default();
    let request = ScoringRequest::new(text, artifact, &rubric);
    Scorer::new().score(&request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_validation() {
        let artifact = KnowledgeArtifact::seed();
        let result = validate("", &artifact);

        assert_eq!(result.score, 0);
        assert_eq!(result.details.missing.len(), 4);
    }

    #[test]
    fn test_free_function_matches_validator() {
        let text = "인턴 근무 당시 목표는 배포 시간을 50% 단축하는 것이었고, 파이프라인을 구축했습니다.";
        let artifact = KnowledgeArtifact::seed();

        assert_eq!(
            validate(text, &artifact),
            StarValidator::new(artifact.clone()).validate(text)
        );
    }
}
