//! Scorer: combines component detections into a score and feedback.
//!
//! Scoring is a single additive pass starting from the rubric's starting
//! score:
//! 1. Each absent component subtracts its penalty (Action and Result weigh more)
//! 2. Each weak-verb occurrence subtracts the weak-verb penalty
//! 3. Texts shorter than the minimum length subtract the short-text penalty
//! 4. The total is floored at zero. There is no ceiling.
//!
//! The advice tier is chosen from the floored score.

use std::path::Path;

use crate::advice::{
    weak_verb_weakness, AdviceTier, QUALITATIVE_RESULT_WEAKNESS, QUANTIFIED_RESULT_STRENGTH,
};
use crate::detectors::detect_all;
use crate::knowledge::KnowledgeArtifact;
use crate::rubric::{Rubric, RubricError};
use crate::types::{Components, Details, ScoringRequest, ValidationResult};

/// The Scorer turns one scoring request into a validation result.
pub struct Scorer;

impl Scorer {
    pub fn new() -> Self {
        Self
    }

    /// Score a request. Pure: the same request always yields the same result.
    pub fn score(&self, request: &ScoringRequest<'_>) -> ValidationResult {
        let rubric = request.rubric;
        let penalties = &rubric.penalties;

        let mut components = Components::default();
        for detection in detect_all(request) {
            if let Some(evidence) = &detection.evidence {
                tracing::trace!(component = %detection.component, evidence = %evidence, "Component detected");
            }
            components.set(detection.component, detection.is_present());
        }

        let mut score = i64::from(rubric.starting_score);
        let mut details = Details::default();

        for component in components.missing() {
            details.missing.push(component.label().to_string());
            score -= i64::from(penalties.for_missing(component));
        }

        let weak_verbs = rubric.weak_verb_occurrences(request.text);
        if weak_verbs > 0 {
            details.weaknesses.push(weak_verb_weakness(weak_verbs));
            let penalty = i64::try_from(weak_verbs)
                .unwrap_or(i64::MAX)
                .saturating_mul(i64::from(penalties.weak_verb));
            score = score.saturating_sub(penalty);
        }

        if components.result {
            details.strengths.push(QUANTIFIED_RESULT_STRENGTH.to_string());
        } else {
            details.weaknesses.push(QUALITATIVE_RESULT_WEAKNESS.to_string());
        }

        let length = request.char_len();
        if length < rubric.min_length {
            score -= i64::from(penalties.short_text);
        }

        let score = u32::try_from(score.max(0)).unwrap_or(u32::MAX);
        let tier = AdviceTier::for_score(score, &rubric.advice);

        tracing::debug!(
            score,
            length,
            weak_verbs,
            missing = details.missing.len(),
            tier = ?tier,
            "Scored text"
        );

        ValidationResult {
            score,
            components,
            details,
            advice: tier.message(request.artifact),
        }
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}

/// A ready-to-use validator holding the knowledge artifact and rubric.
///
/// Both are read-only after construction, so one validator can be shared
/// across threads (wrap it in an `Arc`).
#[derive(Debug, Clone)]
pub struct StarValidator {
    artifact: KnowledgeArtifact,
    rubric: Rubric,
}

impl StarValidator {
    /// Create a validator with the built-in rubric.
    pub fn new(artifact: KnowledgeArtifact) -> Self {
        Self::with_rubric(artifact, Rubric::default())
    }

    /// Create a validator with a custom rubric.
    pub fn with_rubric(artifact: KnowledgeArtifact, rubric: Rubric) -> Self {
        Self { artifact, rubric }
    }

    /// Load a validator from disk.
    ///
    /// The artifact at `knowledge` falls back to the seed when absent or
    /// unusable. A rubric file, when given, must load: a broken rubric is an
    /// error rather than a silent default.
    pub fn from_files(
        knowledge: impl AsRef<Path>,
        rubric: Option<&Path>,
    ) -> Result<Self, RubricError> {
        let artifact = KnowledgeArtifact::load_or_seed(knowledge);
        let rubric = match rubric {
            Some(path) => Rubric::from_file(path)?,
            None => Rubric::default(),
        };
        Ok(Self::with_rubric(artifact, rubric))
    }

    pub fn artifact(&self) -> &KnowledgeArtifact {
        &self.artifact
    }

    pub fn rubric(&self) -> &Rubric {
        &self.rubric
    }

    /// Validate one text. Any string, including empty, yields a result.
    pub fn validate(&self, text: &str) -> ValidationResult {
        let request = ScoringRequest::new(text, &self.artifact, &self.rubric);
        Scorer::new().score(&request)
    }
}

impl Default for StarValidator {
    fn default() -> Self {
        Self::new(KnowledgeArtifact::seed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::AdviceTier;
    use crate::types::Component;
    use proptest::prelude::*;

    /// 144 characters with every component and no weak verbs.
    const COMPLETE_STAR: &str = "대학교 3학년 당시 교내 프로젝트에서 팀장 역할을 맡았습니다. \
목표는 동아리 회원 관리 시스템의 응답 속도를 개선하는 것이었습니다. \
병목 구간을 분석하고 캐시를 도입하여 응답 시간을 40% 단축했습니다. \
그 결과 월간 활성 사용자가 120명으로 늘어났습니다.";

    fn validator() -> StarValidator {
        StarValidator::default()
    }

    #[test]
    fn test_empty_text_floors_at_zero() {
        let result = validator().validate("");

        assert_eq!(result.score, 0);
        assert_eq!(result.components, Components::default());
        assert_eq!(
            result.details.missing,
            Component::ALL.iter().map(|c| c.label()).collect::<Vec<_>>()
        );
        assert_eq!(result.details.weaknesses, vec![QUALITATIVE_RESULT_WEAKNESS]);
        assert!(result.details.strengths.is_empty());
        assert_eq!(
            result.advice,
            AdviceTier::NeedsStructure.message(&KnowledgeArtifact::seed())
        );
    }

    #[test]
    fn test_complete_star_scores_full_marks() {
        assert!(COMPLETE_STAR.chars().count() >= 100);
        let result = validator().validate(COMPLETE_STAR);

        assert_eq!(result.score, 100);
        assert!(result.components.is_complete());
        assert!(result.details.missing.is_empty());
        assert!(result.details.weaknesses.is_empty());
        assert_eq!(result.details.strengths, vec![QUANTIFIED_RESULT_STRENGTH]);
        assert_eq!(
            result.advice,
            AdviceTier::Excellent.message(&KnowledgeArtifact::seed())
        );
    }

    #[test]
    fn test_short_context_only_text() {
        // 100 - 30 (action) - 30 (result) - 20 (short)
        let result = validator().validate("당시 목표");

        assert_eq!(result.score, 20);
        assert!(result.components.situation);
        assert!(result.components.task);
        assert_eq!(
            result.details.missing,
            vec![Component::Action.label(), Component::Result.label()]
        );
    }

    #[test]
    fn test_missing_task_then_weak_verb_drops_a_tier() {
        let text = COMPLETE_STAR.replace("역할", "일").replace("목표", "계획");
        let result = validator().validate(&text);

        assert_eq!(result.score, 90);
        assert!(!result.components.task);

        let with_weak = format!("{} 많이 배웠다.", text);
        let result = validator().validate(&with_weak);
        assert_eq!(result.score, 85);
        assert!(result.advice.contains("분석, 기획, 개발"));
    }

    #[test]
    fn test_weak_verbs_counted_per_occurrence() {
        let text = format!("{} 참여했다. 참여했다. 느꼈다.", COMPLETE_STAR);
        let result = validator().validate(&text);

        assert_eq!(result.score, 85);
        assert_eq!(result.details.weaknesses, vec![weak_verb_weakness(3)]);
    }

    #[test]
    fn test_custom_starting_score_is_not_capped() {
        let rubric = Rubric {
            starting_score: 120,
            ..Rubric::default()
        };
        let validator = StarValidator::with_rubric(KnowledgeArtifact::seed(), rubric);

        assert_eq!(validator.validate(COMPLETE_STAR).score, 120);
    }

    #[test]
    fn test_from_files_falls_back_to_seed() {
        let dir = tempfile::tempdir().unwrap();
        let validator = StarValidator::from_files(dir.path().join("knowledge_base.json"), None).unwrap();

        assert_eq!(validator.artifact(), &KnowledgeArtifact::seed());
        assert_eq!(validator.rubric(), &Rubric::default());
    }

    #[test]
    fn test_from_files_loads_rubric() {
        let dir = tempfile::tempdir().unwrap();
        let rubric = dir.path().join("rubric.yaml");
        std::fs::write(&rubric, "min_length: 10\n").unwrap();

        let validator =
            StarValidator::from_files(dir.path().join("knowledge_base.json"), Some(rubric.as_path()))
                .unwrap();
        assert_eq!(validator.rubric().min_length, 10);
    }

    #[test]
    fn test_from_files_rejects_broken_rubric() {
        let dir = tempfile::tempdir().unwrap();
        let rubric = dir.path().join("rubric.yaml");
        std::fs::write(&rubric, "situation_cues: []\n").unwrap();

        let result =
            StarValidator::from_files(dir.path().join("knowledge_base.json"), Some(rubric.as_path()));
        assert!(matches!(result, Err(RubricError::ValidationError(_))));
    }

    #[test]
    fn test_validator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StarValidator>();
    }

    proptest! {
        #[test]
        fn score_never_exceeds_starting_score(text in ".{0,300}") {
            let result = validator().validate(&text);
            prop_assert!(result.score <= 100);
        }

        #[test]
        fn scoring_is_idempotent(text in "[가-힣0-9% ]{0,200}") {
            let validator = validator();
            prop_assert_eq!(validator.validate(&text), validator.validate(&text));
        }

        #[test]
        fn weak_verb_penalty_is_linear(suffix in "[a-z ]{0,40}", n in 0usize..=3) {
            let base = format!("{} {}", COMPLETE_STAR, suffix);
            let baseline = validator().validate(&base).score;

            let weak = " 참여했다".repeat(n);
            let penalized = validator().validate(&format!("{}{}", base, weak)).score;

            prop_assert_eq!(baseline, 100);
            prop_assert_eq!(penalized, baseline - 5 * n as u32);
        }
    }
}
