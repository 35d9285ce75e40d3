//! Advice tiers and feedback messages.

use serde::{Deserialize, Serialize};

use crate::knowledge::KnowledgeArtifact;
use crate::rubric::AdviceThresholds;

/// Strength reported when the result is quantified.
pub const QUANTIFIED_RESULT_STRENGTH: &str =
    "성과가 수치나 명확한 지표로 표현되어 신뢰도를 높입니다.";

/// Weakness reported when the result is only qualitative.
pub const QUALITATIVE_RESULT_WEAKNESS: &str =
    "결과가 정성적(열심히 했다, 좋았다)으로만 기술되었습니다. 구체적인 숫자(%, 금액, 기간 등)를 포함시키세요.";

/// Weakness reported for weak-verb occurrences.
pub fn weak_verb_weakness(count: usize) -> String {
    format!(
        "수동적이거나 추상적인 표현이 감지되었습니다 ({}회): '참여했다', '배웠다' 대신 '주도했다', '분석하여 해결했다' 등으로 바꿔보세요.",
        count
    )
}

/// Advice tier, highest threshold wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceTier {
    Excellent,
    Good,
    NeedsStructure,
}

impl AdviceTier {
    /// Pick the tier for a clamped score.
    pub fn for_score(score: u32, thresholds: &AdviceThresholds) -> Self {
        if score >= thresholds.excellent {
            AdviceTier::Excellent
        } else if score >= thresholds.good {
            AdviceTier::Good
        } else {
            AdviceTier::NeedsStructure
        }
    }

    /// Render the recommendation for this tier.
    ///
    /// The moderate tier names the three highest-ranked verbs; the low tier
    /// names every metric keyword.
    pub fn message(&self, artifact: &KnowledgeArtifact) -> String {
        match self {
            AdviceTier::Excellent => {
                "훌륭합니다! 실제 합격 자소서들과 유사한 '핵심 동사'와 '성과 지표'가 잘 사용되었습니다."
                    .to_string()
            }
            AdviceTier::Good => format!(
                "전반적으로 양호합니다. 학습된 합격 데이터 기반으로 보았을 때, 행동을 조금 더 주도적인 단어({} 등)로 표현해보세요.",
                artifact.top_verbs(3).join(", ")
            ),
            AdviceTier::NeedsStructure => format!(
                "구조적 보완이 필요합니다. 합격 자소서들은 보통 구체적인 숫자({})와 명확한 행동 동사를 사용합니다.",
                artifact.metrics.join(", ")
            ),
        }
    }
}
