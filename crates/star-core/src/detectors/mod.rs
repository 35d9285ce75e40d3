//! Component detectors.
//!
//! Each detector answers one question about the text: is this STAR component
//! present? Detectors are independent; none reads another's outcome. The
//! scorer combines their detections.

mod action;
mod result;
mod structure;

pub use action::ActionDetector;
pub use result::ResultDetector;
pub use structure::{SituationDetector, TaskDetector};

use crate::types::{Component, ScoringRequest};

/// What a detector found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// The component this detection is about
    pub component: Component,

    /// The cue, verb or quantity that satisfied the component
    pub evidence: Option<String>,
}

impl Detection {
    pub fn present(component: Component, evidence: impl Into<String>) -> Self {
        Self {
            component,
            evidence: Some(evidence.into()),
        }
    }

    pub fn absent(component: Component) -> Self {
        Self {
            component,
            evidence: None,
        }
    }

    pub fn is_present(&self) -> bool {
        self.evidence.is_some()
    }
}

/// Trait implemented by all component detectors.
pub trait Detector: Send + Sync {
    /// The component this detector covers.
    fn component(&self) -> Component;

    /// Look for the component in the request text.
    fn detect(&self, request: &ScoringRequest<'_>) -> Detection;
}

/// Run every detector in rubric order.
pub fn detect_all(request: &ScoringRequest<'_>) -> [Detection; 4] {
    [
        SituationDetector::new().detect(request),
        TaskDetector::new().detect(request),
        ActionDetector::new().detect(request),
        ResultDetector::new().detect(request),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeArtifact;
    use crate::rubric::Rubric;

    #[test]
    fn test_detect_all_in_rubric_order() {
        let artifact = KnowledgeArtifact::seed();
        let rubric = Rubric::default();
        let request = ScoringRequest::new("", &artifact, &rubric);

        let components: Vec<Component> = detect_all(&request).iter().map(|d| d.component).collect();
        assert_eq!(components, Component::ALL);
    }

    #[test]
    fn test_empty_text_detects_nothing() {
        let artifact = KnowledgeArtifact::seed();
        let rubric = Rubric::default();
        let request = ScoringRequest::new("", &artifact, &rubric);

        assert!(detect_all(&request).iter().all(|d| !d.is_present()));
    }
}
