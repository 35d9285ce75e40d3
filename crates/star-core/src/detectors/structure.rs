//! Situation and Task detectors.
//!
//! Both are literal cue-word lookups against the rubric tables.

use crate::rubric::patterns::find_literal;
use crate::types::{Component, ScoringRequest};

use super::{Detection, Detector};

/// Detects background, time or workplace context.
pub struct SituationDetector;

impl SituationDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SituationDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for SituationDetector {
    fn component(&self) -> Component {
        Component::Situation
    }

    fn detect(&self, request: &ScoringRequest<'_>) -> Detection {
        match find_literal(request.text, &request.rubric.situation_cues) {
            Some(cue) => Detection::present(self.component(), cue),
            None => Detection::absent(self.component()),
        }
    }
}

/// Detects a goal, role, responsibility or problem statement.
pub struct TaskDetector;

impl TaskDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TaskDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for TaskDetector {
    fn component(&self) -> Component {
        Component::Task
    }

    fn detect(&self, request: &ScoringRequest<'_>) -> Detection {
        match find_literal(request.text, &request.rubric.task_cues) {
            Some(cue) => Detection::present(self.component(), cue),
            None => Detection::absent(self.component()),
        }
    }
}
