//! Action detector.
//!
//! Action is satisfied by any learned verb root appearing in the text. The
//! verb list comes from the knowledge artifact, so the detector is only as
//! good as the corpus it was mined from.

use crate::rubric::patterns::find_literal;
use crate::types::{Component, ScoringRequest};

use super::{Detection, Detector};

/// Detects a concrete action verb from the knowledge artifact.
pub struct ActionDetector;

impl ActionDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ActionDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for ActionDetector {
    fn component(&self) -> Component {
        Component::Action
    }

    fn detect(&self, request: &ScoringRequest<'_>) -> Detection {
        match find_literal(request.text, &request.artifact.verbs) {
            Some(verb) => Detection::present(self.component(), verb),
            None => Detection::absent(self.component()),
        }
    }
}
