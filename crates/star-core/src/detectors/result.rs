//! Result detector.
//!
//! A result is measurable when the text contains a number with a unit,
//! percentage, multiplier or currency marker, or any metric keyword from the
//! knowledge artifact.

use crate::rubric::patterns::{find_literal, find_quantity};
use crate::types::{Component, ScoringRequest};

use super::{Detection, Detector};

/// Detects quantitative evidence of an outcome.
pub struct ResultDetector;

impl ResultDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ResultDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for ResultDetector {
    fn component(&self) -> Component {
        Component::Result
    }

    fn detect(&self, request: &ScoringRequest<'_>) -> Detection {
        let evidence = find_quantity(request.text)
            .or_else(|| find_literal(request.text, &request.artifact.metrics));

        match evidence {
            Some(found) => Detection::present(self.component(), found),
            None => Detection::absent(self.component()),
        }
    }
}
