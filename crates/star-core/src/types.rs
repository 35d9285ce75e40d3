//! Core types for STAR validation.

use serde::{Deserialize, Serialize};

use crate::knowledge::KnowledgeArtifact;
use crate::rubric::Rubric;

/// The four narrative components of the STAR rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Situation,
    Task,
    Action,
    Result,
}

impl Component {
    /// All components in rubric order.
    pub const ALL: [Component; 4] = [
        Component::Situation,
        Component::Task,
        Component::Action,
        Component::Result,
    ];

    /// Label reported in `details.missing` when the component is absent.
    pub fn label(&self) -> &'static str {
        match self {
            Component::Situation => "Situation (상황)",
            Component::Task => "Task (과제/목표)",
            Component::Action => "Action (구체적 행동)",
            Component::Result => "Result (수치적 성과)",
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Component::Situation => "situation",
            Component::Task => "task",
            Component::Action => "action",
            Component::Result => "result",
        };
        f.write_str(name)
    }
}

/// Presence flags for each STAR component.
///
/// Serialized with the single-letter keys callers of the validator expect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Components {
    #[serde(rename = "S")]
    pub situation: bool,

    #[serde(rename = "T")]
    pub task: bool,

    #[serde(rename = "A")]
    pub action: bool,

    #[serde(rename = "R")]
    pub result: bool,
}

impl Components {
    /// Whether the given component was detected.
    pub fn get(&self, component: Component) -> bool {
        match component {
            Component::Situation => self.situation,
            Component::Task => self.task,
            Component::Action => self.action,
            Component::Result => self.result,
        }
    }

    /// Record the presence of a component.
    pub fn set(&mut self, component: Component, present: bool) {
        match component {
            Component::Situation => self.situation = present,
            Component::Task => self.task = present,
            Component::Action => self.action = present,
            Component::Result => self.result = present,
        }
    }

    /// Components that were not detected, in rubric order.
    pub fn missing(&self) -> impl Iterator<Item = Component> + '_ {
        Component::ALL.into_iter().filter(|c| !self.get(*c))
    }

    /// True when every component is present.
    pub fn is_complete(&self) -> bool {
        self.missing().next().is_none()
    }
}

/// Qualitative findings attached to a validation result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Details {
    /// Labels of absent components
    pub missing: Vec<String>,

    /// Quality issues detected in the text
    pub weaknesses: Vec<String>,

    /// Quality signals detected in the text
    pub strengths: Vec<String>,
}

/// The outcome of scoring one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Final score, floored at zero. There is no upper clamp.
    pub score: u32,

    /// Which STAR components were detected
    pub components: Components,

    /// Missing components, weaknesses and strengths
    pub details: Details,

    /// One recommendation, tiered by score
    pub advice: String,
}

/// Everything a detector or the scorer may look at for one call.
#[derive(Debug, Clone, Copy)]
pub struct ScoringRequest<'a> {
    /// The text under evaluation
    pub text: &'a str,

    /// Learned vocabulary
    pub artifact: &'a KnowledgeArtifact,

    /// Rule tables and penalties
    pub rubric: &'a Rubric,
}

impl<'a> ScoringRequest<'a> {
    pub fn new(text: &'a str, artifact: &'a KnowledgeArtifact, rubric: &'a Rubric) -> Self {
        Self {
            text,
            artifact,
            rubric,
        }
    }

    /// Length of the text in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
