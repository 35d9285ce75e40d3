//! STAR rubric rule tables.
//!
//! The cue words, weak verbs and penalties are data, not control flow. The
//! built-in [`Rubric::default`] reproduces the standard Korean rubric; a
//! rubric may also be loaded from YAML or JSON to localize or extend it.
//! Fields omitted from a file keep their default values.

pub mod patterns;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::types::Component;

/// Cues that place the narrative in a context (background, time, workplace, project).
pub const SITUATION_CUES: &[&str] = &["당시", "배경", "상황", "시절", "근무", "프로젝트"];

/// Cues that name a goal, role, responsibility or problem.
pub const TASK_CUES: &[&str] = &["목표", "과제", "역할", "책임", "문제", "요구"];

/// Passive or non-committal verbs penalized per occurrence.
pub const WEAK_VERBS: &[&str] = &[
    "참여했다",
    "배웠다",
    "생각한다",
    "느꼈다",
    "노력했다",
    "공부했다",
    "알게 되었다",
];

/// Errors that can occur when loading a rubric.
#[derive(Error, Debug)]
pub enum RubricError {
    #[error("Failed to read rubric file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Rubric validation failed: {0}")]
    ValidationError(String),
}

/// Points subtracted from the starting score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Penalties {
    pub situation_missing: u32,
    pub task_missing: u32,
    pub action_missing: u32,
    pub result_missing: u32,

    /// Per weak-verb occurrence
    pub weak_verb: u32,

    /// Applied once when the text is shorter than `min_length`
    pub short_text: u32,
}

impl Penalties {
    /// Penalty for an absent component.
    pub fn for_missing(&self, component: Component) -> u32 {
        match component {
            Component::Situation => self.situation_missing,
            Component::Task => self.task_missing,
            Component::Action => self.action_missing,
            Component::Result => self.result_missing,
        }
    }
}

impl Default for Penalties {
    fn default() -> Self {
        Self {
            situation_missing: 10,
            task_missing: 10,
            action_missing: 30,
            result_missing: 30,
            weak_verb: 5,
            short_text: 20,
        }
    }
}

/// Score thresholds for the advice tiers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AdviceThresholds {
    /// At or above: commendation
    pub excellent: u32,

    /// At or above (and below `excellent`): moderate improvement
    pub good: u32,
}

impl Default for AdviceThresholds {
    fn default() -> Self {
        Self {
            excellent: 90,
            good: 70,
        }
    }
}

/// The complete rule-table set used by the scoring engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Rubric {
    /// Literal cues for the Situation component
    pub situation_cues: Vec<String>,

    /// Literal cues for the Task component
    pub task_cues: Vec<String>,

    /// Weak verbs, each occurrence penalized
    pub weak_verbs: Vec<String>,

    pub penalties: Penalties,

    /// Score before any penalty
    pub starting_score: u32,

    /// Texts with fewer characters than this take the short-text penalty
    pub min_length: usize,

    pub advice: AdviceThresholds,
}

impl Default for Rubric {
    fn default() -> Self {
        Self {
            situation_cues: to_owned(SITUATION_CUES),
            task_cues: to_owned(TASK_CUES),
            weak_verbs: to_owned(WEAK_VERBS),
            penalties: Penalties::default(),
            starting_score: 100,
            min_length: 100,
            advice: AdviceThresholds::default(),
        }
    }
}

impl Rubric {
    /// Parse a rubric from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, RubricError> {
        let rubric: Rubric = serde_yaml::from_str(yaml)?;
        rubric.validate()?;
        Ok(rubric)
    }

    /// Parse a rubric from JSON string.
    pub fn from_json(json: &str) -> Result<Self, RubricError> {
        let rubric: Rubric = serde_json::from_str(json)?;
        rubric.validate()?;
        Ok(rubric)
    }

    /// Parse a rubric from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, RubricError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse a rubric from a file, choosing the format by extension
    /// (`.json` is JSON, anything else YAML).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RubricError> {
        let path = path.as_ref();

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&fs::read_to_string(path)?),
            _ => Self::from_yaml_file(path),
        }
    }

    /// Number of weak-verb occurrences in `text`.
    pub fn weak_verb_occurrences(&self, text: &str) -> usize {
        patterns::count_literals(text, &self.weak_verbs)
    }

    /// Validate the rubric structure.
    fn validate(&self) -> Result<(), RubricError> {
        for (name, table) in [
            ("situation_cues", &self.situation_cues),
            ("task_cues", &self.task_cues),
        ] {
            if table.is_empty() {
                return Err(RubricError::ValidationError(format!(
                    "{} must not be empty",
                    name
                )));
            }
        }

        // An empty needle matches every text.
        for (name, table) in [
            ("situation_cues", &self.situation_cues),
            ("task_cues", &self.task_cues),
            ("weak_verbs", &self.weak_verbs),
        ] {
            if table.iter().any(|entry| entry.is_empty()) {
                return Err(RubricError::ValidationError(format!(
                    "{} must not contain empty strings",
                    name
                )));
            }
        }

        let p = &self.penalties;
        let heaviest_context = p.situation_missing.max(p.task_missing);
        if p.action_missing <= heaviest_context || p.result_missing <= heaviest_context {
            return Err(RubricError::ValidationError(
                "action and result penalties must outweigh situation and task penalties"
                    .to_string(),
            ));
        }

        if self.advice.good > self.advice.excellent {
            return Err(RubricError::ValidationError(format!(
                "advice.good ({}) must not exceed advice.excellent ({})",
                self.advice.good, self.advice.excellent
            )));
        }

        Ok(())
    }
}

fn to_owned(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}
