//! Command handlers.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use star_core::{
    call_tool, decode_arguments, tool_definition, InvocationError, KnowledgeArtifact, MinerConfig,
    PlainTextExtractor, StarValidator, VocabularyMiner,
};

use crate::corpus::collect_corpus;

/// Exit status for a failed command: 2 for a rejected invocation, 1 otherwise.
pub fn exit_status_for(error: &anyhow::Error) -> u8 {
    if error.downcast_ref::<InvocationError>().is_some() {
        2
    } else {
        1
    }
}

fn load_validator(knowledge: &Path, rubric: Option<&Path>) -> Result<StarValidator> {
    StarValidator::from_files(knowledge, rubric).with_context(|| match rubric {
        Some(path) => format!("Failed to load rubric {}", path.display()),
        None => "Failed to load rubric".to_string(),
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

/// `star validate`
pub fn validate(
    knowledge: &Path,
    rubric: Option<&Path>,
    text: Option<String>,
    file: Option<PathBuf>,
) -> Result<()> {
    let text = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            buffer
        }
    };

    let validator = load_validator(knowledge, rubric)?;
    print_json(&validator.validate(&text))
}

/// Options for `star train`.
pub struct TrainOptions {
    pub corpus: PathBuf,
    pub output: PathBuf,
    pub min_length: usize,
    pub top: usize,
    pub extensions: Vec<String>,
}

#[derive(Serialize)]
struct TrainSummary<'a> {
    output: &'a Path,
    documents_found: usize,
    files_processed: usize,
    verbs_found: usize,
    verbs: &'a [String],
}

/// `star train`
pub fn train(options: TrainOptions) -> Result<()> {
    let paths = collect_corpus(&options.corpus, &options.extensions)?;
    tracing::info!(
        corpus = %options.corpus.display(),
        documents = paths.len(),
        "Scanning corpus"
    );

    let miner = VocabularyMiner::new(MinerConfig {
        min_document_chars: options.min_length,
        top_verbs: options.top,
        ..MinerConfig::default()
    })
    .context("Invalid mining options")?;
    let artifact = miner.mine(&PlainTextExtractor, &paths);

    if let Some(parent) = options.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let json = artifact.to_json_pretty()?;
    fs::write(&options.output, json)
        .with_context(|| format!("Failed to write {}", options.output.display()))?;

    let stats = artifact.stats.unwrap_or_default();
    print_json(&TrainSummary {
        output: &options.output,
        documents_found: paths.len(),
        files_processed: stats.files_processed,
        verbs_found: stats.verbs_found,
        verbs: &artifact.verbs,
    })
}

/// `star describe`
pub fn describe(knowledge: &Path) -> Result<()> {
    let artifact = KnowledgeArtifact::load_or_seed(knowledge);
    print_json(&tool_definition(&artifact))
}

/// `star call`
pub fn call(knowledge: &Path, rubric: Option<&Path>, tool: &str, args: &str) -> Result<()> {
    let arguments = decode_arguments(args)?;

    let validator = load_validator(knowledge, rubric)?;
    let result = call_tool(&validator, tool, &arguments)?;
    print_json(&result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_errors_exit_with_two() {
        let error = anyhow::Error::new(InvocationError::MissingText);
        assert_eq!(exit_status_for(&error), 2);

        let error = anyhow::anyhow!("disk full");
        assert_eq!(exit_status_for(&error), 1);
    }

    #[test]
    fn test_train_writes_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = dir.path().join("corpus");
        fs::create_dir(&corpus).unwrap();
        let letter = format!("{} {}", "설계했다 운영했다 설계하고", "가".repeat(100));
        fs::write(corpus.join("letter.txt"), letter).unwrap();

        let output = dir.path().join("out").join("knowledge_base.json");
        train(TrainOptions {
            corpus,
            output: output.clone(),
            min_length: 100,
            top: 50,
            extensions: vec!["txt".to_string()],
        })
        .unwrap();

        let artifact = KnowledgeArtifact::from_json_file(&output).unwrap();
        assert_eq!(artifact.stats.map(|s| s.files_processed), Some(1));
        assert_eq!(&artifact.verbs[8..], ["설계", "운영"]);
    }

    #[test]
    fn test_call_rejects_missing_text() {
        let dir = tempfile::tempdir().unwrap();
        let knowledge = dir.path().join("knowledge_base.json");

        let error = call(&knowledge, None, "validate_star", r#"{"body": "x"}"#).unwrap_err();
        assert!(error.downcast_ref::<InvocationError>().is_some());
    }

    #[test]
    fn test_call_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let knowledge = dir.path().join("knowledge_base.json");

        let error = call(&knowledge, None, "validate_star", "not json").unwrap_err();
        assert_eq!(exit_status_for(&error), 2);
    }

    #[test]
    fn test_bad_rubric_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let rubric = dir.path().join("rubric.yaml");
        fs::write(&rubric, "situation_cues: []").unwrap();

        let result = load_validator(&dir.path().join("knowledge_base.json"), Some(rubric.as_path()));
        assert!(result.is_err());
    }
}
