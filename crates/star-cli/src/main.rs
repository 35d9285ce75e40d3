//! STAR CLI
//!
//! Scores self-introduction texts against the STAR rubric and trains the
//! verb vocabulary the scorer relies on.
//!
//! # Commands
//!
//! - `validate`: score a text from `--text`, `--file` or stdin
//! - `train`: mine a directory of plain-text documents into a knowledge artifact
//! - `describe`: print the `validate_star` tool definition
//! - `call`: run the tool boundary on raw JSON arguments
//!
//! Results go to stdout as JSON; logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use star_core::miner::{DEFAULT_MIN_DOCUMENT_CHARS, DEFAULT_TOP_VERBS};
use star_core::TOOL_NAME;

mod commands;
mod corpus;

/// STAR method validator
#[derive(Parser)]
#[command(name = "star")]
#[command(version)]
#[command(about = "Score self-introductions against the STAR rubric and train its vocabulary")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Knowledge artifact to load (falls back to the seed vocabulary if absent)
    #[arg(long, env = "STAR_KNOWLEDGE", default_value = "knowledge_base.json", global = true)]
    knowledge: PathBuf,

    /// Rubric override (YAML, or JSON by extension)
    #[arg(long, env = "STAR_RUBRIC", global = true)]
    rubric: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one text (reads stdin when neither --text nor --file is given)
    Validate {
        /// Text to score
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,

        /// File containing the text to score
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Build a knowledge artifact from a corpus directory
    Train {
        /// Root directory searched recursively for documents
        #[arg(long)]
        corpus: PathBuf,

        /// Where to write the artifact (defaults to --knowledge)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Documents must be longer than this many characters
        #[arg(long, default_value_t = DEFAULT_MIN_DOCUMENT_CHARS)]
        min_length: usize,

        /// Ranked verbs kept in addition to the seed
        #[arg(long, default_value_t = DEFAULT_TOP_VERBS)]
        top: usize,

        /// File extensions treated as plain text
        #[arg(long, value_delimiter = ',', default_value = "txt,md")]
        extensions: Vec<String>,
    },
    /// Print the tool definition as JSON
    Describe,
    /// Invoke a tool with JSON arguments, e.g. --args '{"text": "..."}'
    Call {
        /// Tool name
        #[arg(long, default_value = TOOL_NAME)]
        tool: String,

        /// Arguments object as JSON
        #[arg(long)]
        args: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_env("STAR_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Validate { text, file } => {
            commands::validate(&cli.knowledge, cli.rubric.as_deref(), text, file)
        }
        Commands::Train {
            corpus,
            output,
            min_length,
            top,
            extensions,
        } => commands::train(commands::TrainOptions {
            corpus,
            output: output.unwrap_or(cli.knowledge),
            min_length,
            top,
            extensions,
        }),
        Commands::Describe => commands::describe(&cli.knowledge),
        Commands::Call { tool, args } => {
            commands::call(&cli.knowledge, cli.rubric.as_deref(), &tool, &args)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(commands::exit_status_for(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_train_defaults() {
        let cli = Cli::try_parse_from(["star", "train", "--corpus", "letters"]).unwrap();
        match cli.command {
            Commands::Train {
                min_length,
                top,
                extensions,
                output,
                ..
            } => {
                assert_eq!(min_length, 100);
                assert_eq!(top, 50);
                assert_eq!(extensions, vec!["txt", "md"]);
                assert!(output.is_none());
            }
            _ => panic!("expected train"),
        }
    }

    #[test]
    fn test_text_and_file_conflict() {
        let result = Cli::try_parse_from(["star", "validate", "--text", "a", "--file", "b.txt"]);
        assert!(result.is_err());
    }
}
