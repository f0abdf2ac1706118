//! Command line argument parsing using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;

/// spellcheckrs - check spelling against a word list and suggest corrections
#[derive(Parser, Debug, Clone)]
#[command(name = "spellcheckrs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpellcheckArgs {
    /// Verbosity level (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// JSON configuration file
    #[arg(long, value_name = "CONFIG_FILE", env = "SPELLCHECK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Newline-delimited word list
    #[arg(short, long, value_name = "WORDS_FILE", env = "SPELLCHECK_DICTIONARY", global = true)]
    pub dictionary: Option<PathBuf>,

    #[command(flatten)]
    pub search: SearchArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpellcheckArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }

    /// Load the configuration file (if any) and apply command line overrides.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_json_file(path)?,
            None => Config::default(),
        };
        if let Some(dictionary) = &self.dictionary {
            config.dictionary = dictionary.clone();
        }
        if let Some(max) = self.search.max_distance {
            config.search.max_distance = Some(max);
        }
        if self.search.parallel {
            config.search.parallel = true;
        }
        if self.search.no_prefilter {
            config.search.length_prefilter = false;
        }
        match &self.command {
            Command::SaveMisspelled(SaveArgs { output: Some(p), .. }) => {
                config.misspelled_output = p.clone();
            }
            Command::Suggest(SuggestArgs { output: Some(p), .. }) => {
                config.suggestions_output = p.clone();
            }
            _ => {}
        }
        config.validate()?;
        Ok(config)
    }
}

/// Suggestion search overrides
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Reject suggestions farther than this weighted distance
    #[arg(long, global = true)]
    pub max_distance: Option<f64>,

    /// Score dictionary entries in parallel
    #[arg(long, global = true)]
    pub parallel: bool,

    /// Disable the length-difference prefilter
    #[arg(long, global = true)]
    pub no_prefilter: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check whether a single word is spelled correctly
    #[command(name = "check-word")]
    CheckWord(WordArgs),

    /// List the misspelled words of a sentence
    #[command(name = "check-sentence")]
    CheckSentence(TextArgs),

    /// Show the share of correctly spelled words in a sentence
    Score(TextArgs),

    /// Save the distinct misspelled words of a sentence to a file
    #[command(name = "save-misspelled")]
    SaveMisspelled(SaveArgs),

    /// Propose corrections for misspelled words and save the accepted ones
    Suggest(SuggestArgs),

    /// Menu-driven session
    Interactive,
}

#[derive(Args, Debug, Clone)]
pub struct WordArgs {
    #[arg(value_name = "WORD")]
    pub word: String,
}

#[derive(Args, Debug, Clone)]
pub struct TextArgs {
    /// Sentence to check; multiple arguments are joined with spaces
    #[arg(value_name = "TEXT", num_args = 1.., required = true)]
    pub text: Vec<String>,
}

impl TextArgs {
    pub fn sentence(&self) -> String {
        self.text.join(" ")
    }
}

#[derive(Args, Debug, Clone)]
pub struct SaveArgs {
    #[command(flatten)]
    pub text: TextArgs,

    /// Output file (defaults to IncorrectWords.txt)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct SuggestArgs {
    #[command(flatten)]
    pub text: TextArgs,

    /// Accept every proposed correction without prompting
    #[arg(long)]
    pub accept_all: bool,

    /// Output file (defaults to SpellingSuggestions.txt)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
