//! Command implementations for the spellcheckrs CLI.

use std::path::Path;

use console::style;
use log::info;

use crate::checker::SpellChecker;
use crate::cli::args::*;
use crate::cli::prompt::{read_text, select_command, MenuCommand, PromptDecider};
use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::persist::{save_suggestions, save_words};
use crate::search::Correction;
use crate::session::{Decide, Decision, SuggestionSession};

/// Execute a CLI command.
pub fn execute_command(args: SpellcheckArgs) -> Result<()> {
    let config = args.resolve_config()?;
    let app = App::load(config)?;

    match &args.command {
        Command::CheckWord(word_args) => {
            app.check_word(&word_args.word);
            Ok(())
        }
        Command::CheckSentence(text_args) => {
            app.check_sentence(&text_args.sentence());
            Ok(())
        }
        Command::Score(text_args) => {
            app.score(&text_args.sentence());
            Ok(())
        }
        Command::SaveMisspelled(save_args) => app.save_misspelled(&save_args.text.sentence()),
        Command::Suggest(suggest_args) => {
            let sentence = suggest_args.text.sentence();
            if suggest_args.accept_all {
                let mut accept = |_: &Correction| Decision::Accept;
                app.suggest(&sentence, &mut accept)
            } else {
                let mut decider = PromptDecider::new();
                app.suggest(&sentence, &mut decider)?;
                decider.finish()
            }
        }
        Command::Interactive => app.interactive(),
    }
}

/// A loaded dictionary plus the configuration the commands run with.
pub struct App {
    config: Config,
    dictionary: Dictionary,
}

impl App {
    /// Load the configured dictionary. A missing word list aborts here.
    pub fn load(config: Config) -> Result<Self> {
        let dictionary = Dictionary::from_path(&config.dictionary)?;
        Ok(Self { config, dictionary })
    }

    pub fn new(config: Config, dictionary: Dictionary) -> Self {
        Self { config, dictionary }
    }

    fn checker(&self) -> SpellChecker<'_, Dictionary> {
        SpellChecker::new(&self.dictionary)
    }

    pub fn check_word(&self, word: &str) -> bool {
        let correct = self.checker().check_word(word);
        if correct {
            println!("{}", style("Spelled correctly.").green());
        } else {
            println!("{}", style("Incorrect spelling.").red());
        }
        correct
    }

    pub fn check_sentence(&self, sentence: &str) -> Vec<String> {
        let misspelled = self.checker().misspelled(sentence);
        if misspelled.is_empty() {
            println!("{}", style("No misspelled words.").green());
        }
        for word in &misspelled {
            println!("Incorrect: {}", style(word).red());
        }
        misspelled
    }

    pub fn score(&self, sentence: &str) {
        let score = self.checker().score(sentence);
        println!("Spelling Score: {}", style(score).bold());
    }

    pub fn save_misspelled(&self, sentence: &str) -> Result<()> {
        let misspelled = self.checker().distinct_misspelled(sentence);
        let path = &self.config.misspelled_output;
        save_words(path, &misspelled)?;
        println!("Incorrect words saved to {}.", path.display());
        Ok(())
    }

    pub fn suggest<D: Decide>(&self, sentence: &str, decider: &mut D) -> Result<()> {
        let report = SuggestionSession::run(&self.dictionary, self.config.search, sentence, decider);
        info!(
            "{} of {} tokens unknown, {} suggestions accepted",
            report.unknown_tokens().count(),
            report.outcomes.len(),
            report.suggestions.len()
        );
        let path: &Path = &self.config.suggestions_output;
        if save_suggestions(path, &report.suggestions)? {
            println!("Suggestions saved to {}.", path.display());
        }
        Ok(())
    }

    /// Menu loop: pick an operation, read its input, run it, repeat until quit.
    pub fn interactive(&self) -> Result<()> {
        loop {
            let command = select_command()?;
            let Some(prompt) = command.input_prompt() else {
                return Ok(());
            };
            let text = read_text(prompt)?;
            match command {
                MenuCommand::CheckWord => {
                    self.check_word(&text);
                }
                MenuCommand::CheckSentence => {
                    self.check_sentence(&text);
                }
                MenuCommand::Score => self.score(&text),
                MenuCommand::SaveMisspelled => self.save_misspelled(&text)?,
                MenuCommand::Suggest => {
                    let mut decider = PromptDecider::new();
                    self.suggest(&text, &mut decider)?;
                    decider.finish()?;
                }
                MenuCommand::Quit => return Ok(()),
            }
        }
    }
}
