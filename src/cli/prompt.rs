//! Terminal interaction: menu selection, text input and accept/reject prompts.

use std::io::{self, BufRead, Write};

use dialoguer::{Confirm, Input, Select};

use crate::error::{Result, SpellError};
use crate::search::Correction;
use crate::session::{Decide, Decision};

/// Operations offered by the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    CheckWord,
    CheckSentence,
    Score,
    SaveMisspelled,
    Suggest,
    Quit,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 6] = [
        MenuCommand::CheckWord,
        MenuCommand::CheckSentence,
        MenuCommand::Score,
        MenuCommand::SaveMisspelled,
        MenuCommand::Suggest,
        MenuCommand::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::CheckWord => "Check a single word",
            MenuCommand::CheckSentence => "Check a sentence",
            MenuCommand::Score => "Compute a spelling score",
            MenuCommand::SaveMisspelled => "Save misspelled words",
            MenuCommand::Suggest => "Get suggestions",
            MenuCommand::Quit => "Quit",
        }
    }

    /// Text the user is asked for before running the command.
    pub fn input_prompt(self) -> Option<&'static str> {
        match self {
            MenuCommand::CheckWord => Some("Enter a word to check"),
            MenuCommand::CheckSentence => Some("Enter a sentence to check"),
            MenuCommand::Score => Some("Enter a sentence to score"),
            MenuCommand::SaveMisspelled => {
                Some("Enter a sentence to find and save incorrect words")
            }
            MenuCommand::Suggest => Some("Enter a sentence to check and get suggestions"),
            MenuCommand::Quit => None,
        }
    }
}

/// Show the menu and return the chosen command. Escape or `q` quits.
pub fn select_command() -> Result<MenuCommand> {
    let labels: Vec<&str> = MenuCommand::ALL.iter().map(|c| c.label()).collect();
    let choice = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact_opt()?;
    Ok(choice.map_or(MenuCommand::Quit, |i| MenuCommand::ALL[i]))
}

pub fn read_text(prompt: &str) -> Result<String> {
    let text: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(text)
}

/// Asks the user about each proposed correction.
///
/// On a terminal this uses a `dialoguer` confirmation; otherwise it prints the
/// question and reads one line from stdin, accepting `y`/`yes`. The first
/// prompt failure is kept and every later correction is rejected.
#[derive(Debug, Default)]
pub struct PromptDecider {
    error: Option<SpellError>,
}

impl PromptDecider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface a prompt failure that happened during the session.
    pub fn finish(self) -> Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn ask(correction: &Correction) -> Result<Decision> {
        let question = format!("Did you mean '{}'?", correction.suggestion);
        if console::user_attended() {
            let yes = Confirm::new()
                .with_prompt(question)
                .default(false)
                .interact()?;
            return Ok(if yes { Decision::Accept } else { Decision::Reject });
        }

        let mut out = io::stdout();
        writeln!(out, "{} (y/n): ", question)?;
        out.flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(Decision::from_response(&line))
    }
}

impl Decide for PromptDecider {
    fn decide(&mut self, correction: &Correction) -> Decision {
        if self.error.is_some() {
            return Decision::Reject;
        }
        println!("'{}' might be incorrect.", correction.token);
        match Self::ask(correction) {
            Ok(decision) => decision,
            Err(e) => {
                self.error = Some(e);
                Decision::Reject
            }
        }
    }
}
