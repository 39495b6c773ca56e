//! Prompt provider seam
//!
//! The orchestrator never talks to a terminal directly. It hands one
//! [`Question`] at a time to a [`Prompter`] and blocks until the prompter
//! returns an answer that passes the question's rule.

pub mod preset;
pub mod scripted;

use crate::validate::Rule;
use anyhow::Result;
use std::fmt;

pub use preset::{PresetAnswers, PresetPrompter};
pub use scripted::ScriptedPrompter;

/// Answer to the "Add a tag?" select that continues the tag loop
pub const YES: &str = "yes";
/// Answer to the "Add a tag?" select that ends the tag loop
pub const NO: &str = "no";

/// Every request the orchestrator makes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Name,
    Description,
    Email,
    AddTag,
    Tag,
    Project,
    Source,
}

impl Field {
    /// Stable key, matching the CLI flag for fields that have one
    pub fn key(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Name => "name",
            Field::Description => "description",
            Field::Email => "email",
            Field::AddTag => "add-tag",
            Field::Tag => "tag",
            Field::Project => "project",
            Field::Source => "source",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// How the answer is entered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Free text input
    Text,
    /// Single choice from the listed options
    Select(Vec<String>),
}

/// One request to the prompt provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub field: Field,
    pub message: String,
    /// Extra help text shown with the prompt
    pub description: Option<String>,
    pub kind: QuestionKind,
    /// Rule the answer must pass; `None` accepts anything, including empty input
    pub rule: Option<Rule>,
}

impl Question {
    /// Free text question
    pub fn text(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            description: None,
            kind: QuestionKind::Text,
            rule: None,
        }
    }

    /// Single-select question over the given options
    pub fn select<S: Into<String>>(
        field: Field,
        message: impl Into<String>,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            field,
            message: message.into(),
            description: None,
            kind: QuestionKind::Select(options.into_iter().map(Into::into).collect()),
            rule: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Check an answer against the rule and, for selects, the option list
    pub fn validate(&self, answer: &str) -> Option<String> {
        if let QuestionKind::Select(options) = &self.kind {
            if !options.iter().any(|o| o == answer) {
                return Some(format!("Expected one of: {}", options.join(", ")));
            }
        }
        self.rule.as_ref().and_then(|rule| rule.validate(answer))
    }
}

/// Something that can answer questions, one at a time
///
/// Implementations own the re-prompt loop: `ask` only returns answers that
/// pass [`Question::validate`]. An `Err` means the session was abandoned.
pub trait Prompter {
    fn ask(&mut self, question: &Question) -> Result<String>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn ask(&mut self, question: &Question) -> Result<String> {
        (**self).ask(question)
    }
}
