//! Prompter that replays a fixed list of answers

use super::{Prompter, Question};
use anyhow::Result;
use std::collections::VecDeque;

/// Answers questions from a queue, the way a user typing them in order would
///
/// A queued answer that fails validation is recorded as a rejection and the
/// next answer is tried, mirroring an interactive re-prompt.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<Question>,
    rejections: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Questions in the order they were asked (re-prompts are not repeated)
    pub fn asked(&self) -> &[Question] {
        &self.asked
    }

    /// Validation messages produced by rejected answers, in order
    pub fn rejections(&self) -> &[String] {
        &self.rejections
    }

    /// Answers that were never consumed
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &Question) -> Result<String> {
        self.asked.push(question.clone());

        loop {
            let Some(answer) = self.answers.pop_front() else {
                anyhow::bail!("No scripted answer left for '{}'", question.message);
            };
            match question.validate(&answer) {
                None => return Ok(answer),
                Some(message) => self.rejections.push(message),
            }
        }
    }
}
