//! Prompter that answers from values supplied up front (CLI flags)

use super::{Field, Prompter, Question, NO, YES};
use anyhow::Result;

/// Values known before prompting starts
#[derive(Debug, Clone, Default)]
pub struct PresetAnswers {
    pub username: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    /// `Some(vec![])` answers "no" to the first "Add a tag?" question
    pub tags: Option<Vec<String>>,
    pub project: Option<String>,
    pub source: Option<String>,
}

impl PresetAnswers {
    /// Preset value for a single-valued field
    pub fn get(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Username => &self.username,
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::Email => &self.email,
            Field::Project => &self.project,
            Field::Source => &self.source,
            Field::AddTag | Field::Tag => return None,
        };
        value.as_deref()
    }

    /// Fields that will be answered without asking
    pub fn provided(&self) -> Vec<Field> {
        let mut fields: Vec<Field> = [
            Field::Username,
            Field::Name,
            Field::Description,
            Field::Email,
            Field::Project,
            Field::Source,
        ]
        .into_iter()
        .filter(|f| self.get(*f).is_some())
        .collect();

        if self.tags.is_some() {
            fields.push(Field::Tag);
        }
        fields
    }
}

/// Answers from [`PresetAnswers`] where set, otherwise defers to `inner`
///
/// A preset cannot be re-asked, so a preset that fails its rule is an error
/// rather than a re-prompt.
pub struct PresetPrompter<P> {
    presets: PresetAnswers,
    inner: P,
    next_tag: usize,
}

impl<P: Prompter> PresetPrompter<P> {
    pub fn new(presets: PresetAnswers, inner: P) -> Self {
        Self {
            presets,
            inner,
            next_tag: 0,
        }
    }

    /// Give back the wrapped prompter
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Prompter> Prompter for PresetPrompter<P> {
    fn ask(&mut self, question: &Question) -> Result<String> {
        if let Some(tags) = &self.presets.tags {
            match question.field {
                Field::AddTag => {
                    let answer = if self.next_tag < tags.len() { YES } else { NO };
                    return Ok(answer.to_string());
                }
                Field::Tag => {
                    let Some(tag) = tags.get(self.next_tag) else {
                        anyhow::bail!("Asked for more tags than were given with --tag");
                    };
                    if let Some(message) = question.validate(tag) {
                        anyhow::bail!("Invalid --tag '{}': {}", tag, message);
                    }
                    self.next_tag += 1;
                    return Ok(tag.clone());
                }
                _ => {}
            }
        }

        if let Some(value) = self.presets.get(question.field) {
            if let Some(message) = question.validate(value) {
                anyhow::bail!("Invalid --{} '{}': {}", question.field.key(), value, message);
            }
            return Ok(value.to_string());
        }

        self.inner.ask(question)
    }
}
