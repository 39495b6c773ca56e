//! Charm-style CLI prompts using cliclack

use crate::descriptor::Descriptor;
use crate::orchestrator::{self, Answers};
use crate::profile::TemplateProfile;
use crate::prompt::{PresetAnswers, PresetPrompter, Prompter, Question, QuestionKind};
use anyhow::Result;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Values supplied as flags; these are not asked for
    pub presets: PresetAnswers,

    /// Skip optional questions (description, tags) that have no flag value
    pub yes: bool,
}

/// Prompter backed by the terminal
///
/// cliclack keeps re-asking a text input until the question's rule passes,
/// so `ask` only returns valid answers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClackPrompter;

impl Prompter for ClackPrompter {
    fn ask(&mut self, question: &Question) -> Result<String> {
        match &question.kind {
            QuestionKind::Text => {
                let mut input = cliclack::input(&question.message);
                if let Some(description) = &question.description {
                    input = input.placeholder(description);
                }
                input = match question.rule.clone() {
                    Some(rule) => input.validate(move |value: &String| rule.check(value)),
                    None => input.required(false),
                };

                let answer: String = input.interact()?;
                Ok(answer)
            }
            QuestionKind::Select(options) => {
                let mut select = cliclack::select(&question.message);
                for option in options {
                    select = select.item(option.clone(), option, "");
                }

                let answer: String = select.interact()?;
                Ok(answer)
            }
        }
    }
}

/// Run the template prompts interactively and return the descriptor
pub fn run<T: TemplateProfile + ?Sized>(profile: &T, args: CreateArgs) -> Result<Descriptor> {
    cliclack::intro(profile.display_name())?;

    let mut presets = args.presets;
    if args.yes {
        presets.description.get_or_insert_with(String::new);
        presets.tags.get_or_insert_with(Vec::new);
    }

    let provided = presets.provided();
    if !provided.is_empty() {
        let keys: Vec<&str> = provided.iter().map(|f| f.key()).collect();
        cliclack::log::info(format!("Using flags for: {}", keys.join(", ")))?;
    }

    let mut prompter = PresetPrompter::new(presets, ClackPrompter);
    let answers = orchestrator::collect_answers(&mut prompter)?;

    print_summary(&answers)?;

    let descriptor = answers.to_descriptor(profile)?;
    cliclack::outro(format!(
        "Descriptor ready for {}/{}",
        answers.username, answers.name
    ))?;

    Ok(descriptor)
}

fn print_summary(answers: &Answers) -> Result<()> {
    cliclack::log::success(format!(
        "Template: {}/{} ({})",
        answers.username, answers.name, answers.email
    ))?;

    if answers.description.is_empty() {
        cliclack::log::remark("No description")?;
    }

    if answers.tags.is_empty() {
        cliclack::log::remark("No tags")?;
    } else {
        cliclack::log::info(format!("Tags: {}", answers.tags.join(", ")))?;
    }

    cliclack::log::info(format!("Project: {}", answers.project))?;
    cliclack::log::info(format!("Source: {}", answers.source))?;

    Ok(())
}
