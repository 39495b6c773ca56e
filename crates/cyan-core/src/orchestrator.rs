//! Template prompt flow and descriptor assembly
//!
//! Asks for the template metadata in a fixed order, then turns the answers
//! into a [`Descriptor`] that template-expands the profile's config file and
//! copies everything else.

use crate::descriptor::{Descriptor, FileRule, GlobType, Processor, ProcessorConfig};
use crate::profile::TemplateProfile;
use crate::prompt::{Field, Prompter, Question, NO, YES};
use crate::validate::Rule;
use anyhow::{Context, Result};
use std::collections::BTreeMap;

/// Everything collected from one run of the prompts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub username: String,
    pub name: String,
    pub description: String,
    pub email: String,
    /// In the order they were entered
    pub tags: Vec<String>,
    pub project: String,
    pub source: String,
}

fn username_question() -> Question {
    Question::text(Field::Username, "CyanPrint username")
        .description("You can find it in your profile in https://cyanprint.dev")
        .rule(Rule::identifier("Username"))
}

fn name_question() -> Question {
    Question::text(Field::Name, "Template name")
        .description("Unique name under your account")
        .rule(Rule::identifier("Template"))
}

fn description_question() -> Question {
    Question::text(Field::Description, "Template description")
        .description("Short description of your template")
}

fn email_question() -> Question {
    Question::text(Field::Email, "Email")
        .description("Your email")
        .rule(Rule::Email)
}

fn add_tag_question() -> Question {
    Question::select(Field::AddTag, "Add a tag?", [YES, NO])
}

fn tag_question() -> Question {
    Question::text(Field::Tag, "Tag to add").rule(Rule::identifier("Tag"))
}

fn project_question() -> Question {
    Question::text(Field::Project, "Project URL")
        .description("Valid URL to this project's site")
        .rule(Rule::Url)
}

fn source_question() -> Question {
    Question::text(Field::Source, "Source URL")
        .description("Valid URL to this project source code")
        .rule(Rule::Url)
}

/// Ask every question in order and gather the answers
pub fn collect_answers<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Answers> {
    let username = prompter.ask(&username_question())?;
    let name = prompter.ask(&name_question())?;
    let description = prompter.ask(&description_question())?;
    let email = prompter.ask(&email_question())?;
    let tags = collect_tags(prompter)?;
    let project = prompter.ask(&project_question())?;
    let source = prompter.ask(&source_question())?;

    Ok(Answers {
        username,
        name,
        description,
        email,
        tags,
        project,
        source,
    })
}

/// Keep asking for tags until the user declines
fn collect_tags<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Vec<String>> {
    let mut tags = Vec::new();
    while prompter.ask(&add_tag_question())? == YES {
        tags.push(prompter.ask(&tag_question())?);
    }
    Ok(tags)
}

impl Answers {
    /// Template variables, all as strings; tags become a JSON array string
    pub fn to_vars(&self) -> Result<BTreeMap<String, String>> {
        let tags = serde_json::to_string(&self.tags).context("Failed to serialize tags")?;

        Ok(BTreeMap::from([
            ("username".to_string(), self.username.clone()),
            ("name".to_string(), self.name.clone()),
            ("desc".to_string(), self.description.clone()),
            ("project".to_string(), self.project.clone()),
            ("source".to_string(), self.source.clone()),
            ("email".to_string(), self.email.clone()),
            ("tags".to_string(), tags),
        ]))
    }

    /// Build the descriptor for the render host
    pub fn to_descriptor<T: TemplateProfile + ?Sized>(&self, profile: &T) -> Result<Descriptor> {
        let root = profile.template_root().to_string();
        let config_file = profile.config_file().to_string();

        let files = vec![
            FileRule {
                kind: GlobType::Template,
                exclude: Vec::new(),
                glob: config_file.clone(),
                root: root.clone(),
            },
            FileRule {
                kind: GlobType::Copy,
                exclude: vec![config_file],
                glob: profile.copy_glob().to_string(),
                root,
            },
        ];

        Ok(Descriptor {
            processors: vec![Processor {
                name: profile.processor_name().to_string(),
                files,
                config: ProcessorConfig {
                    vars: self.to_vars()?,
                },
            }],
            plugins: Vec::new(),
        })
    }
}

/// Run the full prompt flow and return the descriptor
pub fn run<T, P>(profile: &T, prompter: &mut P) -> Result<Descriptor>
where
    T: TemplateProfile + ?Sized,
    P: Prompter + ?Sized,
{
    collect_answers(prompter)?.to_descriptor(profile)
}
