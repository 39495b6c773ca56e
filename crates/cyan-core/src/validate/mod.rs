//! Field validation rules
//!
//! This module provides:
//! - Identifier checks for usernames, template names and tags
//! - Reference checks for `username/template[:version]` strings
//! - Email and URL shape checks
//!
//! Every check is a pure function returning `Result<(), FieldError>`. The
//! [`Rule`] enum selects one of them per field so a prompt provider can carry
//! the rule alongside the question and re-ask until it passes.

pub mod contact;
pub mod identifier;
pub mod reference;

use thiserror::Error;

pub use contact::{check_email, check_url};
pub use identifier::{check_identifier, MAX_IDENTIFIER_LEN};
pub use reference::check_reference;

/// A single field validation failure, rendered as the message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} must be between 1 and 256 characters")]
    Length(String),

    #[error("{0} can only contain alphanumeric characters and dashes, and cannot end or start with dashes or numbers")]
    Pattern(String),

    #[error("Invalid reference, can only have one colon")]
    ReferenceColons,

    #[error("Invalid reference, version must be a positive integer")]
    ReferenceVersion,

    #[error("Invalid reference, must be in the format username/template or username/template:version")]
    ReferenceFormat,

    #[error("Invalid email")]
    Email,

    #[error("Invalid URL")]
    Url,
}

/// Validation strategy attached to a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Lowercase dash-separated identifier; the label prefixes error messages
    Identifier { label: String },
    /// `username/template` with an optional `:version` suffix
    Reference,
    Email,
    Url,
}

impl Rule {
    /// Identifier rule with the given label (e.g. "Username", "Tag")
    pub fn identifier(label: impl Into<String>) -> Self {
        Rule::Identifier {
            label: label.into(),
        }
    }

    /// Run the rule against an input
    pub fn check(&self, input: &str) -> Result<(), FieldError> {
        match self {
            Rule::Identifier { label } => check_identifier(label, input),
            Rule::Reference => check_reference(input),
            Rule::Email => check_email(input),
            Rule::Url => check_url(input),
        }
    }

    /// Returns `None` when valid, or the message to show the user
    pub fn validate(&self, input: &str) -> Option<String> {
        self.check(input).err().map(|e| e.to_string())
    }
}
