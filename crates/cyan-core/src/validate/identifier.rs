//! Identifier checks for usernames, template names and tags

use super::FieldError;
use regex::Regex;
use std::sync::LazyLock;

/// Longest identifier accepted, in UTF-16 code units
pub const MAX_IDENTIFIER_LEN: usize = 256;

/// Starts with a letter, single dashes between lowercase alphanumeric runs
static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z](-?[a-z0-9]+)*$").unwrap());

/// Check an identifier; `label` names the field in the error message
///
/// Length is measured in UTF-16 code units, so characters outside the basic
/// multilingual plane count twice.
pub fn check_identifier(label: &str, input: &str) -> Result<(), FieldError> {
    let len = input.encode_utf16().count();
    if len < 1 || len > MAX_IDENTIFIER_LEN {
        return Err(FieldError::Length(label.to_string()));
    }
    if !IDENTIFIER_RE.is_match(input) {
        return Err(FieldError::Pattern(label.to_string()));
    }
    Ok(())
}
