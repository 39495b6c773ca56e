//! Reference checks for `username/template[:version]` strings
//!
//! Not asked for by the template prompts; exposed for callers that accept
//! a template reference (the `check reference` CLI command uses it).

use super::identifier::check_identifier;
use super::FieldError;
use regex::Regex;
use std::sync::LazyLock;

/// Optional sign followed by digits; leading zeroes allowed
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+$").unwrap());

/// Check a template reference
///
/// The version suffix must be an integer >= 0. Zero is accepted even though
/// the message reads "positive integer".
pub fn check_reference(input: &str) -> Result<(), FieldError> {
    let mut full_ref = input;

    if input.contains(':') {
        let mut pieces = input.split(':');
        let (Some(head), Some(version), None) = (pieces.next(), pieces.next(), pieces.next())
        else {
            return Err(FieldError::ReferenceColons);
        };
        if !is_non_negative_int(version) {
            return Err(FieldError::ReferenceVersion);
        }
        full_ref = head;
    }

    let parts: Vec<&str> = full_ref.split('/').collect();
    let [username, template] = parts.as_slice() else {
        return Err(FieldError::ReferenceFormat);
    };

    check_identifier("Reference username", username)?;
    check_identifier("Reference template", template)?;
    Ok(())
}

fn is_non_negative_int(version: &str) -> bool {
    if !VERSION_RE.is_match(version) {
        return false;
    }
    match version.strip_prefix('-') {
        // "-0" and "-000" still compare equal to zero
        Some(digits) => digits.bytes().all(|b| b == b'0'),
        None => true,
    }
}
