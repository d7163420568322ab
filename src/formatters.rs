//! `Formatter` impls for the panel's validated text fields.

use std::fmt;

use druid::text::format::{Formatter, Validation, ValidationError};
use druid::text::Selection;
use norad::GlyphName;

use crate::data::{CodepointList, ParseCodepointError};

/// Formats and validates a glyph's name.
///
/// Edits commit only for names that are non-empty and free of whitespace;
/// leading and trailing whitespace is stripped rather than rejected.
pub struct GlyphNameFormatter;

/// Formats a codepoint list as space-separated hex, and restricts typing
/// to hex digits and spaces while editing.
pub struct CodepointFormatter;

impl Formatter<GlyphName> for GlyphNameFormatter {
    fn format(&self, value: &GlyphName) -> String {
        value.to_string()
    }

    fn validate_partial_input(&self, _input: &str, _sel: &Selection) -> Validation {
        Validation::success()
    }

    fn value(&self, input: &str) -> Result<GlyphName, ValidationError> {
        match validate_name(input) {
            Ok(name) => Ok(name.into()),
            Err(e) => Err(ValidationError::new(e)),
        }
    }
}

fn validate_name(input: &str) -> Result<&str, NameError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(NameError::Empty)
    } else if trimmed.chars().any(char::is_whitespace) {
        Err(NameError::ContainsWhitespace)
    } else {
        Ok(trimmed)
    }
}

impl Formatter<CodepointList> for CodepointFormatter {
    fn format(&self, value: &CodepointList) -> String {
        value.to_string()
    }

    fn validate_partial_input(&self, input: &str, _sel: &Selection) -> Validation {
        if input.chars().all(|c| c.is_ascii_hexdigit() || c == ' ') {
            Validation::success()
        } else {
            Validation::failure(ParseCodepointError::BadHex(input.to_string()))
        }
    }

    fn value(&self, input: &str) -> Result<CodepointList, ValidationError> {
        input
            .parse::<CodepointList>()
            .map_err(ValidationError::new)
    }
}

/// Why a glyph name was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum NameError {
    Empty,
    ContainsWhitespace,
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NameError::Empty => write!(f, "glyph names cannot be empty"),
            NameError::ContainsWhitespace => {
                write!(f, "glyph names cannot contain whitespace")
            }
        }
    }
}

impl std::error::Error for NameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_validation() {
        assert_eq!(validate_name(" a.sc "), Ok("a.sc"));
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name("two words").is_err());
    }
}
