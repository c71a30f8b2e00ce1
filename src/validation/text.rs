//! Field-level text validators: character-class and regex-syntax checks.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

/// Full-string regex check with a fixed rejection message.
///
/// The whole value must match the pattern; partial matches are rejections.
/// Distinct from [`RegexStringValidator`], which checks that a value *is* a
/// compilable regular expression.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    regex: Regex,
    message: String,
}

impl RegexValidator {
    /// Builds a validator from an already-compiled pattern. Anchor the
    /// pattern (`^...$`) to get whole-string semantics.
    pub fn new(regex: Regex, message: impl Into<String>) -> Self {
        Self {
            regex,
            message: message.into(),
        }
    }

    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        if self.regex.is_match(value) {
            Ok(())
        } else {
            Err(ValidationError::new(self.message.clone()))
        }
    }
}

static NO_CONTROL_CHARS: Lazy<RegexValidator> = Lazy::new(|| {
    let regex =
        Regex::new(r"^[^\x00-\x1f]*$").expect("failed to compile the control character pattern");
    RegexValidator::new(regex, "Please enter a string without control characters.")
});

/// Rejects any string containing a character in the 0x00-0x1f control range.
pub fn validate_no_control_chars(value: &str) -> Result<(), ValidationError> {
    NO_CONTROL_CHARS.validate(value)
}

/// Checks that a value can be compiled as a regular expression.
///
/// Carries no state; any two instances compare equal. Frameworks that diff
/// validator lists to detect schema changes rely on that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegexStringValidator;

impl RegexStringValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validates that `value` compiles in this crate's regex dialect.
    ///
    /// A compilable value containing the literal substring `-*` is still
    /// rejected: an unescaped dash before a star matches zero or more
    /// dashes, which is almost never what the author meant.
    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        if let Err(e) = Regex::new(value) {
            return Err(ValidationError::new(format!(
                "Please enter a valid regular expression. \
                 Got an error when trying to compile this: \"{}\" : \"{}\"",
                value, e
            )));
        }
        if value.contains("-*") {
            return Err(ValidationError::new(
                "Did you really mean that? The regular expression contains \"-*\" \
                 which will match zero or more dashes. Maybe you meant to write \"-.*\"? \
                 If you actually meant \"-*\", you can use \"[-]*\" instead to get past this error.",
            ));
        }
        Ok(())
    }
}
