//! Validation rules for form fields.
//!
//! Each rule is a unit struct with a `check` function over an already
//! trimmed value. [`FieldRules`] composes them per [`FieldKind`].

use tracing::instrument;

use crate::field::{FieldId, FieldKind};

/// Accented letters accepted in names, on top of ASCII `A-Z`/`a-z`.
pub const ACCENTED_LETTERS: &str = "ĄČĘĖĮŠŲŪŽąčęėįšųūž";

/// Why a field failed validation.
///
/// The display text is the inline message shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FieldError {
    /// The trimmed value is empty.
    #[display("This field is required")]
    Required,

    /// A name contains something other than letters.
    #[display("Only letters are allowed")]
    LettersOnly,

    /// The value is not shaped like an email address.
    #[display("Invalid email format")]
    InvalidEmail,

    /// A rating is not a number between 1 and 10.
    #[display("Enter a value 1–10")]
    OutOfRange,
}

impl std::error::Error for FieldError {}

/// Rule: the value must not be empty.
pub struct NotEmpty;

impl NotEmpty {
    /// Checks the rule.
    pub fn check(value: &str) -> Result<(), FieldError> {
        if value.is_empty() {
            Err(FieldError::Required)
        } else {
            Ok(())
        }
    }
}

/// Rule: only ASCII letters and [`ACCENTED_LETTERS`].
pub struct LettersOnly;

impl LettersOnly {
    /// Checks the rule.
    pub fn check(value: &str) -> Result<(), FieldError> {
        let letters = value
            .chars()
            .all(|c| c.is_ascii_alphabetic() || ACCENTED_LETTERS.contains(c));
        if letters {
            Ok(())
        } else {
            Err(FieldError::LettersOnly)
        }
    }
}

/// Rule: `non-space@non-space.non-space`.
///
/// Every character must be non-whitespace, and some `@` must have at least one
/// character before it and be followed by at least one character, a `.`, and
/// at least one more character.
pub struct EmailShape;

impl EmailShape {
    /// Checks the rule.
    pub fn check(value: &str) -> Result<(), FieldError> {
        let chars: Vec<char> = value.chars().collect();
        if chars.iter().any(|c| c.is_whitespace()) {
            return Err(FieldError::InvalidEmail);
        }

        let len = chars.len();
        let shaped = chars.iter().enumerate().any(|(at, &c)| {
            c == '@'
                && at >= 1
                && len >= 2
                && (at + 2..=len - 2).any(|dot| chars[dot] == '.')
        });

        if shaped {
            Ok(())
        } else {
            Err(FieldError::InvalidEmail)
        }
    }
}

/// Rule: a number within `1..=10`, fractions allowed.
pub struct RatingRange;

impl RatingRange {
    /// Lowest accepted rating.
    pub const MIN: f64 = 1.0;
    /// Highest accepted rating.
    pub const MAX: f64 = 10.0;

    /// Checks the rule. Anything that does not parse as a number is out of range.
    pub fn check(value: &str) -> Result<(), FieldError> {
        match value.parse::<f64>() {
            Ok(n) if (Self::MIN..=Self::MAX).contains(&n) => Ok(()),
            _ => Err(FieldError::OutOfRange),
        }
    }
}

/// Composite rule set: the checks that apply to a given field.
pub struct FieldRules;

impl FieldRules {
    /// Validates a trimmed value for the given field.
    #[instrument]
    pub fn check(id: FieldId, value: &str) -> Result<(), FieldError> {
        NotEmpty::check(value)?;
        match id.kind() {
            FieldKind::Name => LettersOnly::check(value),
            FieldKind::Email => EmailShape::check(value),
            FieldKind::Rating => RatingRange::check(value),
            FieldKind::Phone | FieldKind::Address => Ok(()),
        }
    }
}
