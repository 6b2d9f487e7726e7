//! Field identifiers and per-field state.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of tracked inputs on the form.
pub const FIELD_COUNT: usize = 8;

/// One of the tracked form inputs.
///
/// Serialized names match the input ids of the page (`fname`, `q1`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
)]
pub enum FieldId {
    /// First name.
    #[serde(rename = "fname")]
    #[strum(serialize = "fname")]
    FirstName,
    /// Last name.
    #[serde(rename = "lname")]
    #[strum(serialize = "lname")]
    LastName,
    /// Email address.
    #[serde(rename = "email")]
    #[strum(serialize = "email")]
    Email,
    /// Phone number, reformatted as it is typed.
    #[serde(rename = "phone")]
    #[strum(serialize = "phone")]
    Phone,
    /// Postal address.
    #[serde(rename = "address")]
    #[strum(serialize = "address")]
    Address,
    /// First rating (1-10).
    #[serde(rename = "q1")]
    #[strum(serialize = "q1")]
    Rating1,
    /// Second rating (1-10).
    #[serde(rename = "q2")]
    #[strum(serialize = "q2")]
    Rating2,
    /// Third rating (1-10).
    #[serde(rename = "q3")]
    #[strum(serialize = "q3")]
    Rating3,
}

/// Which rule family applies to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Letters only.
    Name,
    /// `something@host.tld` shape.
    Email,
    /// Non-empty, formatted on input.
    Phone,
    /// Non-empty free text.
    Address,
    /// Number in 1..=10.
    Rating,
}

impl FieldId {
    /// All fields in form order.
    pub const ALL: [FieldId; FIELD_COUNT] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Address,
        FieldId::Rating1,
        FieldId::Rating2,
        FieldId::Rating3,
    ];

    /// The three rating fields.
    pub const RATINGS: [FieldId; 3] = [FieldId::Rating1, FieldId::Rating2, FieldId::Rating3];

    /// Position of the field in form order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Looks a field up by its form-order position.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Rule family for this field.
    pub fn kind(self) -> FieldKind {
        match self {
            FieldId::FirstName | FieldId::LastName => FieldKind::Name,
            FieldId::Email => FieldKind::Email,
            FieldId::Phone => FieldKind::Phone,
            FieldId::Address => FieldKind::Address,
            FieldId::Rating1 | FieldId::Rating2 | FieldId::Rating3 => FieldKind::Rating,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::FirstName => "First name",
            FieldId::LastName => "Last name",
            FieldId::Email => "Email",
            FieldId::Phone => "Phone number",
            FieldId::Address => "Address",
            FieldId::Rating1 => "Rating 1",
            FieldId::Rating2 => "Rating 2",
            FieldId::Rating3 => "Rating 3",
        }
    }
}

/// Validation state of a single field.
///
/// Recomputed on every input event and submit attempt; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    value: String,
    valid: bool,
    error: String,
}

impl FieldState {
    /// State for a value that passed every rule.
    pub fn passed(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            valid: true,
            error: String::new(),
        }
    }

    /// State for a value that failed with the given inline message.
    pub fn failed(value: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            valid: false,
            error: error.into(),
        }
    }

    /// The trimmed value that was validated.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the value passed validation.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Inline error message, empty when valid.
    pub fn error(&self) -> &str {
        &self.error
    }
}
