//! Collected form values.

use std::collections::BTreeMap;

use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::field::{FieldId, FieldState};

/// Values collected from a valid form, plus the mean of the three ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct Submission {
    /// Trimmed value of every field, keyed by field id.
    values: BTreeMap<FieldId, String>,
    /// Rating mean rounded to one decimal place.
    average: f64,
}

impl Submission {
    /// Collects a submission from validated field states.
    ///
    /// Returns `None` if any field is invalid or a rating does not parse.
    #[instrument(skip(fields))]
    pub fn collect(fields: &[FieldState]) -> Option<Self> {
        if fields.len() != FieldId::ALL.len() || fields.iter().any(|f| !f.is_valid()) {
            debug!("Refusing to collect an invalid form");
            return None;
        }

        let values: BTreeMap<FieldId, String> = FieldId::ALL
            .iter()
            .map(|&id| (id, fields[id.index()].value().to_string()))
            .collect();

        let mut sum = 0.0;
        for id in FieldId::RATINGS {
            sum += values.get(&id)?.parse::<f64>().ok()?;
        }
        let average = round_one_decimal(sum / FieldId::RATINGS.len() as f64);

        Some(Self { values, average })
    }

    /// Value collected for a field.
    pub fn value(&self, id: FieldId) -> &str {
        self.values.get(&id).map(String::as_str).unwrap_or_default()
    }

    /// Rating mean formatted with one decimal place.
    pub fn average_display(&self) -> String {
        format!("{:.1}", self.average)
    }

    /// Summary block lines, in the order they are displayed.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = [
            FieldId::FirstName,
            FieldId::LastName,
            FieldId::Email,
            FieldId::Phone,
            FieldId::Address,
        ]
        .iter()
        .map(|&id| format!("{}: {}", id.label(), self.value(id)))
        .collect();

        lines.push(format!(
            "Ratings: {}, {}, {}",
            self.value(FieldId::Rating1),
            self.value(FieldId::Rating2),
            self.value(FieldId::Rating3)
        ));
        lines.push(format!(
            "{} {}: {}",
            self.value(FieldId::FirstName),
            self.value(FieldId::LastName),
            self.average_display()
        ));
        lines
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding() {
        assert_eq!(round_one_decimal(20.0 / 3.0), 6.7);
        assert_eq!(round_one_decimal(5.0), 5.0);
        assert_eq!(round_one_decimal(1.04), 1.0);
    }
}
