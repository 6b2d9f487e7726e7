//! Phone number reformatting.

use tracing::{instrument, trace};

/// Phone layout: `+<country code> <3 digits> <rest>`.
///
/// The national part is capped at `national_digits` digits. The default is
/// the Lithuanian layout, `+370 612 34567`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneFormat {
    country_code: String,
    national_digits: usize,
}

impl Default for PhoneFormat {
    fn default() -> Self {
        Self {
            country_code: "370".to_string(),
            national_digits: 8,
        }
    }
}

impl PhoneFormat {
    /// Size of the first national group (trunk digit plus area code).
    pub const LEAD_GROUP: usize = 3;

    /// Creates a layout for the given country code.
    ///
    /// Non-digit characters in `country_code` are dropped.
    pub fn new(country_code: impl AsRef<str>, national_digits: usize) -> Self {
        Self {
            country_code: country_code
                .as_ref()
                .chars()
                .filter(char::is_ascii_digit)
                .collect(),
            national_digits,
        }
    }

    /// Country calling code digits, without the plus.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Maximum number of national digits kept.
    pub fn national_digits(&self) -> usize {
        self.national_digits
    }

    /// Extracts the national digits from anything the user typed.
    ///
    /// Non-digits are stripped. A leading country code is removed; otherwise a
    /// single leading trunk zero is removed. The result is truncated.
    pub fn national(&self, raw: &str) -> String {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

        let national = if let Some(rest) = digits.strip_prefix(self.country_code.as_str()) {
            rest
        } else if let Some(rest) = digits.strip_prefix('0') {
            rest
        } else {
            digits.as_str()
        };

        national.chars().take(self.national_digits).collect()
    }

    /// Reformats raw input as `+CC NNN NNNNN`.
    ///
    /// Applying the format to its own output returns the same string.
    #[instrument(skip(self))]
    pub fn format(&self, raw: &str) -> String {
        let national = self.national(raw);
        let mut formatted = format!("+{}", self.country_code);

        let split = national.len().min(Self::LEAD_GROUP);
        let (lead, rest) = national.split_at(split);
        if !lead.is_empty() {
            formatted.push(' ');
            formatted.push_str(lead);
        }
        if !rest.is_empty() {
            formatted.push(' ');
            formatted.push_str(rest);
        }

        trace!(%formatted, "Phone reformatted");
        formatted
    }

    /// Formats the input with its last national digit removed.
    ///
    /// Erasing characters from the formatted text would let the country code
    /// leak back into the national part, so editing works on digits.
    pub fn erase_last_digit(&self, formatted: &str) -> String {
        let mut national = self.national(formatted);
        national.pop();
        self.format(&format!("{}{}", self.country_code, national))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trunk_zero_is_replaced_by_country_code() {
        let phone = PhoneFormat::default();
        assert_eq!(phone.format("061234567"), "+370 612 34567");
        assert_eq!(phone.format("(0-612) 34 567"), "+370 612 34567");
    }

    #[test]
    fn test_international_number() {
        let phone = PhoneFormat::default();
        assert_eq!(phone.format("+370 612 34567"), "+370 612 34567");
        assert_eq!(phone.format("37061234567"), "+370 612 34567");
    }

    #[test]
    fn test_bare_national_number_gets_country_code() {
        let phone = PhoneFormat::default();
        assert_eq!(phone.format("61234567"), "+370 612 34567");
    }

    #[test]
    fn test_truncates_extra_digits() {
        let phone = PhoneFormat::default();
        assert_eq!(phone.format("+370 612 345678999"), "+370 612 34567");
    }

    #[test]
    fn test_partial_input_has_no_trailing_space() {
        let phone = PhoneFormat::default();
        assert_eq!(phone.format(""), "+370");
        assert_eq!(phone.format("6"), "+370 6");
        assert_eq!(phone.format("612"), "+370 612");
        assert_eq!(phone.format("6123"), "+370 612 3");
    }

    #[test]
    fn test_only_one_trunk_zero_is_removed() {
        let phone = PhoneFormat::default();
        assert_eq!(phone.format("00"), "+370 0");
    }

    #[test]
    fn test_erase_last_digit() {
        let phone = PhoneFormat::default();
        assert_eq!(phone.erase_last_digit("+370 612 3"), "+370 612");
        assert_eq!(phone.erase_last_digit("+370 6"), "+370");
        assert_eq!(phone.erase_last_digit("+370"), "+370");
    }

    #[test]
    fn test_custom_country_code() {
        let phone = PhoneFormat::new("+44", 10);
        assert_eq!(phone.format("07911123456"), "+44 791 1123456");
    }
}
