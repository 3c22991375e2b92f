use crate::utils::error::{ExtractError, Result};
use regex::Regex;

const NAME_PATTERN: &str = r#""([^"]*)""#;
const DATE_PATTERN: &str = r"\b[0-9]{2}\.[0-9]{2}\.[0-9]{4}\b";
const RADIUS_PATTERN: &str = r"\b(?:[0-9]+\.[0-9]+|[0-9]+\b)";

/// Pulls the three record fields out of a free-form line.
///
/// Field order within a line is not fixed, so each field is found by its own
/// scan over the whole line.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    name: Regex,
    date: Regex,
    radius: Regex,
}

impl FieldExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            name: Regex::new(NAME_PATTERN)?,
            date: Regex::new(DATE_PATTERN)?,
            radius: Regex::new(RADIUS_PATTERN)?,
        })
    }

    /// Contents of the first `"..."` on the line, without the quotes.
    pub fn extract_name(&self, line: &str) -> std::result::Result<String, ExtractError> {
        self.name
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or(ExtractError::NameNotFound)
    }

    /// First `DD.MM.YYYY` token. The digits are not checked against a calendar.
    pub fn extract_date(&self, line: &str) -> std::result::Result<String, ExtractError> {
        self.date
            .find(line)
            .map(|m| m.as_str().to_string())
            .ok_or(ExtractError::InvalidDate)
    }

    /// Last integer or decimal literal on the line.
    pub fn extract_radius(&self, line: &str) -> std::result::Result<f64, ExtractError> {
        let text = self
            .radius
            .find_iter(line)
            .last()
            .map(|m| m.as_str())
            .ok_or(ExtractError::RadiusNotFound)?;

        text.parse::<f64>().map_err(|_| ExtractError::MalformedRadius {
            text: text.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> FieldExtractor {
        FieldExtractor::new().unwrap()
    }

    #[test]
    fn test_well_formed_line_recovers_all_fields() {
        let ex = extractor();
        let line = r#""Mercury" 01.01.2020 4879.0"#;
        assert_eq!(ex.extract_name(line).unwrap(), "Mercury");
        assert_eq!(ex.extract_date(line).unwrap(), "01.01.2020");
        assert_eq!(ex.extract_radius(line).unwrap(), 4879.0);
    }

    #[test]
    fn test_fields_in_any_order_last_number_wins_even_from_date() {
        let ex = extractor();
        let line = r#"radius 6779.5 opened 15.03.2021 for "Mars""#;
        assert_eq!(ex.extract_name(line).unwrap(), "Mars");
        assert_eq!(ex.extract_date(line).unwrap(), "15.03.2021");
        assert_eq!(ex.extract_radius(line).unwrap(), 2021.0);
    }

    #[test]
    fn test_radius_takes_last_numeric_token() {
        let ex = extractor();
        let line = r#""Mercury" 01.01.2020 1 4879.0"#;
        assert_eq!(ex.extract_radius(line).unwrap(), 4879.0);
    }

    #[test]
    fn test_radius_accepts_integers() {
        let ex = extractor();
        assert_eq!(ex.extract_radius(r#""Earth" 02.02.2002 12742"#).unwrap(), 12742.0);
    }

    #[test]
    fn test_name_is_first_quoted_substring() {
        let ex = extractor();
        let line = r#""Jupiter" aka "Zeus" 05.05.2005 139820.0"#;
        assert_eq!(ex.extract_name(line).unwrap(), "Jupiter");
    }

    #[test]
    fn test_empty_quotes_give_empty_name() {
        let ex = extractor();
        assert_eq!(ex.extract_name(r#""" 01.01.2020 1.0"#).unwrap(), "");
    }

    #[test]
    fn test_missing_name() {
        let ex = extractor();
        assert_eq!(
            ex.extract_name("Mercury 01.01.2020 4879.0"),
            Err(ExtractError::NameNotFound)
        );
        // an unterminated quote is not a quoted substring
        assert_eq!(
            ex.extract_name(r#""Mercury 01.01.2020"#),
            Err(ExtractError::NameNotFound)
        );
    }

    #[test]
    fn test_date_requires_two_digit_day() {
        let ex = extractor();
        assert_eq!(
            ex.extract_date(r#""Venus" 1.01.2019 12104.0"#),
            Err(ExtractError::InvalidDate)
        );
        assert_eq!(
            ex.extract_date(r#""Venus" 01.01.20190 12104.0"#),
            Err(ExtractError::InvalidDate)
        );
    }

    #[test]
    fn test_date_is_not_calendar_checked() {
        let ex = extractor();
        assert_eq!(
            ex.extract_date(r#""Nowhere" 99.99.9999 1.0"#).unwrap(),
            "99.99.9999"
        );
    }

    #[test]
    fn test_first_date_wins() {
        let ex = extractor();
        let line = r#""Saturn" 10.10.2010 then 11.11.2011 116460.0"#;
        assert_eq!(ex.extract_date(line).unwrap(), "10.10.2010");
    }

    #[test]
    fn test_decimal_radius_keeps_fraction_before_unit_suffix() {
        let ex = extractor();
        assert_eq!(
            ex.extract_radius(r#""Venus" 01.01.2019 12104.5km"#).unwrap(),
            12104.5
        );
        assert_eq!(
            ex.extract_radius(r#""Venus" 01.01.2019 r=12104.5"#).unwrap(),
            12104.5
        );
        // integers still need a trailing boundary
        assert_eq!(
            ex.extract_radius(r#""Venus" 01.01.2019 12104 km2x"#).unwrap(),
            12104.0
        );
    }

    #[test]
    fn test_missing_radius() {
        let ex = extractor();
        assert_eq!(
            ex.extract_radius(r#""Pluto" no numbers"#),
            Err(ExtractError::RadiusNotFound)
        );
    }
}
