use crate::domain::model::Record;
use crate::utils::error::SortError;
use serde::{Deserialize, Serialize};

/// What to do with a date that is not shaped `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SortPolicy {
    /// Malformed dates sort before every well-formed date.
    #[default]
    Lenient,
    /// Malformed dates abort the sort.
    Strict,
}

/// `DD.MM.YYYY` -> `YYYYMMDD`, by slicing only. `None` if the shape is off.
pub fn sortable_key(date: &str) -> Option<String> {
    let bytes = date.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'.' || bytes[5] != b'.' {
        return None;
    }

    let day = date.get(0..2)?;
    let month = date.get(3..5)?;
    let year = date.get(6..10)?;
    Some(format!("{year}{month}{day}"))
}

/// Stable ascending sort by date. Under [`SortPolicy::Strict`] a malformed
/// date returns an error and leaves `records` untouched.
pub fn sort_by_date(records: &mut [Record], policy: SortPolicy) -> Result<(), SortError> {
    if policy == SortPolicy::Strict {
        if let Some(bad) = records.iter().find(|r| sortable_key(r.date()).is_none()) {
            return Err(SortError::MalformedDate {
                date: bad.date().to_string(),
                name: bad.name().to_string(),
            });
        }
    }

    records.sort_by_cached_key(|r| sortable_key(r.date()).unwrap_or_default());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.name()).collect()
    }

    #[test]
    fn test_sortable_key() {
        assert_eq!(sortable_key("01.02.2020").as_deref(), Some("20200201"));
        assert_eq!(sortable_key("99.99.9999").as_deref(), Some("99999999"));
        assert_eq!(sortable_key("1.02.2020"), None);
        assert_eq!(sortable_key("01-02-2020"), None);
        assert_eq!(sortable_key(""), None);
        assert_eq!(sortable_key("01.02.20201"), None);
    }

    #[test]
    fn test_sort_by_date_chronological() {
        let mut records = vec![
            Record::new("Mercury", "01.01.2020", 4879.0),
            Record::new("Venus", "01.01.2019", 12104.0),
            Record::new("Mars", "31.12.2019", 6779.0),
            Record::new("Earth", "02.01.2019", 12742.0),
        ];
        sort_by_date(&mut records, SortPolicy::Lenient).unwrap();
        assert_eq!(names(&records), vec!["Venus", "Earth", "Mars", "Mercury"]);
    }

    #[test]
    fn test_sort_is_stable_and_idempotent() {
        let mut records = vec![
            Record::new("B", "05.05.2005", 2.0),
            Record::new("A", "01.01.2001", 1.0),
            Record::new("C", "05.05.2005", 3.0),
            Record::new("D", "05.05.2005", 4.0),
        ];
        sort_by_date(&mut records, SortPolicy::Lenient).unwrap();
        assert_eq!(names(&records), vec!["A", "B", "C", "D"]);

        let once = records.clone();
        sort_by_date(&mut records, SortPolicy::Lenient).unwrap();
        assert_eq!(records, once);
    }

    #[test]
    fn test_lenient_puts_malformed_dates_first() {
        let mut records = vec![
            Record::new("Good", "01.01.1990", 1.0),
            Record::new("Bad", "1990", 2.0),
        ];
        sort_by_date(&mut records, SortPolicy::Lenient).unwrap();
        assert_eq!(names(&records), vec!["Bad", "Good"]);
    }

    #[test]
    fn test_strict_rejects_malformed_dates_without_reordering() {
        let mut records = vec![
            Record::new("Later", "01.01.2020", 1.0),
            Record::new("Bad", "2020/01/01", 2.0),
            Record::new("Earlier", "01.01.2000", 3.0),
        ];
        let err = sort_by_date(&mut records, SortPolicy::Strict).unwrap_err();
        assert_eq!(
            err,
            SortError::MalformedDate {
                date: "2020/01/01".to_string(),
                name: "Bad".to_string(),
            }
        );
        assert_eq!(names(&records), vec!["Later", "Bad", "Earlier"]);
    }
}
