use crate::core::extract::FieldExtractor;
use crate::domain::model::{BuildOutcome, LineRejection, Record};
use crate::utils::error::{ExtractError, Result};

pub struct RecordBuilder {
    extractor: FieldExtractor,
}

impl RecordBuilder {
    pub fn new(extractor: FieldExtractor) -> Self {
        Self { extractor }
    }

    pub fn with_default_patterns() -> Result<Self> {
        Ok(Self::new(FieldExtractor::new()?))
    }

    /// All three fields or nothing.
    pub fn build_line(&self, line: &str) -> std::result::Result<Record, ExtractError> {
        let name = self.extractor.extract_name(line)?;
        let date = self.extractor.extract_date(line)?;
        let radius = self.extractor.extract_radius(line)?;
        Ok(Record::new(name, date, radius))
    }

    /// Consumes every line. Bad lines become rejections; read errors are returned.
    pub fn build_all<I>(&self, lines: I) -> Result<BuildOutcome>
    where
        I: IntoIterator<Item = Result<String>>,
    {
        let mut outcome = BuildOutcome::default();

        for (index, line) in lines.into_iter().enumerate() {
            let line = line?;
            match self.build_line(&line) {
                Ok(record) => {
                    tracing::trace!("Line {}: built record '{}'", index + 1, record.name());
                    outcome.records.push(record);
                }
                Err(reason) => {
                    tracing::debug!("Line {} rejected: {}", index + 1, reason);
                    outcome.rejections.push(LineRejection {
                        line_number: index + 1,
                        line,
                        reason,
                    });
                }
            }
        }

        tracing::debug!(
            "Built {} records, rejected {} lines",
            outcome.records.len(),
            outcome.rejections.len()
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CatalogError;

    fn builder() -> RecordBuilder {
        RecordBuilder::with_default_patterns().unwrap()
    }

    fn ok_lines(lines: &[&str]) -> Vec<Result<String>> {
        lines.iter().map(|l| Ok(l.to_string())).collect()
    }

    #[test]
    fn test_build_line() {
        let record = builder()
            .build_line(r#""Venus" 01.01.2019 12104.0"#)
            .unwrap();
        assert_eq!(record, Record::new("Venus", "01.01.2019", 12104.0));
    }

    #[test]
    fn test_first_failing_field_is_reported() {
        let b = builder();
        // no name and no date: name is checked first
        assert_eq!(
            b.build_line("garbage no data here"),
            Err(ExtractError::NameNotFound)
        );
        assert_eq!(
            b.build_line(r#""Mars" 6779.0"#),
            Err(ExtractError::InvalidDate)
        );
    }

    #[test]
    fn test_build_all_skips_bad_lines_and_continues() {
        let outcome = builder()
            .build_all(ok_lines(&[
                r#""Mercury" 01.01.2020 4879.0"#,
                "garbage no data here",
                r#""Venus" 01.01.2019 12104.0"#,
                r#"Earth 01.01.2018 12742.0"#,
            ]))
            .unwrap();

        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[0].name(), "Mercury");
        assert_eq!(outcome.records[1].name(), "Venus");

        assert_eq!(outcome.rejections.len(), 2);
        assert_eq!(outcome.rejections[0].line_number, 2);
        assert_eq!(outcome.rejections[0].line, "garbage no data here");
        assert_eq!(outcome.rejections[1].line_number, 4);
        assert_eq!(outcome.rejections[1].reason, ExtractError::NameNotFound);
        assert_eq!(outcome.lines_read(), 4);
    }

    #[test]
    fn test_build_all_empty_input() {
        let outcome = builder().build_all(Vec::new()).unwrap();
        assert!(outcome.records.is_empty());
        assert!(outcome.rejections.is_empty());
    }

    #[test]
    fn test_build_all_propagates_read_errors() {
        let lines = vec![
            Ok(r#""Mercury" 01.01.2020 4879.0"#.to_string()),
            Err(CatalogError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk gone",
            ))),
        ];
        assert!(matches!(
            builder().build_all(lines),
            Err(CatalogError::Io(_))
        ));
    }
}
