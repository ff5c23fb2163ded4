//! YAML export of the budget report

use std::io::Write;

use super::document::ReportDocument;
use crate::error::{TallyError, TallyResult};

/// Write the report as YAML with a short comment header
pub fn export_yaml<W: Write>(document: &ReportDocument, writer: &mut W) -> TallyResult<()> {
    let export_err = |e: std::io::Error| TallyError::Export(e.to_string());

    writeln!(writer, "# {}", document.title).map_err(export_err)?;
    writeln!(writer, "# Generated: {}", document.generated_on).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", document.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, document).map_err(|e| TallyError::Yaml(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Period, RawRecord, SavingsGoal};
    use crate::services::{aggregate, present};
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export() {
        let presented = present(
            &aggregate(&[RawRecord::income("800"), RawRecord::expense("salud", "100")]),
            Period::BiWeekly,
            SavingsGoal::new(Money::from_units(700)).unwrap(),
        );
        let doc = ReportDocument::new(&presented, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());

        let mut buffer = Vec::new();
        export_yaml(&doc, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# Personal Budget Report"));
        assert!(text.contains("period: biweekly"));
        assert!(text.contains("progress: 50.0"));

        let body: ReportDocument = serde_yaml::from_str(&text).unwrap();
        assert_eq!(body.line("Health"), Some(50.0));
    }
}
