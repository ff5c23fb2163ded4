//! Plain-text rendering of the budget report

use std::io::Write;

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use super::document::ReportDocument;
use crate::display::{format_amount, separator};
use crate::error::{TallyError, TallyResult};

/// Render the report as printable text
pub fn render_text(document: &ReportDocument, symbol: &str) -> String {
    let mut lines_table = Builder::default();
    lines_table.push_record(["Category", "Amount"]);
    for line in &document.lines {
        lines_table.push_record([line.label.clone(), format_amount(line.amount, symbol)]);
    }
    let mut lines_table = lines_table.build();
    lines_table
        .with(Style::ascii())
        .modify(Columns::new(1..), Alignment::right());

    let mut goal_table = Builder::default();
    goal_table.push_record(["Savings Goal", "Current Savings", "Progress"]);
    goal_table.push_record([
        format_amount(document.savings.goal, symbol),
        format_amount(document.savings.current_savings, symbol),
        format!("{:.1}%", document.savings.progress),
    ]);
    let mut goal_table = goal_table.build();
    goal_table.with(Style::ascii());

    let rule = separator(document.title.chars().count());
    let mut out = String::new();
    out.push_str(&document.title);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&document.subtitle);
    out.push('\n');
    out.push_str(&format!("Generated: {}\n", document.generated_on));
    out.push_str(&format!("Period:    {}\n\n", document.period.label()));
    out.push_str(&lines_table.to_string());
    out.push_str("\n\n");
    out.push_str(&goal_table.to_string());
    out.push_str("\n\n");
    out.push_str(&document.comment);
    out.push('\n');
    out
}

/// Write the plain-text report
pub fn export_text<W: Write>(
    document: &ReportDocument,
    writer: &mut W,
    symbol: &str,
) -> TallyResult<()> {
    writer
        .write_all(render_text(document, symbol).as_bytes())
        .map_err(|e| TallyError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Period, RawRecord, SavingsGoal};
    use crate::services::{aggregate, present};
    use chrono::NaiveDate;

    #[test]
    fn test_text_report_sections() {
        let presented = present(
            &aggregate(&[
                RawRecord::income("1000"),
                RawRecord::expense("food", "200"),
                RawRecord::expense("water", "50"),
                RawRecord::expense("movies", "30"),
            ]),
            Period::Weekly,
            SavingsGoal::new(Money::from_units(500)).unwrap(),
        );
        let doc = ReportDocument::new(&presented, NaiveDate::from_ymd_opt(2025, 2, 14).unwrap());

        let mut buffer = Vec::new();
        export_text(&doc, &mut buffer, "S/ ").unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("Personal Budget Report\n"));
        assert!(text.contains("Detailed summary generated by tally"));
        assert!(text.contains("Generated: 2025-02-14"));
        assert!(text.contains("Period:    Weekly"));
        assert!(text.contains("S/ 250.00"));
        assert!(text.contains("S/ 180.00"));
        assert!(text.contains("36.0%"));
        assert!(text.trim_end().ends_with("Good work! Your balance is positive."));
    }

    #[test]
    fn test_negative_balance_keeps_sign() {
        let presented = present(
            &aggregate(&[RawRecord::expense("luz", "80")]),
            Period::Monthly,
            SavingsGoal::none(),
        );
        let doc = ReportDocument::new(&presented, NaiveDate::from_ymd_opt(2025, 2, 14).unwrap());
        let text = render_text(&doc, "$");

        assert!(text.contains("-$80.00"));
        assert!(text.contains("Careful, you are spending more than you earn."));
    }
}
