//! CSV export of the budget report
//!
//! Two blocks separated by an empty record: the category table, then the
//! savings goal table.

use std::io::Write;

use super::document::ReportDocument;
use crate::error::{TallyError, TallyResult};

/// Write the report tables as CSV
pub fn export_csv<W: Write>(document: &ReportDocument, writer: W) -> TallyResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer);

    csv_writer.write_record(["Category", "Amount"])?;
    for line in &document.lines {
        csv_writer.write_record([line.label.clone(), format!("{:.2}", line.amount)])?;
    }

    csv_writer.write_record([""])?;
    csv_writer.write_record(["Savings Goal", "Current Savings", "Progress"])?;
    csv_writer.write_record([
        format!("{:.2}", document.savings.goal),
        format!("{:.2}", document.savings.current_savings),
        format!("{:.1}%", document.savings.progress),
    ])?;

    csv_writer
        .flush()
        .map_err(|e| TallyError::Export(e.to_string()))?;
    Ok(())
}
