//! JSON export of the budget report

use std::io::Write;

use super::document::ReportDocument;
use crate::error::{TallyError, TallyResult};

/// Write the report as JSON
pub fn export_json<W: Write>(
    document: &ReportDocument,
    writer: &mut W,
    pretty: bool,
) -> TallyResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, document)
    } else {
        serde_json::to_writer(&mut *writer, document)
    }
    .map_err(|e| TallyError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| TallyError::Export(e.to_string()))?;
    Ok(())
}

/// Read a report back from JSON (for verification)
pub fn import_from_json(json_str: &str) -> TallyResult<ReportDocument> {
    serde_json::from_str(json_str).map_err(|e| TallyError::Import(e.to_string()))
}
