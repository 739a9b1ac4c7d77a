use async_trait::async_trait;

use crate::application::ports::{FileParser, FileParserError};
use crate::domain::{CellValue, FileContent};

/// Reads comma-separated records without a header row. Rows may differ in length.
///
/// Blank lines are skipped rather than reported as empty rows; a quoted
/// field may span lines.
#[derive(Default)]
pub struct CsvParser;

impl CsvParser {
    pub fn new() -> Self {
        Self
    }

    fn read_rows(data: &[u8]) -> Result<Vec<Vec<CellValue>>, FileParserError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(data);

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| match e.kind() {
                csv::ErrorKind::Utf8 { .. } => FileParserError::InvalidEncoding(e.to_string()),
                _ => FileParserError::Malformed(e.to_string()),
            })?;
            rows.push(record.iter().map(CellValue::from).collect());
        }

        Ok(rows)
    }
}

#[async_trait]
impl FileParser for CsvParser {
    async fn parse(&self, data: &[u8]) -> Result<FileContent, FileParserError> {
        let rows = Self::read_rows(data)?;
        tracing::debug!(rows = rows.len(), "CSV parsed");
        Ok(FileContent::Rows(rows))
    }
}
