use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use calamine::{Data, Reader, Xlsx, open_workbook};

use crate::application::ports::{FileParser, FileParserError};
use crate::domain::{CellValue, FileContent};

/// Largest magnitude at which an `f64` still holds every integer exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Reads the first worksheet of an XLSX workbook.
///
/// The upload is staged to a named temporary file that is removed when the
/// parse finishes, whether or not it succeeded.
#[derive(Default)]
pub struct XlsxParser {
    staging_dir: Option<PathBuf>,
}

impl XlsxParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages uploads under `dir` instead of the system temp directory.
    pub fn with_staging_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            staging_dir: Some(dir.into()),
        }
    }

    fn stage(&self, data: &[u8]) -> Result<tempfile::NamedTempFile, FileParserError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("intake-").suffix(".xlsx");

        let mut staged = match &self.staging_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        staged.write_all(data)?;
        staged.flush()?;

        Ok(staged)
    }

    /// Returns every row from A1 to the bottom-right of the used range.
    fn read_first_sheet(path: &Path) -> Result<Vec<Vec<CellValue>>, FileParserError> {
        let mut workbook: Xlsx<_> = open_workbook(path)
            .map_err(|e| FileParserError::Malformed(format!("failed to open workbook: {e}")))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| FileParserError::Malformed("workbook has no worksheets".to_string()))?
            .map_err(|e| FileParserError::Malformed(format!("failed to read worksheet: {e}")))?;

        let Some((first_row, first_col)) = range.start() else {
            return Ok(Vec::new());
        };
        let first_row = first_row as usize;
        let first_col = first_col as usize;
        let width = first_col + range.width();

        let mut rows = Vec::with_capacity(first_row + range.height());
        rows.extend((0..first_row).map(|_| vec![CellValue::Null; width]));

        for row in range.rows() {
            let mut values = Vec::with_capacity(width);
            values.resize(first_col, CellValue::Null);
            values.extend(row.iter().map(cell_value));
            rows.push(values);
        }

        Ok(rows)
    }
}

fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => number_value(*f),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
            CellValue::Text(s.clone())
        }
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|dt| CellValue::Text(dt.format("%Y-%m-%dT%H:%M:%S").to_string()))
            .unwrap_or_else(|| number_value(dt.as_f64())),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}

fn number_value(value: f64) -> CellValue {
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        CellValue::Int(value as i64)
    } else {
        CellValue::Float(value)
    }
}

#[async_trait]
impl FileParser for XlsxParser {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn parse(&self, data: &[u8]) -> Result<FileContent, FileParserError> {
        let staged = self.stage(data)?;

        let rows = tokio::task::spawn_blocking(move || {
            let rows = Self::read_first_sheet(staged.path());
            drop(staged);
            rows
        })
        .await
        .map_err(|e| FileParserError::Malformed(format!("task join error: {e}")))??;

        tracing::info!(rows = rows.len(), "Spreadsheet parsed");
        Ok(FileContent::Rows(rows))
    }
}
