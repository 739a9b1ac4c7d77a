use serde::Serialize;

/// A single spreadsheet or CSV cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Parsed body of an upload: flat text for TXT, ordered rows for tabular formats.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FileContent {
    Text(String),
    Rows(Vec<Vec<CellValue>>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedFile {
    pub filename: String,
    pub content: FileContent,
}

impl ParsedFile {
    pub fn new(filename: String, content: FileContent) -> Self {
        Self { filename, content }
    }
}
