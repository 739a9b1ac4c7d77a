use std::sync::Arc;

use crate::application::ports::FileParser;
use crate::domain::FileFormat;

use super::csv_parser::CsvParser;
use super::plain_text_parser::PlainTextParser;
use super::xlsx_parser::XlsxParser;

pub struct FileParserFactory;

impl FileParserFactory {
    pub fn create(format: FileFormat) -> Arc<dyn FileParser> {
        match format {
            FileFormat::Csv => Arc::new(CsvParser::new()),
            FileFormat::Txt => Arc::new(PlainTextParser),
            FileFormat::Xlsx => Arc::new(XlsxParser::new()),
        }
    }

    /// One parser per supported format, ready for `FileDispatcher::new`.
    pub fn create_all() -> Vec<(FileFormat, Arc<dyn FileParser>)> {
        FileFormat::ALL
            .into_iter()
            .map(|format| (format, Self::create(format)))
            .collect()
    }
}
