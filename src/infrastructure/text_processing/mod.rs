mod csv_parser;
mod file_parser_factory;
mod plain_text_parser;
mod xlsx_parser;

pub use csv_parser::CsvParser;
pub use file_parser_factory::FileParserFactory;
pub use plain_text_parser::PlainTextParser;
pub use xlsx_parser::XlsxParser;
