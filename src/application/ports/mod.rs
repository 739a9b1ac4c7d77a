mod file_parser;
mod word_tokenizer;

pub use file_parser::{FileParser, FileParserError};
pub use word_tokenizer::WordTokenizer;
