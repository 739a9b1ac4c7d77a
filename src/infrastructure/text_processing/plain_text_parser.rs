use async_trait::async_trait;

use crate::application::ports::{FileParser, FileParserError};
use crate::domain::FileContent;

pub struct PlainTextParser;

#[async_trait]
impl FileParser for PlainTextParser {
    async fn parse(&self, data: &[u8]) -> Result<FileContent, FileParserError> {
        String::from_utf8(data.to_vec())
            .map(FileContent::Text)
            .map_err(|e| FileParserError::InvalidEncoding(e.to_string()))
    }
}
