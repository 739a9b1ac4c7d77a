use async_trait::async_trait;

use crate::domain::FileContent;

#[async_trait]
pub trait FileParser: Send + Sync {
    async fn parse(&self, data: &[u8]) -> Result<FileContent, FileParserError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileParserError {
    #[error("invalid UTF-8: {0}")]
    InvalidEncoding(String),
    #[error("{0}")]
    Malformed(String),
    #[error("failed to stage upload: {0}")]
    Staging(#[from] std::io::Error),
}
