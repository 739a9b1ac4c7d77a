use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::{FileParser, FileParserError};
use crate::domain::{FileFormat, ParsedFile, UploadedFile};

#[derive(Debug, thiserror::Error)]
pub enum FileDispatchError {
    #[error("Uploaded file must have a filename.")]
    MissingFilename,
    #[error("Unsupported file type: '{}'. Supported types are {}.", .0, supported_extensions())]
    UnsupportedExtension(String),
    #[error("Error processing {format} file: {source}")]
    ParseFailure {
        format: FileFormat,
        #[source]
        source: FileParserError,
    },
}

/// Routes an upload to the parser registered for its filename suffix.
pub struct FileDispatcher {
    parsers: HashMap<FileFormat, Arc<dyn FileParser>>,
}

impl FileDispatcher {
    pub fn new(parsers: Vec<(FileFormat, Arc<dyn FileParser>)>) -> Self {
        Self {
            parsers: parsers.into_iter().collect(),
        }
    }

    #[tracing::instrument(skip(self, file), fields(filename = ?file.filename, bytes = file.data.len()))]
    pub async fn dispatch(&self, file: &UploadedFile) -> Result<ParsedFile, FileDispatchError> {
        let filename = match file.filename.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => return Err(FileDispatchError::MissingFilename),
        };

        let format = FileFormat::from_filename(filename)
            .ok_or_else(|| FileDispatchError::UnsupportedExtension(extension_of(filename)))?;

        let parser = self
            .parsers
            .get(&format)
            .ok_or_else(|| FileDispatchError::UnsupportedExtension(extension_of(filename)))?;

        let content = parser.parse(&file.data).await.map_err(|source| {
            tracing::warn!(%format, error = %source, "File parsing failed");
            FileDispatchError::ParseFailure { format, source }
        })?;

        tracing::debug!(%format, "File parsed");
        Ok(ParsedFile::new(filename.to_string(), content))
    }
}

fn extension_of(filename: &str) -> String {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| format!(".{ext}"))
        .unwrap_or_default()
}

fn supported_extensions() -> String {
    FileFormat::ALL
        .iter()
        .map(|format| format!(".{}", format.extension()))
        .collect::<Vec<_>>()
        .join(", ")
}
