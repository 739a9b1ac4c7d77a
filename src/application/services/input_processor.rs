use super::file_dispatcher::{FileDispatchError, FileDispatcher};
use super::text_validator::{TextValidationError, TextValidator};
use crate::domain::{ProcessedInput, Submission};

#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("Please provide either text input, a file, or both.")]
    MissingInput,
    #[error(transparent)]
    InvalidText(#[from] TextValidationError),
    #[error(transparent)]
    InvalidFile(#[from] FileDispatchError),
}

impl ProcessingError {
    /// Whether the failure was caused by the submitted input.
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            Self::InvalidText(TextValidationError::TokenizationFailed(_))
        )
    }
}

pub struct InputProcessor {
    text_validator: TextValidator,
    file_dispatcher: FileDispatcher,
}

impl InputProcessor {
    pub fn new(text_validator: TextValidator, file_dispatcher: FileDispatcher) -> Self {
        Self {
            text_validator,
            file_dispatcher,
        }
    }

    /// Validates the text, parses the file, and assembles the result.
    ///
    /// The first failing stage aborts the whole submission.
    pub async fn process(
        &self,
        submission: &Submission,
    ) -> Result<ProcessedInput, ProcessingError> {
        let text = submission.text.as_deref().filter(|t| !t.is_empty());
        let file = submission.file.as_ref();

        if text.is_none() && file.is_none() {
            return Err(ProcessingError::MissingInput);
        }

        let mut result = ProcessedInput::default();

        if let Some(text) = text {
            result.text = Some(self.text_validator.validate(text).await?);
        }

        if let Some(file) = file {
            result.file = Some(self.file_dispatcher.dispatch(file).await?);
        }

        Ok(result)
    }
}
