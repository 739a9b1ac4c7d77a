use std::sync::Arc;

use crate::application::ports::WordTokenizer;
use crate::application::services::{FileDispatcher, InputProcessor, TextValidator};
use crate::infrastructure::text_processing::FileParserFactory;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub input_processor: Arc<InputProcessor>,
    pub settings: Settings,
}

impl AppState {
    pub fn new(input_processor: Arc<InputProcessor>, settings: Settings) -> Self {
        Self {
            input_processor,
            settings,
        }
    }

    /// Wires the processor with every built-in file parser.
    pub fn from_settings(settings: Settings, tokenizer: Arc<dyn WordTokenizer>) -> Self {
        let text_validator = TextValidator::new(tokenizer, settings.validation.min_alpha_ratio);
        let file_dispatcher = FileDispatcher::new(FileParserFactory::create_all());
        let input_processor = Arc::new(InputProcessor::new(text_validator, file_dispatcher));

        Self::new(input_processor, settings)
    }
}
