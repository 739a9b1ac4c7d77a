mod file_dispatcher;
mod input_processor;
mod text_validator;

pub use file_dispatcher::{FileDispatchError, FileDispatcher};
pub use input_processor::{InputProcessor, ProcessingError};
pub use text_validator::{
    DEFAULT_MIN_ALPHA_RATIO, TextValidationError, TextValidator, check_text,
};
