mod file_format;
mod parsed_file;
mod processed_input;
mod submission;
mod token;

pub use file_format::FileFormat;
pub use parsed_file::{CellValue, FileContent, ParsedFile};
pub use processed_input::ProcessedInput;
pub use submission::{Submission, UploadedFile};
pub use token::Token;
