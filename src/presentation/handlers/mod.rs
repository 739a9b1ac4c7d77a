mod process_input;

pub use process_input::{ErrorResponse, ProcessInputResponse, process_input_handler};
