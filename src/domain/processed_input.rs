use serde::Serialize;

use super::parsed_file::ParsedFile;

/// The `data` member of a successful processing response.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProcessedInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<ParsedFile>,
}
