use bytes::Bytes;

/// A file part received with a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub filename: Option<String>,
    pub data: Bytes,
}

impl UploadedFile {
    pub fn new(filename: Option<String>, data: impl Into<Bytes>) -> Self {
        Self {
            filename,
            data: data.into(),
        }
    }

    /// Browsers send a nameless, empty part when no file was selected.
    pub fn is_blank(&self) -> bool {
        self.filename.as_deref().is_none_or(str::is_empty) && self.data.is_empty()
    }
}

/// Raw input of one processing request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submission {
    pub text: Option<String>,
    pub file: Option<UploadedFile>,
}

impl Submission {
    pub fn new(text: Option<String>, file: Option<UploadedFile>) -> Self {
        Self {
            text: text.filter(|t| !t.is_empty()),
            file: file.filter(|f| !f.is_blank()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.file.is_none()
    }
}
