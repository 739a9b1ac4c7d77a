use std::sync::Arc;

use intake::application::ports::{FileParser, FileParserError};
use intake::application::services::{FileDispatchError, FileDispatcher};
use intake::domain::{CellValue, FileContent, FileFormat, UploadedFile};
use intake::infrastructure::text_processing::{FileParserFactory, PlainTextParser};

fn dispatcher() -> FileDispatcher {
    FileDispatcher::new(FileParserFactory::create_all())
}

fn upload(filename: &str, data: &[u8]) -> UploadedFile {
    UploadedFile::new(Some(filename.to_string()), data.to_vec())
}

#[tokio::test]
async fn given_csv_upload_when_dispatching_then_returns_ordered_rows() {
    let parsed = dispatcher()
        .dispatch(&upload("data.csv", b"a,b\n1,2"))
        .await
        .unwrap();

    assert_eq!(parsed.filename, "data.csv");
    assert_eq!(
        parsed.content,
        FileContent::Rows(vec![
            vec![CellValue::from("a"), CellValue::from("b")],
            vec![CellValue::from("1"), CellValue::from("2")],
        ])
    );
}

#[tokio::test]
async fn given_txt_upload_when_dispatching_then_returns_text() {
    let parsed = dispatcher()
        .dispatch(&upload("notes.txt", b"hi there"))
        .await
        .unwrap();

    assert_eq!(parsed.content, FileContent::Text("hi there".to_string()));
}

#[tokio::test]
async fn given_pdf_upload_when_dispatching_then_returns_unsupported_extension() {
    let result = dispatcher()
        .dispatch(&upload("paper.pdf", b"hi there"))
        .await;

    assert!(matches!(
        result,
        Err(FileDispatchError::UnsupportedExtension(ref ext)) if ext == ".pdf"
    ));
}

#[tokio::test]
async fn given_missing_filename_when_dispatching_then_returns_missing_filename() {
    let file = UploadedFile::new(None, b"a,b".to_vec());

    let result = dispatcher().dispatch(&file).await;

    assert!(matches!(result, Err(FileDispatchError::MissingFilename)));
}

#[tokio::test]
async fn given_empty_filename_when_dispatching_then_returns_missing_filename() {
    let result = dispatcher().dispatch(&upload("", b"a,b")).await;

    assert!(matches!(result, Err(FileDispatchError::MissingFilename)));
}

#[tokio::test]
async fn given_invalid_utf8_txt_when_dispatching_then_returns_txt_parse_failure() {
    let result = dispatcher()
        .dispatch(&upload("broken.txt", &[0xFF, 0xFE, 0xFD]))
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        FileDispatchError::ParseFailure {
            format: FileFormat::Txt,
            source: FileParserError::InvalidEncoding(_),
        }
    ));
    assert!(err.to_string().starts_with("Error processing TXT file:"));
}

#[tokio::test]
async fn given_unregistered_format_when_dispatching_then_returns_unsupported_extension() {
    let text_parser: Arc<dyn FileParser> = Arc::new(PlainTextParser);
    let dispatcher = FileDispatcher::new(vec![(FileFormat::Txt, text_parser)]);

    let result = dispatcher.dispatch(&upload("data.csv", b"a,b")).await;

    assert!(matches!(
        result,
        Err(FileDispatchError::UnsupportedExtension(_))
    ));
}

#[test]
fn given_unsupported_extension_when_formatting_error_then_lists_supported_extensions() {
    let err = FileDispatchError::UnsupportedExtension(".pdf".to_string());

    assert_eq!(
        err.to_string(),
        "Unsupported file type: '.pdf'. Supported types are .csv, .txt, .xlsx."
    );
}
