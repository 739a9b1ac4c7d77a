use intake::application::ports::{FileParser, FileParserError};
use intake::domain::{CellValue, FileContent};
use intake::infrastructure::text_processing::XlsxParser;

const SAMPLE: &[u8] = include_bytes!("../../../fixtures/sample.xlsx");
const OFFSET: &[u8] = include_bytes!("../../../fixtures/offset.xlsx");

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

#[tokio::test]
async fn given_workbook_when_parsing_then_returns_first_sheet_rows_with_empty_cells() {
    let result = XlsxParser::new().parse(SAMPLE).await.unwrap();

    assert_eq!(
        result,
        FileContent::Rows(vec![
            vec![text("name"), text("score"), text("passed")],
            vec![text("alice"), CellValue::Int(91), CellValue::Bool(true)],
            vec![text("bob"), CellValue::Null, CellValue::Bool(false)],
            vec![text("carol"), CellValue::Float(72.5), CellValue::Null],
        ])
    );
}

#[tokio::test]
async fn given_sheet_not_starting_at_a1_when_parsing_then_pads_from_a1() {
    let result = XlsxParser::new().parse(OFFSET).await.unwrap();

    assert_eq!(
        result,
        FileContent::Rows(vec![
            vec![CellValue::Null, CellValue::Null, CellValue::Null],
            vec![CellValue::Null, text("total"), CellValue::Int(3)],
        ])
    );
}

#[tokio::test]
async fn given_successful_parse_when_finished_then_staging_file_is_removed() {
    let staging = tempfile::tempdir().unwrap();
    let parser = XlsxParser::with_staging_dir(staging.path());

    parser.parse(SAMPLE).await.unwrap();

    assert_eq!(std::fs::read_dir(staging.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn given_corrupt_workbook_when_parsing_then_returns_malformed_and_cleans_up() {
    let staging = tempfile::tempdir().unwrap();
    let parser = XlsxParser::with_staging_dir(staging.path());

    let result = parser.parse(b"definitely not a zip archive").await;

    assert!(matches!(result, Err(FileParserError::Malformed(_))));
    assert_eq!(std::fs::read_dir(staging.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn given_missing_staging_dir_when_parsing_then_returns_staging_error() {
    let staging = tempfile::tempdir().unwrap();
    let parser = XlsxParser::with_staging_dir(staging.path().join("missing"));

    let result = parser.parse(SAMPLE).await;

    assert!(matches!(result, Err(FileParserError::Staging(_))));
}
