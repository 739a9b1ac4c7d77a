use intake::domain::FileFormat;

#[test]
fn given_csv_filename_when_resolving_then_returns_csv() {
    assert_eq!(FileFormat::from_filename("data.csv"), Some(FileFormat::Csv));
}

#[test]
fn given_txt_filename_when_resolving_then_returns_txt() {
    assert_eq!(FileFormat::from_filename("notes.txt"), Some(FileFormat::Txt));
}

#[test]
fn given_xlsx_filename_when_resolving_then_returns_xlsx() {
    assert_eq!(
        FileFormat::from_filename("report.final.xlsx"),
        Some(FileFormat::Xlsx)
    );
}

#[test]
fn given_uppercase_extension_when_resolving_then_matches_case_insensitively() {
    assert_eq!(FileFormat::from_filename("DATA.CSV"), Some(FileFormat::Csv));
}

#[test]
fn given_pdf_filename_when_resolving_then_returns_none() {
    assert_eq!(FileFormat::from_filename("paper.pdf"), None);
}

#[test]
fn given_filename_without_extension_when_resolving_then_returns_none() {
    assert_eq!(FileFormat::from_filename("README"), None);
}

#[test]
fn given_csv_suffix_without_dot_when_resolving_then_returns_none() {
    assert_eq!(FileFormat::from_filename("datacsv"), None);
}

#[test]
fn given_format_when_displayed_then_uses_uppercase_label() {
    assert_eq!(FileFormat::Xlsx.to_string(), "XLSX");
}
