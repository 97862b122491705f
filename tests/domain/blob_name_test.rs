use chrono::{TimeZone, Utc};

use pagepress::domain::{BlobName, BlobNameError};

#[test]
fn given_name_without_extension_when_normalizing_then_pdf_is_appended() {
    let name = BlobName::new("report").unwrap();
    assert_eq!(name.as_str(), "report.pdf");
}

#[test]
fn given_name_with_extension_when_normalizing_then_name_is_unchanged() {
    let name = BlobName::new("report.pdf").unwrap();
    assert_eq!(name.as_str(), "report.pdf");
}

#[test]
fn given_uppercase_extension_when_normalizing_then_name_is_unchanged() {
    let name = BlobName::new("REPORT.PDF").unwrap();
    assert_eq!(name.as_str(), "REPORT.PDF");
}

#[test]
fn given_surrounding_whitespace_when_normalizing_then_name_is_trimmed() {
    let name = BlobName::new("  notes  ").unwrap();
    assert_eq!(name.as_str(), "notes.pdf");
}

#[test]
fn given_blank_name_when_normalizing_then_returns_empty_error() {
    assert_eq!(BlobName::new("   "), Err(BlobNameError::Empty));
    assert_eq!(BlobName::new(""), Err(BlobNameError::Empty));
}

#[test]
fn given_host_when_generating_then_name_carries_host_and_timestamp() {
    let now = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
    let name = BlobName::generate(Some("www.example.com"), now);
    assert_eq!(name.as_str(), "example-com-20260314T092653Z.pdf");
}

#[test]
fn given_no_host_when_generating_then_name_uses_page_stem() {
    let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    let name = BlobName::generate(None, now);
    assert_eq!(name.as_str(), "page-20260102T030405Z.pdf");
}

#[test]
fn given_missing_name_when_resolving_then_name_is_generated() {
    let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    let name = BlobName::resolve(None, Some("x.com"), now);
    assert_eq!(name.as_str(), "x-com-20260102T030405Z.pdf");
}

#[test]
fn given_blank_name_when_resolving_then_name_is_generated() {
    let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    let name = BlobName::resolve(Some(" "), None, now);
    assert_eq!(name.as_str(), "page-20260102T030405Z.pdf");
}

#[test]
fn given_supplied_name_when_resolving_then_supplied_name_wins() {
    let name = BlobName::resolve(Some("out"), Some("x.com"), Utc::now());
    assert_eq!(name.as_str(), "out.pdf");
}

#[test]
fn given_blob_name_when_displayed_then_matches_as_str() {
    let name = BlobName::new("out").unwrap();
    assert_eq!(format!("{}", name), name.as_str());
}
