use docguard::domain::{Document, DocumentFormat};

#[test]
fn given_mixed_case_extension_when_creating_document_then_extension_is_lowercased() {
    let document = Document::new("Quarterly Report.PDF".to_string(), 1024);

    assert_eq!(document.extension, "pdf");
    assert_eq!(document.format(), Some(DocumentFormat::Pdf));
}

#[test]
fn given_filename_without_extension_when_creating_document_then_format_is_none() {
    let document = Document::new("README".to_string(), 10);

    assert_eq!(document.extension, "");
    assert_eq!(document.format(), None);
    assert_eq!(document.unsupported_marker(), "Unsupported file type: ");
}

#[test]
fn given_unknown_extension_when_building_marker_then_names_the_extension() {
    let document = Document::new("archive.xyz".to_string(), 10);

    assert_eq!(document.format(), None);
    assert_eq!(document.unsupported_marker(), "Unsupported file type: .xyz");
}

#[test]
fn given_two_documents_when_created_then_ids_are_unique() {
    let first = Document::new("a.txt".to_string(), 1);
    let second = Document::new("a.txt".to_string(), 1);

    assert_ne!(first.id, second.id);
}

#[test]
fn given_extension_with_dot_when_parsing_format_then_dot_is_ignored() {
    assert_eq!(DocumentFormat::from_extension(".DOCX"), Some(DocumentFormat::Docx));
    assert_eq!(DocumentFormat::from_extension("jsonl"), Some(DocumentFormat::JsonLines));
    assert_eq!(DocumentFormat::from_extension("exe"), None);
}

#[test]
fn given_every_format_when_round_tripping_through_display_then_parses_back() {
    for format in DocumentFormat::ALL {
        let parsed: DocumentFormat = format.to_string().parse().unwrap();
        assert_eq!(parsed, format);
    }
}

#[test]
fn given_invalid_format_string_when_parsing_then_returns_error() {
    let result = "mp3".parse::<DocumentFormat>();

    assert!(result.is_err());
}
