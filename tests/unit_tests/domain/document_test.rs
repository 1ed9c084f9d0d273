use fineprint::domain::{Document, DocumentFormat};

#[test]
fn given_pdf_filename_when_resolving_format_then_returns_pdf() {
    assert_eq!(
        DocumentFormat::from_filename("policy.pdf"),
        Some(DocumentFormat::Pdf)
    );
}

#[test]
fn given_uppercase_docx_extension_when_resolving_format_then_returns_docx() {
    assert_eq!(
        DocumentFormat::from_filename("Terms Of Service.DOCX"),
        Some(DocumentFormat::Docx)
    );
}

#[test]
fn given_unknown_or_missing_extension_when_resolving_format_then_returns_none() {
    assert_eq!(DocumentFormat::from_filename("notes.txt"), None);
    assert_eq!(DocumentFormat::from_filename("README"), None);
    assert_eq!(DocumentFormat::from_filename(""), None);
}

#[test]
fn given_format_when_displayed_then_uses_extension() {
    assert_eq!(DocumentFormat::Pdf.to_string(), "pdf");
    assert_eq!(DocumentFormat::Docx.extension(), "docx");
    assert_eq!(DocumentFormat::Pdf.as_mime(), "application/pdf");
}

#[test]
fn given_metadata_when_creating_document_then_fields_are_set() {
    let document = Document::new("terms.pdf".to_string(), DocumentFormat::Pdf, 42);

    assert_eq!(document.filename, "terms.pdf");
    assert_eq!(document.format, DocumentFormat::Pdf);
    assert_eq!(document.size_bytes, 42);
}
