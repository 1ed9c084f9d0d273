use axum::body::Body;
use axum::extract::Request;
use axum::http::header::CONTENT_TYPE;

use fineprint::domain::IngestionRequest;
use fineprint::presentation::handlers::{RequestParseError, parse_ingestion_request};

use crate::helpers::{FormPart, multipart_body, multipart_content_type, single_page_pdf};

fn json_request(body: &str) -> Request {
    Request::builder()
        .method("POST")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn multipart_request(parts: &[FormPart<'_>]) -> Request {
    Request::builder()
        .method("POST")
        .header(CONTENT_TYPE, multipart_content_type())
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

#[tokio::test]
async fn given_json_text_when_parsing_then_returns_text_request() {
    let parsed = parse_ingestion_request(json_request(r#"{"text":"We sell data."}"#))
        .await
        .unwrap();

    assert!(matches!(parsed, IngestionRequest::Text(t) if t == "We sell data."));
}

#[tokio::test]
async fn given_json_with_charset_when_parsing_then_content_type_is_accepted() {
    let request = Request::builder()
        .method("POST")
        .header(CONTENT_TYPE, "Application/JSON; charset=utf-8")
        .body(Body::from(r#"{"text":"terms"}"#))
        .unwrap();

    let parsed = parse_ingestion_request(request).await.unwrap();

    assert!(matches!(parsed, IngestionRequest::Text(_)));
}

#[tokio::test]
async fn given_json_without_text_when_parsing_then_returns_no_input() {
    for body in [r#"{}"#, r#"{"text":""}"#, r#"{"text":null}"#] {
        let result = parse_ingestion_request(json_request(body)).await;

        assert!(
            matches!(result, Err(RequestParseError::NoInputProvided)),
            "{body}"
        );
    }
}

#[tokio::test]
async fn given_malformed_json_when_parsing_then_returns_invalid_body() {
    let result = parse_ingestion_request(json_request("{not json")).await;

    assert!(matches!(result, Err(RequestParseError::InvalidRequestBody(_))));
}

#[tokio::test]
async fn given_other_content_type_when_parsing_then_returns_unsupported() {
    let request = Request::builder()
        .method("POST")
        .header(CONTENT_TYPE, "text/plain")
        .body(Body::from("terms"))
        .unwrap();

    let result = parse_ingestion_request(request).await;

    assert!(matches!(
        result,
        Err(RequestParseError::UnsupportedContentType(ct)) if ct == "text/plain"
    ));
}

#[tokio::test]
async fn given_url_text_and_file_when_parsing_then_url_wins() {
    let pdf = single_page_pdf("ignored");
    let request = multipart_request(&[
        FormPart::File("file", "terms.pdf", &pdf),
        FormPart::Field("text", "ignored too"),
        FormPart::Field("url", "  https://example.com/tos  "),
    ]);

    let parsed = parse_ingestion_request(request).await.unwrap();

    assert!(matches!(parsed, IngestionRequest::Url(u) if u == "https://example.com/tos"));
}

#[tokio::test]
async fn given_text_and_file_when_parsing_then_text_wins() {
    let pdf = single_page_pdf("ignored");
    let request = multipart_request(&[
        FormPart::File("file", "terms.pdf", &pdf),
        FormPart::Field("text", "Pasted terms"),
    ]);

    let parsed = parse_ingestion_request(request).await.unwrap();

    assert!(matches!(parsed, IngestionRequest::Text(t) if t == "Pasted terms"));
}

#[tokio::test]
async fn given_only_docx_file_when_parsing_then_returns_docx_request() {
    let request = multipart_request(&[FormPart::File("file", "Policy.DOCX", b"zipdata")]);

    let parsed = parse_ingestion_request(request).await.unwrap();

    assert!(matches!(
        parsed,
        IngestionRequest::DocxBytes(file) if file.filename == "Policy.DOCX"
    ));
}

#[tokio::test]
async fn given_file_with_unknown_extension_when_parsing_then_returns_unsupported_file_type() {
    let request = multipart_request(&[FormPart::File("file", "notes.txt", b"hello")]);

    let result = parse_ingestion_request(request).await;

    assert!(matches!(
        result,
        Err(RequestParseError::UnsupportedFileType(ext)) if ext == ".txt"
    ));
}

#[tokio::test]
async fn given_file_part_without_filename_when_parsing_then_returns_no_input() {
    let request = multipart_request(&[FormPart::File("file", "", b"%PDF-1.4")]);

    let result = parse_ingestion_request(request).await;

    assert!(matches!(result, Err(RequestParseError::NoInputProvided)));
}

#[tokio::test]
async fn given_only_empty_fields_when_parsing_then_returns_no_input() {
    let request = multipart_request(&[
        FormPart::Field("url", "   "),
        FormPart::Field("text", ""),
        FormPart::File("file", "terms.pdf", b""),
        FormPart::Field("comment", "unrelated"),
    ]);

    let result = parse_ingestion_request(request).await;

    assert!(matches!(result, Err(RequestParseError::NoInputProvided)));
}
