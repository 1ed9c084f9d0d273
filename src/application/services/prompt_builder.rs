use crate::domain::NormalizedDocument;

const SUMMARY_INSTRUCTIONS: &str = "You are a privacy and legal expert. \
Summarize this legal document in plain English.
Highlight any red flags like data selling, tracking, auto-renewals, or waiving rights.";

/// Marks where the document text starts inside the prompt.
pub const DOCUMENT_DELIMITER: &str = "TEXT:";

/// Wraps the document in the fixed summarization instructions. The text is
/// appended verbatim; no truncation is applied.
pub fn build_summary_prompt(document: &NormalizedDocument) -> String {
    format!(
        "{SUMMARY_INSTRUCTIONS}\n\n{DOCUMENT_DELIMITER}\n{}\n",
        document.text()
    )
}
