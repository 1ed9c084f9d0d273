/// Plain text recovered from an input, ready for prompt assembly.
///
/// Construction rejects empty and whitespace-only text, so a value of this
/// type always carries usable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDocument {
    text: String,
}

#[derive(Debug, thiserror::Error)]
#[error("document contains no text")]
pub struct EmptyDocumentError;

impl NormalizedDocument {
    pub fn new(text: impl Into<String>) -> Result<Self, EmptyDocumentError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(EmptyDocumentError);
        }
        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
