use async_trait::async_trait;
use docx_rs::{
    DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild, Table, TableCellContent,
    TableChild, TableRowChild, read_docx,
};

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat};

use super::pdf_adapter::EXTRACTION_TIMEOUT;

#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Body paragraphs in document order, one per entry, formatting dropped.
    /// Paragraphs inside table cells are read row by row, cell by cell.
    fn extract_paragraphs(data: &[u8]) -> Result<Vec<String>, FileLoaderError> {
        let docx = read_docx(data)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse DOCX: {e}")))?;

        let mut paragraphs = Vec::new();
        for child in &docx.document.children {
            match child {
                DocumentChild::Paragraph(paragraph) => paragraphs.push(paragraph_text(paragraph)),
                DocumentChild::Table(table) => collect_table(table, &mut paragraphs),
                _ => {}
            }
        }

        paragraphs.retain(|text| !text.trim().is_empty());
        Ok(paragraphs)
    }
}

fn collect_table(table: &Table, out: &mut Vec<String>) {
    for TableChild::TableRow(row) in &table.rows {
        for TableRowChild::TableCell(cell) in &row.cells {
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(paragraph) => out.push(paragraph_text(paragraph)),
                    TableCellContent::Table(nested) => collect_table(nested, out),
                    _ => {}
                }
            }
        }
    }
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_children_text(&paragraph.children, &mut text);
    text
}

/// Hyperlink and tracked-insert runs count as paragraph text.
fn push_children_text(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run_text(run, text),
            ParagraphChild::Hyperlink(link) => push_children_text(&link.children, text),
            ParagraphChild::Insert(insert) => {
                for insert_child in &insert.children {
                    if let InsertChild::Run(run) = insert_child {
                        push_run_text(run, text);
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_run_text(run: &Run, text: &mut String) {
    for run_child in &run.children {
        match run_child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(filename = %document.filename, size_bytes = document.size_bytes)
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format != DocumentFormat::Docx {
            return Err(FileLoaderError::UnsupportedFileType(
                document.format.as_mime().to_string(),
            ));
        }

        let data_owned = data.to_vec();

        let paragraphs = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_paragraphs(&data_owned)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("DOCX extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(
            paragraph_count = paragraphs.len(),
            "DOCX text extraction complete"
        );

        if paragraphs.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(paragraphs.join("\n"))
    }
}
