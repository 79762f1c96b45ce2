//! Format-specific decoders that flatten a resume document into one text blob.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use crate::extraction::parser::ExtractError;
use crate::extraction::validators::file_extension;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Picks the decoder from the filename extension (case-insensitive).
    pub fn from_filename(filename: &str) -> Option<Self> {
        match file_extension(filename).as_str() {
            ".pdf" => Some(DocumentFormat::Pdf),
            ".docx" => Some(DocumentFormat::Docx),
            _ => None,
        }
    }
}

pub fn decode_text(data: &[u8], format: DocumentFormat) -> Result<String, ExtractError> {
    match format {
        DocumentFormat::Pdf => extract_text_from_pdf(data),
        DocumentFormat::Docx => extract_text_from_docx(data),
    }
}

/// pdf-extract panics on some well-formed files with broken content streams
/// (missing fonts, operators without operands). Those panics become `Decode` errors.
fn extract_text_from_pdf(data: &[u8]) -> Result<String, ExtractError> {
    match catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(data))) {
        Ok(result) => result.map_err(|e| ExtractError::Decode(e.to_string())),
        Err(payload) => Err(ExtractError::Decode(format!(
            "PDF decoder panicked: {}",
            panic_message(payload.as_ref())
        ))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Concatenates the text runs of each body paragraph, one paragraph per line.
fn extract_text_from_docx(data: &[u8]) -> Result<String, ExtractError> {
    let docx = docx_rs::read_docx(data).map_err(|e| ExtractError::Decode(e.to_string()))?;

    let mut text = String::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            for paragraph_child in &paragraph.children {
                if let ParagraphChild::Run(run) = paragraph_child {
                    for run_child in &run.children {
                        if let RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    Ok(text)
}
