//! PDF-to-text extraction boundary.

use crate::errors::AppError;

/// Extracts plain text from in-memory PDF bytes.
///
/// Corrupt or unsupported input maps to `AppError::Extraction` (422) so the
/// caller can distinguish a bad upload from a server fault. Not retried.
pub fn text_from_pdf(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Extraction(format!("Failed to extract text from PDF: {e}")))
}
