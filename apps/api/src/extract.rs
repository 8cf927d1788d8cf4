//! PDF text extraction — thin wrapper over `pdf-extract`.
//!
//! Extraction problems are input-validation failures: they mean the caller
//! uploaded something the service cannot read, so they never reach the
//! analysis core.

use crate::errors::AppError;

/// Extracts plain text from an in-memory PDF payload.
///
/// Returns `AppError::Validation` when the bytes are not a readable PDF or
/// when extraction yields only whitespace (scanned/image-only documents).
pub fn text_from_pdf(bytes: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Validation(format!("Could not extract text from PDF: {e}")))?;

    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "Could not extract text from PDF".to_string(),
        ));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    // A structurally valid one-page PDF with no content stream, so extraction
    // succeeds but yields no text. Offsets in the xref table are exact.
    const EMPTY_PAGE_PDF: &[u8] = b"%PDF-1.4\n\
        1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n\
        2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n\
        3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] >>\nendobj\n\
        xref\n0 4\n\
        0000000000 65535 f \n\
        0000000009 00000 n \n\
        0000000058 00000 n \n\
        0000000115 00000 n \n\
        trailer\n<< /Size 4 /Root 1 0 R >>\nstartxref\n186\n%%EOF\n";

    #[test]
    fn test_unreadable_bytes_are_a_validation_failure() {
        let result = text_from_pdf(b"not a pdf at all");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_blank_extraction_is_a_validation_failure() {
        let result = text_from_pdf(EMPTY_PAGE_PDF);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
