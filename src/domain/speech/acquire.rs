use super::error::SpeechServiceError;
use super::model::UploadedDocument;
use lopdf::Document;

/// Text obtained from the form, before translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquiredText {
    /// Text that goes on to translation and synthesis
    pub effective: String,
    /// Text pulled out of the uploaded document, empty when there was none
    pub extracted: String,
}

/// Pick the text to speak.
///
/// Typed text wins when it has any non-whitespace content; otherwise the
/// uploaded document's text is used. Fails with `NoInput` when neither
/// yields anything.
pub fn acquire(
    raw_text: &str,
    uploaded_document: Option<&UploadedDocument>,
) -> Result<AcquiredText, SpeechServiceError> {
    let extracted = uploaded_document
        .filter(|doc| !doc.filename.is_empty())
        .map(extract_text)
        .unwrap_or_default();

    let effective = if raw_text.trim().is_empty() {
        extracted.clone()
    } else {
        raw_text.to_string()
    };

    if effective.trim().is_empty() {
        return Err(SpeechServiceError::NoInput);
    }

    Ok(AcquiredText {
        effective,
        extracted,
    })
}

/// Extract plain text from an upload, chosen by file extension.
///
/// Unsupported extensions yield an empty string rather than an error.
pub fn extract_text(document: &UploadedDocument) -> String {
    let filename = document.filename.to_lowercase();

    if filename.ends_with(".txt") {
        String::from_utf8_lossy(&document.bytes).into_owned()
    } else if filename.ends_with(".pdf") {
        extract_pdf_text(&document.bytes)
    } else {
        tracing::debug!(
            filename = %document.filename,
            "Unsupported upload type, no text extracted"
        );
        String::new()
    }
}

fn extract_pdf_text(bytes: &[u8]) -> String {
    let pdf = match Document::load_mem(bytes) {
        Ok(pdf) => pdf,
        Err(e) => {
            tracing::warn!(error = %e, "Uploaded PDF could not be parsed");
            return String::new();
        }
    };

    let mut text = String::new();
    for page_number in pdf.get_pages().keys() {
        match pdf.extract_text(&[*page_number]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => {
                tracing::debug!(page = page_number, error = %e, "PDF page has no extractable text");
            }
        }
    }

    tracing::info!(
        text_length = text.len(),
        "Text extracted from uploaded PDF"
    );

    text
}
