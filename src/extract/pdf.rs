use lopdf::Document;

use crate::extract::ExtractError;

/// Extract text from every page of a PDF, in page order.
///
/// Each page contributes one segment preceded by a single space. A page
/// whose content cannot be decoded contributes an empty segment instead
/// of failing the whole document; only a stream the reader cannot open at
/// all is a hard error.
pub(crate) fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let document =
        Document::load_mem(bytes).map_err(|error| ExtractError::UnreadablePdf(error.to_string()))?;

    let mut text = String::new();
    for page_number in document.get_pages().keys() {
        text.push(' ');
        match document.extract_text(&[*page_number]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(error) => {
                log::warn!("Skipping text extraction for page {page_number}: {error}");
            }
        }
    }

    Ok(text)
}
