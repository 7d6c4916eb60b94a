use quick_xml::Reader;
use quick_xml::events::Event;

use crate::extract::{ExtractError, read_part};

const DOCUMENT_PART: &str = "word/document.xml";

/// Extract paragraph text from a `.docx` file.
///
/// Paragraphs (`w:p`) are visited in document order and joined by a
/// newline; a paragraph's text is the concatenation of its `w:t` runs, so
/// a paragraph without runs survives as an empty line.
pub(crate) fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let part = read_part(bytes, DOCUMENT_PART).map_err(ExtractError::UnreadableWordDocument)?;
    parse_paragraphs(&part).map_err(ExtractError::UnreadableWordDocument)
}

fn parse_paragraphs(xml: &[u8]) -> Result<String, String> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Option<String> = None;
    let mut in_run_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(element)) => match element.name().as_ref() {
                b"w:p" => current = Some(String::new()),
                b"w:t" => in_run_text = current.is_some(),
                _ => {}
            },
            // A self-closed `<w:p/>` is still a paragraph: an empty line.
            Ok(Event::Empty(element)) => {
                if element.name().as_ref() == b"w:p" {
                    paragraphs.push(String::new());
                }
            }
            Ok(Event::Text(text)) if in_run_text => {
                let run = text.unescape().map_err(|error| error.to_string())?;
                if let Some(paragraph) = current.as_mut() {
                    paragraph.push_str(&run);
                }
            }
            Ok(Event::End(element)) => match element.name().as_ref() {
                b"w:p" => {
                    if let Some(paragraph) = current.take() {
                        paragraphs.push(paragraph);
                    }
                    in_run_text = false;
                }
                b"w:t" => in_run_text = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(error) => return Err(error.to_string()),
        }
        buf.clear();
    }

    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::parse_paragraphs;

    fn document_xml(body: &str) -> Vec<u8> {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>{body}</w:body></w:document>"
        )
        .into_bytes()
    }

    #[test]
    fn joins_paragraphs_with_newlines() {
        let xml = document_xml(
            "<w:p><w:r><w:t>Hello</w:t></w:r></w:p>\
             <w:p/>\
             <w:p><w:r><w:t>World</w:t></w:r></w:p>",
        );

        let text = parse_paragraphs(&xml).expect("parse should succeed");

        assert_eq!(text, "Hello\n\nWorld");
    }

    #[test]
    fn concatenates_runs_within_a_paragraph() {
        let xml = document_xml(
            "<w:p><w:r><w:t>Hel</w:t></w:r><w:r><w:t xml:space=\"preserve\">lo </w:t></w:r>\
             <w:r><w:t>there</w:t></w:r></w:p>",
        );

        let text = parse_paragraphs(&xml).expect("parse should succeed");

        assert_eq!(text, "Hello there");
    }

    #[test]
    fn unescapes_xml_entities() {
        let xml = document_xml("<w:p><w:r><w:t>a &amp; b</w:t></w:r></w:p>");

        let text = parse_paragraphs(&xml).expect("parse should succeed");

        assert_eq!(text, "a & b");
    }

    #[test]
    fn empty_body_extracts_to_empty_string() {
        let xml = document_xml("");

        let text = parse_paragraphs(&xml).expect("parse should succeed");

        assert!(text.is_empty());
    }
}
