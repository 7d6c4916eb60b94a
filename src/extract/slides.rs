use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::extract::ExtractError;

/// Extract shape text from a `.pptx` deck.
///
/// Slides are visited in numeric order. Within a slide, every shape
/// carrying a text body (`p:txBody`) contributes one entry in stored
/// order: its paragraphs joined by a newline. Entries across the whole
/// deck are joined by newlines; shapes without a text body are skipped.
pub(crate) fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|error| ExtractError::UnreadableSlideDeck(error.to_string()))?;

    let mut slides: Vec<(u32, String)> = archive
        .file_names()
        .filter_map(|name| slide_number(name).map(|number| (number, name.to_string())))
        .collect();
    slides.sort_unstable();

    let mut entries: Vec<String> = Vec::new();
    for (_, name) in &slides {
        let mut xml = Vec::new();
        archive
            .by_name(name)
            .map_err(|error| ExtractError::UnreadableSlideDeck(error.to_string()))?
            .read_to_end(&mut xml)
            .map_err(|error| ExtractError::UnreadableSlideDeck(error.to_string()))?;
        collect_shape_texts(&xml, &mut entries).map_err(ExtractError::UnreadableSlideDeck)?;
    }

    Ok(entries.join("\n"))
}

/// Matches `ppt/slides/slideN.xml` and returns `N`.
fn slide_number(name: &str) -> Option<u32> {
    name.strip_prefix("ppt/slides/slide")?
        .strip_suffix(".xml")?
        .parse()
        .ok()
}

fn collect_shape_texts(xml: &[u8], entries: &mut Vec<String>) -> Result<(), String> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();

    let mut shape_paragraphs: Option<Vec<String>> = None;
    let mut current: Option<String> = None;
    let mut in_run_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(element)) => match element.name().as_ref() {
                b"p:txBody" => shape_paragraphs = Some(Vec::new()),
                b"a:p" => {
                    if shape_paragraphs.is_some() {
                        current = Some(String::new());
                    }
                }
                b"a:t" => in_run_text = current.is_some(),
                _ => {}
            },
            // A self-closed `<a:p/>` is still a paragraph: an empty line.
            Ok(Event::Empty(element)) => {
                if element.name().as_ref() == b"a:p" {
                    if let Some(paragraphs) = shape_paragraphs.as_mut() {
                        paragraphs.push(String::new());
                    }
                }
            }
            Ok(Event::Text(text)) if in_run_text => {
                let run = text.unescape().map_err(|error| error.to_string())?;
                if let Some(paragraph) = current.as_mut() {
                    paragraph.push_str(&run);
                }
            }
            Ok(Event::End(element)) => match element.name().as_ref() {
                b"p:txBody" => {
                    if let Some(paragraphs) = shape_paragraphs.take() {
                        entries.push(paragraphs.join("\n"));
                    }
                }
                b"a:p" => {
                    if let (Some(paragraphs), Some(paragraph)) =
                        (shape_paragraphs.as_mut(), current.take())
                    {
                        paragraphs.push(paragraph);
                    }
                }
                b"a:t" => in_run_text = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(error) => return Err(error.to_string()),
        }
        buf.clear();
    }

    Ok(())
}
