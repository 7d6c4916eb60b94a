//! Helpers for integration tests: synthetic OOXML fixtures assembled
//! with the `zip` crate.

use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

fn zip_with(parts: &[(&str, String)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in parts {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .expect("zip entry should start");
        writer
            .write_all(content.as_bytes())
            .expect("zip entry should write");
    }
    writer
        .finish()
        .expect("zip archive should finish")
        .into_inner()
}

/// Minimal `.docx` with one `w:p` per entry; empty entries become
/// self-closed paragraphs, as Word writes them.
pub fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
    let mut body = String::new();
    for paragraph in paragraphs {
        if paragraph.is_empty() {
            body.push_str("<w:p/>");
        } else {
            body.push_str(&format!(
                "<w:p><w:r><w:t xml:space=\"preserve\">{paragraph}</w:t></w:r></w:p>"
            ));
        }
    }
    let document = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{body}</w:body></w:document>"
    );
    zip_with(&[("word/document.xml", document)])
}

/// Minimal `.pptx` with one slide per entry; each slide holds one text
/// shape per string.
pub fn pptx_bytes(slides: &[&[&str]]) -> Vec<u8> {
    let parts: Vec<(String, String)> = slides
        .iter()
        .enumerate()
        .map(|(index, shapes)| {
            let mut tree = String::new();
            for shape in shapes.iter() {
                tree.push_str(&format!(
                    "<p:sp><p:txBody><a:bodyPr/><a:p><a:r>\
                     <a:t>{shape}</a:t></a:r></a:p></p:txBody></p:sp>"
                ));
            }
            let slide = format!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
                 <p:sld xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" \
                 xmlns:p=\"http://schemas.openxmlformats.org/presentationml/2006/main\">\
                 <p:cSld><p:spTree>{tree}</p:spTree></p:cSld></p:sld>"
            );
            (format!("ppt/slides/slide{}.xml", index + 1), slide)
        })
        .collect();

    let borrowed: Vec<(&str, String)> = parts
        .iter()
        .map(|(name, content)| (name.as_str(), content.clone()))
        .collect();
    zip_with(&borrowed)
}
