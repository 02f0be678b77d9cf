//! DOCX text: every top-level paragraph of `word/document.xml`, untrimmed, one per line.
//! Empty paragraphs are kept as empty lines.

use std::io::{Cursor, Read};

use quick_xml::escape::resolve_xml_entity;
use quick_xml::events::Event;
use quick_xml::Reader;

use super::ExtractionError;

fn xml_error(err: impl std::fmt::Display) -> ExtractionError {
    ExtractionError::Xml(err.to_string())
}

pub fn extract_docx_text(data: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))?;

    let mut document_file = archive.by_name("word/document.xml")?;
    let mut xml = String::new();
    document_file.read_to_string(&mut xml)?;

    let mut reader = Reader::from_str(&xml);

    let mut current = String::new();
    let mut lines = Vec::new();
    // Nesting depth of `w:p`. Text boxes carry their own paragraphs inside a run; their
    // text stays in the enclosing top-level paragraph.
    let mut paragraph_depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => paragraph_depth += 1,
                b"w:t" => in_text = paragraph_depth > 0,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:p" if paragraph_depth > 0 => {
                    paragraph_depth -= 1;
                    if paragraph_depth == 0 {
                        lines.push(std::mem::take(&mut current));
                    } else {
                        current.push('\n');
                    }
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" if paragraph_depth == 0 => lines.push(String::new()),
                b"w:tab" if paragraph_depth > 0 => current.push('\t'),
                b"w:br" | b"w:cr" if paragraph_depth > 0 => current.push('\n'),
                _ => {}
            },
            Event::Text(e) if in_text => {
                current.push_str(&e.xml_content().map_err(xml_error)?);
            }
            Event::GeneralRef(e) if in_text => {
                if let Some(ch) = e.resolve_char_ref().map_err(xml_error)? {
                    current.push(ch);
                } else {
                    let name = e.decode().map_err(xml_error)?;
                    if let Some(value) = resolve_xml_entity(&name) {
                        current.push_str(value);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(lines.join("\n"))
}

/// Minimal DOCX with one `w:p` per entry. Entries are inserted as raw XML text.
#[cfg(test)]
pub(crate) fn build_test_docx(paragraphs: &[&str]) -> Vec<u8> {
    use std::io::Write;

    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored);
    writer.start_file("word/document.xml", options).unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}
