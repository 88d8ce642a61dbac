//! Text extraction from various file formats

use crate::error::{Result, ResumeInspectorError};
use pulldown_cmark::{Event, Parser, Tag};
use quick_xml::events::Event as XmlEvent;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use std::path::Path;
use tokio::fs;

/// Main body part of a Word document package
const DOCX_DOCUMENT_PART: &str = "word/document.xml";

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeInspectorError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })?;
        Ok(text)
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        docx_to_text(&bytes).map_err(|e| match e {
            ResumeInspectorError::DocxExtraction(message) => ResumeInspectorError::DocxExtraction(format!(
                "Failed to extract text from DOCX '{}': {}",
                path.display(),
                message
            )),
            other => other,
        })
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown_content))
    }
}

/// Flatten markdown into plain lines: one per paragraph, heading or list item
/// (items keep a `- ` marker), with a blank line between blocks
pub fn markdown_to_text(markdown: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Item) => current.push_str("- "),
            Event::Text(text) | Event::Code(text) => current.push_str(&text),
            Event::SoftBreak | Event::HardBreak => flush_line(&mut current, &mut lines),
            Event::End(Tag::Item) => flush_line(&mut current, &mut lines),
            Event::End(Tag::Paragraph)
            | Event::End(Tag::Heading(..))
            | Event::End(Tag::CodeBlock(_))
            | Event::End(Tag::List(_)) => {
                flush_line(&mut current, &mut lines);
                lines.push(String::new());
            }
            _ => {}
        }
    }
    flush_line(&mut current, &mut lines);

    // Collapse runs of blank lines and drop the trailing one
    let mut text = String::new();
    let mut previous_blank = true;
    for line in lines {
        let blank = line.is_empty();
        if blank && previous_blank {
            continue;
        }
        text.push_str(&line);
        text.push('\n');
        previous_blank = blank;
    }
    text.trim_end().to_string()
}

/// Read the paragraphs of a `.docx` package, one trimmed line per non-empty paragraph
pub fn docx_to_text(bytes: &[u8]) -> Result<String> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| ResumeInspectorError::DocxExtraction(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name(DOCX_DOCUMENT_PART)
        .map_err(|e| ResumeInspectorError::DocxExtraction(format!("{}: {}", DOCX_DOCUMENT_PART, e)))?
        .read_to_string(&mut xml)?;

    document_xml_to_text(&xml)
}

/// Collect `<w:t>` runs per `<w:p>` paragraph of WordprocessingML
pub fn document_xml_to_text(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(XmlEvent::Start(element)) => match element.name().as_ref() {
                b"w:p" => current.clear(),
                b"w:t" => in_text_run = true,
                _ => {}
            },
            Ok(XmlEvent::Empty(element)) => match element.name().as_ref() {
                b"w:tab" => current.push('\t'),
                b"w:br" | b"w:cr" => current.push('\n'),
                _ => {}
            },
            Ok(XmlEvent::Text(text)) if in_text_run => {
                let text = text
                    .unescape()
                    .map_err(|e| ResumeInspectorError::DocxExtraction(e.to_string()))?;
                current.push_str(&text);
            }
            Ok(XmlEvent::End(element)) => match element.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => {
                    let paragraph = current.trim();
                    if !paragraph.is_empty() {
                        paragraphs.push(paragraph.to_string());
                    }
                    current.clear();
                }
                _ => {}
            },
            Ok(XmlEvent::Eof) => break,
            Err(e) => {
                return Err(ResumeInspectorError::DocxExtraction(format!(
                    "Malformed document XML at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}

fn flush_line(current: &mut String, lines: &mut Vec<String>) {
    for line in current.lines() {
        let line = line.trim();
        // A loose list item ends its paragraph before the item itself ends
        if !line.is_empty() && line != "-" {
            lines.push(line.to_string());
        }
    }
    current.clear();
}
