use std::io::{Read, Seek};

use anyhow::{ensure, Context, Result};
use quick_xml::{events::Event, Reader};

use crate::utility::zip::ZipReader;

const DOCUMENT_XML_PATH: &str = "word/document.xml";

// 段落の中でも本文として読まない要素
// テキストボックスは mc:Choice と mc:Fallback に二重に書かれる
const SKIPPED_ELEMENTS: [&[u8]; 7] = [
    b"pPr",
    b"AlternateContent",
    b"drawing",
    b"pict",
    b"object",
    b"txbxContent",
    b"instrText",
];

/// Reads the paragraph texts of a .docx container, in document order.
pub fn read_docx_paragraphs<R: Read + Seek>(reader: R) -> Result<Vec<String>> {
    let mut zip_reader = ZipReader::new(reader).context("Not a .docx (zip) file")?;
    let mut entry = zip_reader.get_by_path(DOCUMENT_XML_PATH)?;
    let xml = entry.as_text()?;

    parse_document_xml(&xml).with_context(|| format!("Failed to parse {}", DOCUMENT_XML_PATH))
}

// <w:body> 直下の段落 <w:p> ごとに、ラン中の <w:t> を連結する
// <w:tab/> はタブ、<w:br/> <w:cr/> は改行
// 表の中の段落は含めない
pub fn parse_document_xml(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();

    // 開いている要素の数
    let mut depth = 0;
    let mut body_depth = None;

    let mut paragraph: Option<(usize, String)> = None;
    let mut skip_depth = None;
    let mut in_text = false;

    loop {
        let position = reader.buffer_position();
        let event = reader
            .read_event()
            .with_context(|| format!("Malformed XML at byte {}", position))?;

        match event {
            Event::Start(e) => {
                let name = e.local_name();
                let name = name.as_ref();

                if name == b"body" && body_depth.is_none() {
                    body_depth = Some(depth);
                } else if let Some((paragraph_depth, _)) = &paragraph {
                    if skip_depth.is_none() && depth > *paragraph_depth {
                        if SKIPPED_ELEMENTS.iter().any(|&s| s == name) {
                            skip_depth = Some(depth);
                        } else if name == b"t" {
                            in_text = true;
                        }
                    }
                } else if name == b"p" && body_depth.map(|d| d + 1) == Some(depth) {
                    paragraph = Some((depth, String::new()));
                }

                depth += 1;
            }

            Event::End(e) => {
                depth -= 1;

                if skip_depth == Some(depth) {
                    skip_depth = None;
                    continue;
                }

                let name = e.local_name();
                match name.as_ref() {
                    b"t" => in_text = false,
                    b"p" => {
                        if let Some((paragraph_depth, text)) = paragraph.take() {
                            if paragraph_depth == depth {
                                paragraphs.push(text);
                            } else {
                                paragraph = Some((paragraph_depth, text));
                            }
                        }
                    }
                    _ => {}
                }
            }

            Event::Empty(e) => {
                let name = e.local_name();
                let name = name.as_ref();

                match &mut paragraph {
                    Some((_, text)) => {
                        if skip_depth.is_none() {
                            match name {
                                b"tab" => text.push('\t'),
                                b"br" | b"cr" => text.push('\n'),
                                _ => {}
                            }
                        }
                    }
                    None => {
                        if name == b"p" && body_depth.map(|d| d + 1) == Some(depth) {
                            paragraphs.push(String::new());
                        }
                    }
                }
            }

            Event::Text(e) => {
                if in_text && skip_depth.is_none() {
                    if let Some((_, text)) = &mut paragraph {
                        let unescaped = e.unescape().context("Malformed text in <w:t>")?;
                        text.push_str(&unescaped);
                    }
                }
            }

            Event::Eof => break,

            _ => {}
        }
    }

    ensure!(body_depth.is_some(), "Document body is missing");

    Ok(paragraphs)
}
