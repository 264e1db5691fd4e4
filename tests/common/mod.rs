#![allow(dead_code)]

use std::io::{Cursor, Write};

use anyhow::Result;

pub fn sample_paragraphs() -> Vec<&'static str> {
    vec![
        "Intro line 1",
        "",
        "Intro line 2",
        "Quiz Questions",
        "1. What is 2+2?",
        "A) 3",
        "B) 4",
        "Correct Answer: B",
        "Rationale: Basic math",
    ]
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn document_xml(paragraphs: &[&str]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#,
    );
    for paragraph in paragraphs {
        if paragraph.is_empty() {
            xml.push_str("<w:p/>");
        } else {
            xml.push_str(&format!(
                r#"<w:p w:rsidR="00A1"><w:pPr><w:pStyle w:val="Normal"/></w:pPr><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
                escape(paragraph)
            ));
        }
    }
    xml.push_str("</w:body></w:document>");
    xml
}

pub fn build_docx(paragraphs: &[&str]) -> Result<Vec<u8>> {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));

    zip.start_file("[Content_Types].xml", zip::write::FileOptions::default())?;
    zip.write_all(br#"<?xml version="1.0" encoding="UTF-8"?><Types/>"#)?;

    zip.start_file("word/document.xml", zip::write::FileOptions::default())?;
    zip.write_all(document_xml(paragraphs).as_bytes())?;

    Ok(zip.finish()?.into_inner())
}
