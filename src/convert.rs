use std::io::Cursor;

use anyhow::{Context, Result};

use crate::{
    docx::read_docx_paragraphs,
    quiz::{
        anomaly::Anomaly,
        extractor::extract_quiz,
        normalizer::{normalize_metadata, normalize_question, QuizMetadata, QuizRecord},
    },
};

/// Everything produced from one document, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedQuiz {
    pub metadata: QuizMetadata,
    pub records: Vec<QuizRecord>,
    pub anomalies: Vec<Anomaly>,
}

pub fn convert_paragraphs<S: AsRef<str>>(file_name: &str, paragraphs: &[S]) -> ConvertedQuiz {
    let quiz = extract_quiz(file_name, paragraphs);

    let metadata = normalize_metadata(&quiz);

    let mut anomalies = quiz.anomalies;
    let records = quiz
        .questions
        .iter()
        .map(|q| normalize_question(q, &mut anomalies))
        .collect();

    ConvertedQuiz {
        metadata,
        records,
        anomalies,
    }
}

/// Converts one .docx byte stream. Only container or XML problems fail;
/// content problems end up in `anomalies`.
pub fn convert_document(file_name: &str, bytes: &[u8]) -> Result<ConvertedQuiz> {
    let paragraphs = read_docx_paragraphs(Cursor::new(bytes))
        .with_context(|| format!("Failed to read document: {}", file_name))?;

    Ok(convert_paragraphs(file_name, &paragraphs))
}

/// Converts every document independently; a failing one does not stop the rest.
pub fn convert_documents<'a, I>(documents: I) -> Vec<Result<ConvertedQuiz>>
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    documents
        .into_iter()
        .map(|(file_name, bytes)| convert_document(file_name, bytes))
        .collect()
}
