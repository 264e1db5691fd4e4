mod common;

use std::fs;

use anyhow::Result;
use pretty_assertions::assert_eq;

use docx_quiz_csv::{
    convert::{convert_document, convert_documents, convert_paragraphs},
    output::QuizOut,
    quiz::anomaly::Anomaly,
};

fn read_csv(path: &std::path::Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(|f| f.to_owned()).collect());
    }
    Ok(rows)
}

#[test]
fn test_convert_document() -> Result<()> {
    let docx = common::build_docx(&common::sample_paragraphs())?;

    let quiz = convert_document("Basics.docx", &docx)?;

    assert_eq!(quiz.metadata.title, "Basics");
    assert_eq!(quiz.records.len(), 1);
    assert_eq!(quiz.records[0].correct_answer, "answers2");
    assert_eq!(quiz.records[0].remarks, "Basic math");

    Ok(())
}

#[test]
fn test_batch_isolates_failures() -> Result<()> {
    let good = common::build_docx(&common::sample_paragraphs())?;
    let bad = b"not a zip".to_vec();

    let results = convert_documents([
        ("good.docx", good.as_slice()),
        ("bad.docx", bad.as_slice()),
        ("good again.docx", good.as_slice()),
    ]);

    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    let error = results[1].as_ref().unwrap_err();
    assert!(format!("{:#}", error).contains("bad.docx"));
    assert_eq!(results[2].as_ref().unwrap().metadata.title, "good again");

    Ok(())
}

#[test]
fn test_save_quiz() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let root = dir.path().join("generated_files");

    let mut paragraphs = common::sample_paragraphs();
    paragraphs.extend(["2. Select all that apply: \"quoted\", with comma", "Answer: A, Q"]);
    let quiz = convert_paragraphs("Basics.docx", &paragraphs);
    assert_eq!(
        quiz.anomalies,
        vec![Anomaly::UnknownAnswerLetter {
            ordinal: 2,
            token: "Q".to_owned()
        }]
    );

    let saved = QuizOut::new(&root, true).save(&quiz)?;

    assert_eq!(saved.metadata_path.parent(), Some(root.join("Basics").as_path()));
    let metadata_name = saved.metadata_path.file_name().unwrap().to_string_lossy();
    assert!(metadata_name.starts_with("quiz_") && metadata_name.ends_with("_metadata.csv"));
    assert_eq!(metadata_name.len(), "quiz_".len() + 8 + "_metadata.csv".len());

    assert_eq!(
        read_csv(&saved.metadata_path)?,
        vec![
            vec!["Title", "Subtitle", "Description"],
            vec!["Basics", "Basics Quiz", "Intro line 1<br>Intro line 2"],
        ]
    );

    assert_eq!(
        read_csv(&saved.questions_path)?,
        vec![
            vec![
                "question",
                "question_type",
                "answer1",
                "answer2",
                "answer3",
                "answer4",
                "answer5",
                "correct_answer",
                "score",
                "remarks",
                "ordering",
            ],
            vec![
                "What is 2+2?",
                "single_choice",
                "3",
                "4",
                "",
                "",
                "",
                "answers2",
                "1",
                "Basic math",
                "1",
            ],
            vec![
                "Select all that apply: \"quoted\", with comma",
                "multiple_choice",
                "",
                "",
                "",
                "",
                "",
                "answers1",
                "1",
                "",
                "2",
            ],
        ]
    );

    let warnings_path = saved.warnings_path.expect("warnings file");
    assert_eq!(
        read_csv(&warnings_path)?,
        vec![
            vec!["ordering", "kind", "detail"],
            vec!["2", "unknown_answer_letter", "question 2: unknown answer \"Q\""],
        ]
    );

    Ok(())
}

#[test]
fn test_save_quiz_without_questions() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let quiz = convert_paragraphs("Empty.docx", &["Only a preamble"]);
    let saved = QuizOut::new(dir.path(), false).save(&quiz)?;

    assert_eq!(read_csv(&saved.questions_path)?.len(), 1);
    assert!(saved.warnings_path.is_none());

    Ok(())
}
