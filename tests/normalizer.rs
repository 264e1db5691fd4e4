mod common;

use pretty_assertions::assert_eq;

use docx_quiz_csv::quiz::{
    anomaly::Anomaly,
    extractor::extract_quiz,
    normalizer::{normalize_metadata, normalize_question, QuizMetadata, QuizRecord},
    question::{Question, QuestionType},
};

fn question(header: &str, answer: Option<&str>, options: &[&str]) -> Question {
    let mut anomalies = Vec::new();
    let mut question = Question::open(1, header);
    question.options = options.iter().map(|o| o.to_string()).collect();
    if let Some(answer) = answer {
        question.record_answer(answer, &mut anomalies);
    }
    question
}

fn normalize(question: &Question) -> (QuizRecord, Vec<Anomaly>) {
    let mut anomalies = Vec::new();
    let record = normalize_question(question, &mut anomalies);
    (record, anomalies)
}

#[test]
fn test_single_choice_record() {
    let quiz = extract_quiz("Basics.docx", &common::sample_paragraphs());
    let (record, anomalies) = normalize(&quiz.questions[0]);

    assert_eq!(
        record,
        QuizRecord {
            question: "What is 2+2?".to_owned(),
            question_type: QuestionType::SingleChoice,
            answer1: "3".to_owned(),
            answer2: "4".to_owned(),
            answer3: String::new(),
            answer4: String::new(),
            answer5: String::new(),
            correct_answer: "answers2".to_owned(),
            score: 1,
            remarks: "Basic math".to_owned(),
            ordering: 1,
        }
    );
    assert!(anomalies.is_empty());
}

#[test]
fn test_single_choice_letters() {
    for (letter, expected) in [
        ("A", "answers1"),
        ("B", "answers2"),
        ("C", "answers3"),
        ("D", "answers4"),
        ("E", "answers5"),
        ("F", ""),
        ("", ""),
    ] {
        let (record, _) = normalize(&question("Pick", Some(letter), &["a", "b"]));
        assert_eq!(record.correct_answer, expected, "letter {:?}", letter);
    }

    let (record, _) = normalize(&question("Pick", None, &[]));
    assert_eq!(record.correct_answer, "");
}

#[test]
fn test_true_false_record() {
    for (answer, expected) in [
        ("True", "answers1"),
        ("tRuE", "answers1"),
        ("False", "answers2"),
        ("T", "answers2"),
    ] {
        let (record, _) = normalize(&question("True or False: x", Some(answer), &[]));
        assert_eq!(record.correct_answer, expected, "answer {:?}", answer);
        assert_eq!(record.question_type, QuestionType::TrueFalse);
        assert_eq!(
            (record.answer1.as_str(), record.answer2.as_str()),
            ("TRUE", "FALSE")
        );
        assert_eq!(record.answer3, "");
    }

    let (record, anomalies) = normalize(&question(
        "True or False: with scanned options",
        Some("false"),
        &["Yes", "No", "Maybe"],
    ));
    assert_eq!(record.answer1, "TRUE");
    assert_eq!(record.answer2, "FALSE");
    assert_eq!(record.answer3, "");
    assert_eq!(
        anomalies,
        vec![Anomaly::IgnoredOptions {
            ordinal: 1,
            count: 3
        }]
    );
}

#[test]
fn test_multiple_choice_record() {
    let (record, _) = normalize(&question(
        "Select all that apply: even numbers",
        Some("B, D"),
        &["1", "2", "3", "4"],
    ));
    assert_eq!(record.question_type, QuestionType::MultipleChoice);
    assert_eq!(record.correct_answer, "answers2|answers4");
    assert_eq!(record.answer4, "4");
}

#[test]
fn test_options_are_truncated_to_five() {
    let (record, anomalies) = normalize(&question(
        "Pick",
        Some("E"),
        &["a", "b", "c", "d", "e", "f", "g"],
    ));
    assert_eq!(record.answer5, "e");
    assert_eq!(record.correct_answer, "answers5");
    assert_eq!(
        anomalies,
        vec![Anomaly::TruncatedOptions {
            ordinal: 1,
            count: 7
        }]
    );
}

#[test]
fn test_metadata() {
    let quiz = extract_quiz("Chapter 1.docx", &common::sample_paragraphs());
    assert_eq!(
        normalize_metadata(&quiz),
        QuizMetadata {
            title: "Chapter 1".to_owned(),
            subtitle: "Chapter 1 Quiz".to_owned(),
            description: "Intro line 1<br>Intro line 2".to_owned(),
        }
    );
}
