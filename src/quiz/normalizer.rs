use serde::Serialize;

use crate::quiz::{
    anomaly::Anomaly,
    extractor::ExtractedQuiz,
    question::{Question, QuestionType, SLOT_COUNT},
};

pub const DEFAULT_SCORE: u32 = 1;

const SUBTITLE_SUFFIX: &str = " Quiz";
const SLOT_SEPARATOR: &str = "|";

pub const METADATA_COLUMNS: [&str; 3] = ["Title", "Subtitle", "Description"];

pub const RECORD_COLUMNS: [&str; 11] = [
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
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct QuizMetadata {
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizRecord {
    pub question: String,
    pub question_type: QuestionType,
    pub answer1: String,
    pub answer2: String,
    pub answer3: String,
    pub answer4: String,
    pub answer5: String,
    pub correct_answer: String,
    pub score: u32,
    pub remarks: String,
    pub ordering: usize,
}

// 出力の列名 answers1 .. answers5 に合わせる
pub fn slot_reference(slot: usize) -> String {
    format!("answers{}", slot)
}

pub fn normalize_metadata(quiz: &ExtractedQuiz) -> QuizMetadata {
    QuizMetadata {
        title: quiz.title.clone(),
        subtitle: format!("{}{}", &quiz.title, SUBTITLE_SUFFIX),
        description: quiz.description(),
    }
}

/// Maps a question onto the fixed five-slot row.
pub fn normalize_question(question: &Question, anomalies: &mut Vec<Anomaly>) -> QuizRecord {
    let scanned = question.options.len();
    match question.question_type() {
        QuestionType::TrueFalse if scanned > 0 => anomalies.push(Anomaly::IgnoredOptions {
            ordinal: question.ordinal,
            count: scanned,
        }),
        QuestionType::SingleChoice | QuestionType::MultipleChoice if scanned > SLOT_COUNT => {
            anomalies.push(Anomaly::TruncatedOptions {
                ordinal: question.ordinal,
                count: scanned,
            })
        }
        _ => {}
    }

    let mut answers = question.answer.choices(&question.options).into_iter();
    let mut next_answer = || answers.next().unwrap_or_default();

    let correct_answer = question
        .answer
        .resolve()
        .into_iter()
        .filter(|&slot| (1..=SLOT_COUNT).contains(&slot))
        .map(slot_reference)
        .collect::<Vec<_>>()
        .join(SLOT_SEPARATOR);

    QuizRecord {
        question: question.text.clone(),
        question_type: question.question_type(),
        answer1: next_answer(),
        answer2: next_answer(),
        answer3: next_answer(),
        answer4: next_answer(),
        answer5: next_answer(),
        correct_answer,
        score: DEFAULT_SCORE,
        remarks: question.rationale.clone(),
        ordering: question.ordinal,
    }
}
