use std::collections::HashSet;

use log::debug;

use crate::{
    quiz::{
        anomaly::Anomaly,
        line::{classify_line, QuizLine, SECTION_MARKER},
        question::Question,
    },
    utility::file_title,
};

// これより大きい番号は本文中の数字とみなす
pub const MAX_ORDINAL: usize = 20;

pub const DESCRIPTION_LINE_BREAK: &str = "<br>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedQuiz {
    pub title: String,
    pub preamble: Vec<String>,
    pub questions: Vec<Question>,
    pub anomalies: Vec<Anomaly>,
}

impl ExtractedQuiz {
    pub fn description(&self) -> String {
        self.preamble.join(DESCRIPTION_LINE_BREAK)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanState {
    Preamble,
    InQuestion { current: Option<Question> },
}

#[derive(Debug, Default)]
pub struct Accumulator {
    pub preamble: Vec<String>,
    pub questions: Vec<Question>,
    pub anomalies: Vec<Anomaly>,
    seen_ordinals: HashSet<usize>,
}

impl Accumulator {
    fn close(&mut self, question: Question) {
        if !question.answer.is_recorded() {
            self.anomalies.push(Anomaly::MissingCorrectAnswer {
                ordinal: question.ordinal,
            });
        }
        self.questions.push(question);
    }
}

/// Splits a document into its preamble and questions.
///
/// `file_name` only supplies the title; the paragraphs are scanned in order.
pub fn extract_quiz<S: AsRef<str>>(file_name: &str, paragraphs: &[S]) -> ExtractedQuiz {
    let mut acc = Accumulator::default();
    let mut state = ScanState::Preamble;

    for paragraph in paragraphs {
        state = step(state, paragraph.as_ref(), &mut acc);
    }

    let quiz = finish(state, acc, file_title(file_name));

    debug!(
        "{}: {} preamble lines, {} questions, {} anomalies",
        &quiz.title,
        quiz.preamble.len(),
        quiz.questions.len(),
        quiz.anomalies.len()
    );

    quiz
}

pub fn step(state: ScanState, line: &str, acc: &mut Accumulator) -> ScanState {
    let line = line.trim();

    match state {
        ScanState::Preamble => {
            if line.contains(SECTION_MARKER) {
                return ScanState::InQuestion { current: None };
            }
            if !line.is_empty() {
                acc.preamble.push(line.to_owned());
            }
            ScanState::Preamble
        }

        ScanState::InQuestion { current } => ScanState::InQuestion {
            current: step_question(current, classify_line(line), acc),
        },
    }
}

pub fn finish(state: ScanState, mut acc: Accumulator, title: String) -> ExtractedQuiz {
    match state {
        ScanState::Preamble => acc.anomalies.push(Anomaly::MissingSectionMarker),
        ScanState::InQuestion { current } => {
            if let Some(question) = current {
                acc.close(question);
            }
        }
    }

    ExtractedQuiz {
        title,
        preamble: acc.preamble,
        questions: acc.questions,
        anomalies: acc.anomalies,
    }
}

fn step_question(
    mut current: Option<Question>,
    line: QuizLine,
    acc: &mut Accumulator,
) -> Option<Question> {
    match line {
        QuizLine::Header { number, text } => return open_question(current, number, text, acc),

        QuizLine::Answer { answer, rationale } => {
            if let Some(question) = current.as_mut() {
                question.record_answer(answer, &mut acc.anomalies);
                if let Some(rationale) = rationale {
                    question.rationale = rationale.to_owned();
                }
            }
        }

        QuizLine::Rationale(rationale) => {
            if let Some(question) = current.as_mut() {
                question.rationale = rationale.to_owned();
            }
        }

        QuizLine::Options(options) => {
            if let Some(question) = current.as_mut() {
                question
                    .options
                    .extend(options.into_iter().map(|o| o.to_owned()));
            }
        }

        // 区切り線などの地の文
        QuizLine::Empty | QuizLine::SectionMarker | QuizLine::Text(_) => {}
    }

    current
}

fn open_question(
    current: Option<Question>,
    number: Option<usize>,
    text: &str,
    acc: &mut Accumulator,
) -> Option<Question> {
    let number = match number {
        Some(n) if (1..=MAX_ORDINAL).contains(&n) => n,
        Some(n) => {
            acc.anomalies.push(Anomaly::OutOfRangeHeader { number: n });
            return current;
        }
        None => return current,
    };

    if !acc.seen_ordinals.insert(number) {
        acc.anomalies.push(Anomaly::DuplicateOrdinal { ordinal: number });
        return current;
    }

    if let Some(previous) = current {
        acc.close(previous);
    }

    Some(Question::open(number, text))
}
