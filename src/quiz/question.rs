use serde::Serialize;

use crate::quiz::anomaly::Anomaly;

// 出力で扱う選択肢の数
pub const SLOT_COUNT: usize = 5;

const TRUE_FALSE_PREFIX: &str = "True or False:";
const MULTIPLE_CHOICE_PREFIX: &str = "Select all that apply:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    SingleChoice,
    MultipleChoice,
    TrueFalse,
}

impl QuestionType {
    // 設問文の書き出しで決まる
    pub fn of(text: &str) -> Self {
        if text.starts_with(TRUE_FALSE_PREFIX) {
            Self::TrueFalse
        } else if text.starts_with(MULTIPLE_CHOICE_PREFIX) {
            Self::MultipleChoice
        } else {
            Self::SingleChoice
        }
    }
}

/// A-E を 1-5 に
pub fn slot_of_letter(letter: char) -> Option<usize> {
    match letter {
        'A' => Some(1),
        'B' => Some(2),
        'C' => Some(3),
        'D' => Some(4),
        'E' => Some(5),
        _ => None,
    }
}

/// Correct answer of a question, shaped by its type.
///
/// The variant is chosen once when the question header is read and never
/// changes; later "Answer:" lines only fill in the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    SingleChoice { letter: Option<char> },
    MultipleChoice { slots: Vec<usize> },
    TrueFalse { word: Option<String> },
}

impl Answer {
    pub fn new(question_type: QuestionType) -> Self {
        match question_type {
            QuestionType::SingleChoice => Self::SingleChoice { letter: None },
            QuestionType::MultipleChoice => Self::MultipleChoice { slots: Vec::new() },
            QuestionType::TrueFalse => Self::TrueFalse { word: None },
        }
    }

    pub fn question_type(&self) -> QuestionType {
        match self {
            Self::SingleChoice { .. } => QuestionType::SingleChoice,
            Self::MultipleChoice { .. } => QuestionType::MultipleChoice,
            Self::TrueFalse { .. } => QuestionType::TrueFalse,
        }
    }

    pub fn is_recorded(&self) -> bool {
        match self {
            Self::SingleChoice { letter } => letter.is_some(),
            Self::MultipleChoice { slots } => !slots.is_empty(),
            Self::TrueFalse { word } => word.is_some(),
        }
    }

    /// Records the text found after an "Answer:" marker. A later marker for the
    /// same question replaces the earlier one.
    pub fn record(&mut self, text: &str, ordinal: usize, anomalies: &mut Vec<Anomaly>) {
        let text = text.trim();

        match self {
            Self::SingleChoice { letter } => {
                *letter = text.chars().next();
                if let Some(c) = *letter {
                    if slot_of_letter(c).is_none() {
                        anomalies.push(Anomaly::UnknownAnswerLetter {
                            ordinal,
                            token: c.to_string(),
                        });
                    }
                }
            }

            Self::MultipleChoice { slots } => {
                slots.clear();
                for token in text.split(',').map(str::trim) {
                    if token.is_empty() {
                        continue;
                    }
                    let mut chars = token.chars();
                    match chars.next().and_then(slot_of_letter) {
                        Some(slot) => {
                            slots.push(slot);
                            // "B" "B)" 以外は読み捨てた部分がある
                            if !matches!(chars.as_str(), "" | ")") {
                                anomalies.push(Anomaly::PartialAnswerToken {
                                    ordinal,
                                    token: token.to_owned(),
                                });
                            }
                        }
                        None => anomalies.push(Anomaly::UnknownAnswerLetter {
                            ordinal,
                            token: token.to_owned(),
                        }),
                    }
                }
            }

            Self::TrueFalse { word } => {
                // "True" / "false" はそのまま、それ以外は先頭 1 文字
                let lower = text.to_ascii_lowercase();
                *word = if lower.starts_with("true") {
                    Some(text[.."true".len()].to_owned())
                } else if lower.starts_with("false") {
                    Some(text[.."false".len()].to_owned())
                } else if text.is_empty() {
                    None
                } else {
                    anomalies.push(Anomaly::UnknownTrueFalse {
                        ordinal,
                        answer: text.to_owned(),
                    });
                    text.chars().next().map(|c| c.to_string())
                };
            }
        }
    }

    /// Slot numbers (1-based) of the correct answer. Empty when unresolvable.
    pub fn resolve(&self) -> Vec<usize> {
        match self {
            Self::SingleChoice { letter } => letter.and_then(slot_of_letter).into_iter().collect(),
            Self::MultipleChoice { slots } => slots.clone(),
            Self::TrueFalse { word } => match word {
                Some(word) if word.eq_ignore_ascii_case("true") => vec![1],
                _ => vec![2],
            },
        }
    }

    /// Answer texts to place in the slots, given the scanned option lines.
    pub fn choices(&self, scanned: &[String]) -> Vec<String> {
        match self {
            Self::TrueFalse { .. } => vec!["TRUE".to_owned(), "FALSE".to_owned()],
            _ => scanned.iter().take(SLOT_COUNT).cloned().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub ordinal: usize,
    pub options: Vec<String>,
    pub answer_raw: String,
    pub answer: Answer,
    pub rationale: String,
}

impl Question {
    pub fn open(ordinal: usize, text: &str) -> Self {
        let text = text.trim().to_owned();
        let answer = Answer::new(QuestionType::of(&text));
        Self {
            text,
            ordinal,
            options: Vec::new(),
            answer_raw: String::new(),
            answer,
            rationale: String::new(),
        }
    }

    pub fn question_type(&self) -> QuestionType {
        self.answer.question_type()
    }

    pub fn record_answer(&mut self, text: &str, anomalies: &mut Vec<Anomaly>) {
        self.answer_raw = text.trim().to_owned();
        self.answer.record(text, self.ordinal, anomalies);
    }
}
