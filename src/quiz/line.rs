use once_cell::sync::Lazy;
use regex::Regex;

use crate::utility::str::parse_number;

pub const SECTION_MARKER: &str = "Quiz Questions";

const ANSWER_MARKERS: [&str; 2] = ["Correct Answer:", "Answer:"];
const RATIONALE_MARKER: &str = "Rationale:";
const BULLETS: [char; 4] = ['•', '◦', '▪', '●'];

/// One trimmed paragraph, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizLine<'a> {
    Empty,
    SectionMarker,
    // 番号は範囲外でもそのまま返す（桁あふれは None）
    Header {
        number: Option<usize>,
        text: &'a str,
    },
    Answer {
        answer: &'a str,
        rationale: Option<&'a str>,
    },
    Rationale(&'a str),
    Options(Vec<&'a str>),
    Text(&'a str),
}

pub fn classify_line(line: &str) -> QuizLine<'_> {
    // "1. ..." "２０. ..."
    static REGEX_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^(\d+)\.\s+(.*)$").unwrap());

    let line = line.trim();

    if line.is_empty() {
        return QuizLine::Empty;
    }

    if line.contains(SECTION_MARKER) {
        return QuizLine::SectionMarker;
    }

    if let Some(captures) = REGEX_HEADER.captures(line) {
        let number = parse_number(&captures[1]).ok();
        let text = captures.get(2).map_or("", |m| m.as_str());
        return QuizLine::Header { number, text };
    }

    if let Some(rest) = ANSWER_MARKERS.iter().find_map(|&m| line.strip_prefix(m)) {
        return match rest.split_once(RATIONALE_MARKER) {
            Some((answer, rationale)) => QuizLine::Answer {
                answer: answer.trim(),
                rationale: Some(rationale.trim()),
            },
            None => QuizLine::Answer {
                answer: rest.trim(),
                rationale: None,
            },
        };
    }

    if line.contains(RATIONALE_MARKER) {
        let rationale = line.split_once(':').map_or("", |(_, r)| r);
        return QuizLine::Rationale(rationale.trim());
    }

    if let Some(rest) = line.strip_prefix(&BULLETS[..]) {
        return QuizLine::Options(vec![rest.trim()]);
    }

    if is_lettered_option(line) {
        return QuizLine::Options(split_lettered_options(line));
    }

    QuizLine::Text(line)
}

fn is_lettered_option(line: &str) -> bool {
    let mut chars = line.chars();
    matches!((chars.next(), chars.next()), (Some('A'..='E'), Some(')')))
}

// "A) 3   B) 4" のように 1 行に複数並ぶことがある
fn split_lettered_options(line: &str) -> Vec<&str> {
    static REGEX_OPTION_LETTER: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?:^|\s)[A-E]\)").unwrap());

    let letters: Vec<_> = REGEX_OPTION_LETTER.find_iter(line).collect();

    letters
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let end = letters.get(i + 1).map_or(line.len(), |next| next.start());
            line[m.end()..end].trim()
        })
        .collect()
}
