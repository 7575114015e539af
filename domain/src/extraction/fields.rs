//! Single-question field parsing.
//!
//! Works on one block as produced by
//! [`split_into_blocks`](super::blocks::split_into_blocks): the text starts
//! with its own `Question ID <hex>` header. The block layout is:
//!
//! ```text
//! Question ID ab12
//! <passage lines...>
//! <prompt line>
//! A. first option
//! B. second option
//! ID: ab12 Answer
//! Correct Answer: B
//! Rationale ... Question Difficulty Hard
//! Assessment ... Test Math Domain Algebra Skill Equations Difficulty Hard
//! ```
//!
//! Every field is extracted independently and falls back to its own default,
//! so a malformed block still produces a record as long as it has an id.
//!
//! The options region is located twice on purpose. The passage/prompt split
//! uses the first option line of the header-stripped body; the options
//! themselves are read from the first option line of the full block up to
//! the `ID:` echo that opens the metadata. The two can disagree on malformed
//! input.

use super::blocks::QUESTION_ID_RE;
use super::section::{SectionRule, extract_first_section};
use crate::core::string::collapse_whitespace;
use crate::question::{Question, QuestionId, QuestionOption, UNKNOWN_LABEL};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// A line that starts an option: optional indent, a letter A-D, a period.
static OPTION_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*([A-D])\.").expect("option line pattern"));

/// Start of the options region: an option line with at least one character
/// (newline included) after the period.
static OPTIONS_START_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?ms)^[ \t]*[A-D]\..").expect("options start pattern"));

static CORRECT_ANSWER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Correct Answer:\s*([A-D])").expect("correct answer pattern"));

static TEST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)Test\s*(.+?)\s*Domain").expect("test pattern"));

static DOMAIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)Domain\s*(.+?)\s*Skill").expect("domain pattern"));

static SKILL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)Skill\s*(.+?)\s*Difficulty").expect("skill pattern"));

/// Marker that opens the metadata block (an echo of the question id).
const ID_ECHO: &str = "ID:";

const RATIONALE: SectionRule = SectionRule::new(
    "Rationale",
    &["Question Difficulty", "Question Dif", "Assessment"],
);

const DIFFICULTY_ENDS: &[&str] = &["Assessment", "Test", "Domain"];

/// `"culty:"` catches headers whose "ffi" ligature was lost in extraction.
const DIFFICULTY: &[SectionRule] = &[
    SectionRule::new("Question Difficulty", DIFFICULTY_ENDS),
    SectionRule::new("culty:", DIFFICULTY_ENDS),
];

/// Parse every field of one question block.
///
/// Returns `None` when the block carries no `Question ID <hex>` header; the
/// caller is expected to skip such blocks. All other fields default
/// independently (see [`Question`] for the defaults).
pub fn parse_block(block_text: &str) -> Option<Question> {
    let id = QUESTION_ID_RE
        .captures(block_text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| QuestionId::try_new(m.as_str().trim()))?;

    let body = isolate_body(block_text, id.as_str());
    let (passage, prompt) = match OPTIONS_START_RE.find(&body) {
        Some(first_option) => split_passage_and_prompt(body[..first_option.start()].trim()),
        None => (body.clone(), String::new()),
    };

    Some(
        Question::new(id)
            .with_test(labeled_span(&TEST_RE, block_text))
            .with_domain(labeled_span(&DOMAIN_RE, block_text))
            .with_skill(labeled_span(&SKILL_RE, block_text))
            .with_difficulty(extract_first_section(block_text, DIFFICULTY))
            .with_passage(passage)
            .with_prompt(prompt)
            .with_options(parse_options(block_text))
            .with_correct_answer(correct_answer(block_text))
            .with_rationale(RATIONALE.extract(block_text)),
    )
}

/// Strip the id header and the inline `ID: <id>` echo from the block.
fn isolate_body(block_text: &str, id: &str) -> String {
    let body = QUESTION_ID_RE.replace(block_text, "");
    let mut body = body.trim().to_string();

    for require_answer in [false, true] {
        if let Some(range) = find_id_echo(&body, id, require_answer) {
            body = format!("{}{}", &body[..range.start], &body[range.end..])
                .trim()
                .to_string();
        }
    }

    body
}

/// Locate the first `ID:<ws>{id}<ws>` echo, optionally followed by `Answer`.
fn find_id_echo(body: &str, id: &str, require_answer: bool) -> Option<Range<usize>> {
    body.match_indices(ID_ECHO).find_map(|(start, _)| {
        let after_marker = &body[start + ID_ECHO.len()..];
        let after_id = after_marker.trim_start().strip_prefix(id)?;
        let mut rest = after_id.trim_start();
        if require_answer {
            rest = rest.strip_prefix("Answer")?;
        }
        Some(start..body.len() - rest.len())
    })
}

/// Last line is the prompt; everything above it is the passage.
fn split_passage_and_prompt(region: &str) -> (String, String) {
    let mut lines: Vec<&str> = region.lines().collect();
    let prompt = lines.pop().unwrap_or_default().trim().to_string();
    let passage = lines.join("\n").trim().to_string();
    (passage, prompt)
}

/// Read the options from the first option line up to the `ID:` echo.
fn parse_options(block_text: &str) -> Vec<QuestionOption> {
    let span = options_span(block_text);
    if span.is_empty() {
        return Vec::new();
    }

    let mut segments: Vec<Vec<&str>> = Vec::new();
    for line in span.lines() {
        match segments.last_mut() {
            Some(segment) if !OPTION_LINE_RE.is_match(line) => segment.push(line),
            _ => segments.push(vec![line]),
        }
    }

    segments
        .iter()
        .map(|lines| parse_option(&lines.join("\n")))
        .filter(|option| !option.value.is_empty())
        .collect()
}

/// Text from the first option letter to just before the next `ID:`.
///
/// At least one character must follow the `X.` before the echo; without an
/// echo there is no options region.
fn options_span(block_text: &str) -> &str {
    let Some(letter) = OPTION_LINE_RE.captures(block_text).and_then(|caps| caps.get(1)) else {
        return "";
    };
    let after_dot = letter.end() + 1;
    let Some(first) = block_text[after_dot..].chars().next() else {
        return "";
    };
    let search_from = after_dot + first.len_utf8();

    match block_text[search_from..].find(ID_ECHO) {
        Some(offset) => block_text[letter.start()..search_from + offset].trim(),
        None => "",
    }
}

/// `"B. text"` → value `B`, text `"B. text"`. Splits at the first period.
fn parse_option(segment: &str) -> QuestionOption {
    let segment = segment.trim();
    let (value, rest) = segment.split_once('.').unwrap_or((segment, ""));
    let value = value.trim();
    QuestionOption::new(value, format!("{value}. {}", rest.trim()))
}

fn correct_answer(block_text: &str) -> String {
    CORRECT_ANSWER_RE
        .captures(block_text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

fn labeled_span(pattern: &Regex, block_text: &str) -> String {
    pattern
        .captures(block_text)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| UNKNOWN_LABEL.to_string(), |m| collapse_whitespace(m.as_str()))
}
