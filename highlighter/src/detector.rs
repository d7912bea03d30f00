use crate::models::{MatchCandidate, MatchTier};
use regex::Regex;
use std::sync::LazyLock;

const DURATION_UNIT: &str = r"(?:day|month|year|week)s?";

const NUMBER_WORDS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen",
    "eighteen", "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy",
    "eighty", "ninety", "hundred", "thousand",
];

/// Question tokens this short never become a fallback keyword.
const MIN_KEYWORD_LEN: usize = 4;

// Every pattern runs with Unicode disabled: `\b`, `\s` and case folding are ASCII.
static TIERS: LazyLock<Vec<(MatchTier, Regex)>> = LazyLock::new(|| {
    let numeric_duration = format!(r"(?i-u)[0-9]+[\s-]?{}\b", DURATION_UNIT);
    let word_duration = format!(
        r"(?i-u)\b(?:{})[\s-]?{}\b",
        NUMBER_WORDS.join("|"),
        DURATION_UNIT
    );

    vec![
        (MatchTier::NumericDuration, numeric_duration),
        (MatchTier::WordDuration, word_duration),
        (MatchTier::Percentage, r"(?-u)[0-9]+%".to_string()),
        (MatchTier::Amount, r"(?-u)\$?[0-9]+(?:,[0-9]{3})*(?:\.[0-9]+)?".to_string()),
    ]
    .into_iter()
    .map(|(tier, pattern)| {
        let regex = Regex::new(&pattern).expect("built-in tier pattern must compile");
        (tier, regex)
    })
    .collect()
});

/// Finds the single span of `text` worth emphasizing.
///
/// Pattern tiers are tried in priority order and the leftmost match of the
/// first matching tier wins. Only when no tier matches does the question get
/// consulted for a keyword. `None` means the answer should render unmodified.
pub fn detect_keyword(text: &str, question: &str) -> Option<MatchCandidate> {
    let candidate = match_patterns(text).or_else(|| match_question_keyword(text, question));

    match &candidate {
        Some(c) => log::debug!("Highlight candidate {:?} at {} via {:?}", c.span, c.start_index, c.tier),
        None => log::debug!("No highlight candidate in answer of {} bytes", text.len()),
    }

    candidate
}

fn match_patterns(text: &str) -> Option<MatchCandidate> {
    TIERS.iter().find_map(|(tier, regex)| {
        regex.find(text).map(|m| MatchCandidate {
            span: m.as_str().to_string(),
            start_index: m.start(),
            tier: *tier,
        })
    })
}

fn match_question_keyword(text: &str, question: &str) -> Option<MatchCandidate> {
    question_keywords(question).into_iter().find_map(|keyword| {
        let pattern = format!(r"(?i-u)\b{}\b", regex::escape(keyword));
        let regex = Regex::new(&pattern).ok()?;
        regex.find(text).map(|m| MatchCandidate {
            span: m.as_str().to_string(),
            start_index: m.start(),
            tier: MatchTier::QuestionKeyword,
        })
    })
}

/// Question words eligible as fallback keywords, longest first.
///
/// Anything outside ASCII letters and digits separates words. Words of equal
/// length keep their question order.
pub fn question_keywords(question: &str) -> Vec<&str> {
    let mut words: Vec<&str> = question
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| word.len() >= MIN_KEYWORD_LEN)
        .collect();

    words.sort_by(|a, b| b.len().cmp(&a.len()));
    words
}
