//! Whole-phrase vocabulary matching shared by the skill and section checks.

use regex::RegexSet;

/// Case-insensitive pattern for `phrase` that only matches when the text has no word
/// character directly before or after it. Unlike plain `\b`, this still works for phrases
/// that start or end with punctuation (`c++`, `c#`, `natural language processing (nlp)`).
fn whole_phrase_pattern(phrase: &str) -> String {
    format!(
        r"(?i)\b{{start-half}}{}\b{{end-half}}",
        regex::escape(phrase)
    )
}

/// One set over the whole vocabulary. `matches` yields indices in vocabulary order.
pub fn whole_phrase_set(phrases: &[&str]) -> Result<RegexSet, regex::Error> {
    RegexSet::new(phrases.iter().map(|p| whole_phrase_pattern(p)))
}

/// First character upper-cased, the rest lower-cased (`"sql"` → `"Sql"`, `"aws"` → `"Aws"`).
pub fn display_case(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
