use std::sync::OnceLock;

use regex::Regex;

static RUSSIAN_LETTERS: OnceLock<Regex> = OnceLock::new();

/// Heuristic, not real language detection: text counts as Russian if it
/// contains at least one letter in the Russian alphabet class, both cases,
/// with ё/Ё named explicitly since they sit outside the а-я block.
pub fn is_russian_text(text: &str) -> bool {
    let pattern =
        RUSSIAN_LETTERS.get_or_init(|| Regex::new("[а-яА-ЯёЁ]").expect("valid letter class"));
    pattern.is_match(text)
}
