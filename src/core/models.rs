use crate::core::language;

/// Fallback shown when the backend answers 2xx but without a usable joke.
pub const NO_JOKE_FALLBACK: &str = "Нет анекдота";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joke {
    pub text: String,
    pub source: Option<String>,
    pub is_russian: bool,
}

impl Joke {
    /// Builds a joke from raw response fields, applying the default-fallback
    /// semantics: empty or absent text becomes [`NO_JOKE_FALLBACK`], an empty
    /// source is dropped. The Russian flag is recomputed from whatever text
    /// ends up displayed.
    pub fn from_response(text: Option<String>, source: Option<String>) -> Self {
        let text = match text {
            Some(text) if !text.is_empty() => text,
            _ => NO_JOKE_FALLBACK.to_string(),
        };
        let source = source.filter(|s| !s.is_empty());
        let is_russian = language::is_russian_text(&text);

        Self { text, source, is_russian }
    }

    pub fn attribution(&self) -> Option<String> {
        self.source.as_ref().map(|source| format!("Источник: {}", source))
    }
}
