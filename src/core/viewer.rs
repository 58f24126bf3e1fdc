use crate::core::Joke;

pub const JOKE_LOADING_PLACEHOLDER: &str = "Загрузка...";
pub const JOKE_ERROR_PLACEHOLDER: &str = "Ошибка загрузки анекдота";
pub const TRANSLATION_LOADING_PLACEHOLDER: &str = "Перевод...";
pub const TRANSLATION_ERROR_PLACEHOLDER: &str = "Ошибка перевода";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JokeState {
    Idle,
    Loading,
    Loaded(Joke),
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationState {
    Hidden,
    Loading,
    Loaded(String),
    Error,
}

/// The viewer's two display regions as explicit state machines, plus the
/// request tokens that make completion order irrelevant: a result only
/// applies if its token is still the most recently issued one for that
/// region, so the last *issued* request wins, not the last one to resolve.
pub struct ViewerState {
    joke: JokeState,
    translation: TranslationState,
    joke_request: u64,
    translation_request: u64,
    next_request: u64,
}

impl ViewerState {
    pub fn new() -> Self {
        Self {
            joke: JokeState::Idle,
            translation: TranslationState::Hidden,
            joke_request: 0,
            translation_request: 0,
            next_request: 0,
        }
    }

    fn next_token(&mut self) -> u64 {
        self.next_request += 1;
        self.next_request
    }

    /// Starts a joke load: the joke region shows the loading placeholder and
    /// any translation (shown or still in flight) is dropped. Returns the
    /// token the eventual result must carry.
    pub fn begin_load(&mut self) -> u64 {
        self.joke = JokeState::Loading;
        self.translation = TranslationState::Hidden;
        // Tokens start at 1, so 0 can never match a late translation result.
        self.translation_request = 0;
        self.joke_request = self.next_token();
        self.joke_request
    }

    pub fn apply_joke_result(&mut self, request: u64, result: Result<Joke, String>) {
        if request != self.joke_request {
            return;
        }
        self.joke = match result {
            Ok(joke) => JokeState::Loaded(joke),
            Err(_) => JokeState::Error,
        };
    }

    /// Starts a translation of the current joke. Returns `None` without any
    /// state change unless a joke is actually loaded, which is the guard
    /// against translating the loading or error placeholders.
    pub fn begin_translate(&mut self) -> Option<(u64, String)> {
        let text = match &self.joke {
            JokeState::Loaded(joke) => joke.text.clone(),
            _ => return None,
        };
        self.translation = TranslationState::Loading;
        self.translation_request = self.next_token();
        Some((self.translation_request, text))
    }

    pub fn apply_translation_result(&mut self, request: u64, result: Result<String, String>) {
        if request != self.translation_request {
            return;
        }
        self.translation = match result {
            Ok(translation) => TranslationState::Loaded(translation),
            Err(_) => TranslationState::Error,
        };
    }

    pub fn joke(&self) -> &JokeState {
        &self.joke
    }

    pub fn joke_display_text(&self) -> &str {
        match &self.joke {
            JokeState::Idle | JokeState::Loading => JOKE_LOADING_PLACEHOLDER,
            JokeState::Loaded(joke) => &joke.text,
            JokeState::Error => JOKE_ERROR_PLACEHOLDER,
        }
    }

    /// Attribution line under the joke, empty when the response had no source.
    pub fn attribution(&self) -> Option<String> {
        match &self.joke {
            JokeState::Loaded(joke) => joke.attribution(),
            _ => None,
        }
    }

    /// The translate control is offered only for a loaded, non-Russian joke.
    pub fn translate_available(&self) -> bool {
        matches!(&self.joke, JokeState::Loaded(joke) if !joke.is_russian)
    }

    pub fn translation_visible(&self) -> bool {
        !matches!(self.translation, TranslationState::Hidden)
    }

    pub fn translation_display_text(&self) -> &str {
        match &self.translation {
            TranslationState::Hidden => "",
            TranslationState::Loading => TRANSLATION_LOADING_PLACEHOLDER,
            TranslationState::Loaded(translation) => translation,
            TranslationState::Error => TRANSLATION_ERROR_PLACEHOLDER,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.joke, JokeState::Loading)
            || matches!(self.translation, TranslationState::Loading)
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english_joke() -> Joke {
        Joke::from_response(Some("Why did the chicken cross the road?".to_string()), None)
    }

    fn russian_joke() -> Joke {
        Joke::from_response(
            Some("Штирлиц шел по лесу.".to_string()),
            Some("anekdot.ru".to_string()),
        )
    }

    #[test]
    fn starts_idle_with_nothing_visible() {
        let state = ViewerState::new();
        assert_eq!(state.joke_display_text(), JOKE_LOADING_PLACEHOLDER);
        assert!(!state.translation_visible());
        assert!(!state.translate_available());
    }

    #[test]
    fn successful_load_shows_joke_and_translate_control() {
        let mut state = ViewerState::new();
        let request = state.begin_load();
        assert_eq!(state.joke_display_text(), JOKE_LOADING_PLACEHOLDER);

        state.apply_joke_result(request, Ok(english_joke()));
        assert_eq!(state.joke_display_text(), "Why did the chicken cross the road?");
        assert_eq!(state.attribution(), None);
        assert!(state.translate_available());
    }

    #[test]
    fn russian_joke_hides_translate_control() {
        let mut state = ViewerState::new();
        let request = state.begin_load();
        state.apply_joke_result(request, Ok(russian_joke()));

        assert_eq!(state.joke_display_text(), "Штирлиц шел по лесу.");
        assert_eq!(state.attribution().as_deref(), Some("Источник: anekdot.ru"));
        assert!(!state.translate_available());
    }

    #[test]
    fn failed_load_shows_error_placeholder() {
        let mut state = ViewerState::new();
        let request = state.begin_load();
        state.apply_joke_result(request, Err("HTTP error 500".to_string()));

        assert_eq!(state.joke_display_text(), JOKE_ERROR_PLACEHOLDER);
        assert!(!state.translate_available());
        assert!(!state.translation_visible());
    }

    #[test]
    fn translate_is_a_no_op_while_loading_or_errored() {
        let mut state = ViewerState::new();
        state.begin_load();
        assert_eq!(state.begin_translate(), None);
        assert!(!state.translation_visible());

        let request = state.begin_load();
        state.apply_joke_result(request, Err("boom".to_string()));
        assert_eq!(state.begin_translate(), None);
        assert!(!state.translation_visible());
    }

    #[test]
    fn translation_success_and_fallback() {
        let mut state = ViewerState::new();
        let request = state.begin_load();
        state.apply_joke_result(request, Ok(english_joke()));

        let (request, text) = state.begin_translate().unwrap();
        assert_eq!(text, "Why did the chicken cross the road?");
        assert!(state.translation_visible());
        assert_eq!(state.translation_display_text(), TRANSLATION_LOADING_PLACEHOLDER);

        state.apply_translation_result(request, Ok("Почему курица перешла дорогу?".to_string()));
        assert!(state.translation_visible());
        assert_eq!(state.translation_display_text(), "Почему курица перешла дорогу?");
    }

    #[test]
    fn translation_failure_shows_error_placeholder() {
        let mut state = ViewerState::new();
        let request = state.begin_load();
        state.apply_joke_result(request, Ok(english_joke()));

        let (request, _) = state.begin_translate().unwrap();
        state.apply_translation_result(request, Err("HTTP error 502".to_string()));
        assert!(state.translation_visible());
        assert_eq!(state.translation_display_text(), TRANSLATION_ERROR_PLACEHOLDER);
    }

    #[test]
    fn new_load_hides_previous_translation() {
        let mut state = ViewerState::new();
        let request = state.begin_load();
        state.apply_joke_result(request, Ok(english_joke()));

        let (request, _) = state.begin_translate().unwrap();
        state.apply_translation_result(request, Ok("Перевод готов".to_string()));
        assert!(state.translation_visible());

        let request = state.begin_load();
        assert!(!state.translation_visible());
        state.apply_joke_result(request, Ok(english_joke()));
        assert!(!state.translation_visible());
        assert_eq!(state.translation_display_text(), "");
    }

    #[test]
    fn stale_joke_result_is_discarded() {
        let mut state = ViewerState::new();
        let first = state.begin_load();
        let second = state.begin_load();

        // The first request resolves after being superseded.
        state.apply_joke_result(first, Ok(russian_joke()));
        assert_eq!(state.joke_display_text(), JOKE_LOADING_PLACEHOLDER);

        state.apply_joke_result(second, Ok(english_joke()));
        assert_eq!(state.joke_display_text(), "Why did the chicken cross the road?");
    }

    #[test]
    fn translation_for_a_replaced_joke_is_discarded() {
        let mut state = ViewerState::new();
        let request = state.begin_load();
        state.apply_joke_result(request, Ok(english_joke()));

        let (stale, _) = state.begin_translate().unwrap();

        // A new joke arrives before the translation resolves.
        let request = state.begin_load();
        state.apply_joke_result(request, Ok(russian_joke()));

        state.apply_translation_result(stale, Ok("Почему курица перешла дорогу?".to_string()));
        assert!(!state.translation_visible());
    }
}
