use crate::core::Joke;

/// Results crossing from background tasks into the UI thread. Each network
/// result carries the request token it was issued with; the viewer state
/// decides whether it still applies.
#[derive(Debug, Clone)]
pub enum TaskResult {
    JokeFetched { request: u64, result: Result<Joke, String> },
    TranslationFetched { request: u64, result: Result<String, String> },
}
