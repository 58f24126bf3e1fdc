use reqwest::Client;
use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    AnekdotError,
    Joke,
};

/// Fallback shown when the translate endpoint answers 2xx without a usable
/// translation field.
pub const NO_TRANSLATION_FALLBACK: &str = "Не удалось перевести";

#[derive(Debug, Deserialize)]
pub struct JokeResponse {
    pub joke: Option<String>,
    pub source: Option<String>,
}

impl JokeResponse {
    pub fn into_joke(self) -> Joke {
        Joke::from_response(self.joke, self.source)
    }
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TranslateResponse {
    pub translation: Option<String>,
}

impl TranslateResponse {
    pub fn into_translation(self) -> String {
        match self.translation {
            Some(translation) if !translation.is_empty() => translation,
            _ => NO_TRANSLATION_FALLBACK.to_string(),
        }
    }
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

/// `GET {base}/random-joke`. Any non-success status or transport failure is
/// an error; a success with a missing joke field falls back per
/// [`JokeResponse::into_joke`].
pub async fn fetch_random_joke(base_url: &str) -> Result<Joke, AnekdotError> {
    let response = Client::new().get(endpoint(base_url, "random-joke")).send().await?;

    if !response.status().is_success() {
        return Err(AnekdotError::HttpStatus(
            response.status().as_u16(),
            response.url().to_string(),
        ));
    }

    let body: JokeResponse = response.json().await?;
    Ok(body.into_joke())
}

/// `POST {base}/translate` with the current joke text as payload.
pub async fn translate(base_url: &str, text: &str) -> Result<String, AnekdotError> {
    let response = Client::new()
        .post(endpoint(base_url, "translate"))
        .json(&TranslateRequest { text })
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(AnekdotError::HttpStatus(
            response.status().as_u16(),
            response.url().to_string(),
        ));
    }

    let body: TranslateResponse = response.json().await?;
    Ok(body.into_translation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joke_response_parses_optional_source() {
        let body: JokeResponse =
            serde_json::from_str(r#"{"joke": "Why did the chicken cross the road?"}"#).unwrap();
        let joke = body.into_joke();
        assert_eq!(joke.text, "Why did the chicken cross the road?");
        assert_eq!(joke.source, None);

        let body: JokeResponse =
            serde_json::from_str(r#"{"joke": "Штирлиц шел по лесу.", "source": "anekdot.ru"}"#)
                .unwrap();
        let joke = body.into_joke();
        assert_eq!(joke.source.as_deref(), Some("anekdot.ru"));
        assert!(joke.is_russian);
    }

    #[test]
    fn empty_joke_body_falls_back() {
        let body: JokeResponse = serde_json::from_str("{}").unwrap();
        let joke = body.into_joke();
        assert_eq!(joke.text, crate::core::models::NO_JOKE_FALLBACK);
    }

    #[test]
    fn translate_request_serializes_text_field() {
        let body = serde_json::to_string(&TranslateRequest { text: "Why did..." }).unwrap();
        assert_eq!(body, r#"{"text":"Why did..."}"#);
    }

    #[test]
    fn translate_response_falls_back_when_empty() {
        let body: TranslateResponse =
            serde_json::from_str(r#"{"translation": "Почему курица перешла дорогу?"}"#).unwrap();
        assert_eq!(body.into_translation(), "Почему курица перешла дорогу?");

        let body: TranslateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(body.into_translation(), NO_TRANSLATION_FALLBACK);

        let body: TranslateResponse = serde_json::from_str(r#"{"translation": ""}"#).unwrap();
        assert_eq!(body.into_translation(), NO_TRANSLATION_FALLBACK);
    }

    #[test]
    fn endpoint_handles_trailing_slash() {
        assert_eq!(
            endpoint("http://localhost:8888/", "random-joke"),
            "http://localhost:8888/random-joke"
        );
        assert_eq!(
            endpoint("http://localhost:8888", "translate"),
            "http://localhost:8888/translate"
        );
    }
}
