use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use flash_core::model::{Flashcard, QuestionRecord, QuickCard};

use crate::error::{ApiError, ConfigError, QuizLoadError};
use crate::sources::{CardSink, QuizSource, ReviewCard, ReviewSource};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const QUIZ_PATH: &str = "api/iniciar_quiz";
const REVIEW_PATH: &str = "revisar";
const QUICK_SAVE_PATH: &str = "api/salvar_rapido";
const UNAVAILABLE_FALLBACK: &str = "No quiz is available right now.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ApiConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `FLASH_API_BASE_URL` and `FLASH_API_TIMEOUT_SECS`, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var("FLASH_API_BASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let mut config = Self::new(&base_url)?;
        if let Ok(raw) = env::var("FLASH_API_TIMEOUT_SECS") {
            config.timeout = parse_timeout_secs(&raw)?;
        }
        Ok(config)
    }
}

/// Parse a positive whole number of seconds.
///
/// # Errors
///
/// Returns `ConfigError::InvalidTimeout` for zero or non-numeric input.
pub fn parse_timeout_secs(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout {
            raw: raw.to_string(),
        }),
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidBaseUrl {
        raw: raw.to_string(),
        source,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme {
            scheme: url.scheme().to_string(),
        });
    }
    // Relative joins replace the last segment unless the path ends with a slash.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[derive(Clone, Debug)]
struct Endpoints {
    quiz: Url,
    review: Url,
    quick_save: Url,
}

impl Endpoints {
    fn new(base: &Url) -> Result<Self, ConfigError> {
        let join = |path: &str| {
            base.join(path).map_err(|source| ConfigError::InvalidBaseUrl {
                raw: base.to_string(),
                source,
            })
        };
        Ok(Self {
            quiz: join(QUIZ_PATH)?,
            review: join(REVIEW_PATH)?,
            quick_save: join(QUICK_SAVE_PATH)?,
        })
    }
}

/// HTTP client for the flashcard backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    endpoints: Endpoints,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns `ConfigError` if the HTTP client cannot be built or an endpoint
    /// cannot be derived from the base URL.
    pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            endpoints: Endpoints::new(&config.base_url)?,
        })
    }

    async fn get<T: DeserializeOwned>(&self, url: &Url) -> Result<T, ApiError> {
        log::debug!("GET {url}");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;
        decode_body(status, &body)
    }
}

/// Decode a JSON body, preferring a parseable body over the status code.
///
/// The backend reports application errors as JSON on non-success statuses, so
/// the body is tried first and the status only matters when it does not parse.
fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, ApiError> {
    match serde_json::from_str::<T>(body) {
        Ok(value) => Ok(value),
        Err(_) if !status.is_success() => Err(ApiError::HttpStatus(status)),
        Err(err) => Err(ApiError::Decode(err)),
    }
}

//
// ─── WIRE SHAPES ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum QuizResponse {
    Questions(Vec<QuestionRecord>),
    Failure {
        #[serde(default)]
        erro: bool,
        #[serde(default)]
        mensagem: Option<String>,
    },
}

impl QuizResponse {
    fn into_result(self) -> Result<Vec<QuestionRecord>, QuizLoadError> {
        match self {
            QuizResponse::Questions(questions) => Ok(questions),
            QuizResponse::Failure { erro: true, mensagem } => Err(QuizLoadError::Unavailable(
                mensagem.unwrap_or_else(|| UNAVAILABLE_FALLBACK.to_string()),
            )),
            QuizResponse::Failure { erro: false, .. } => {
                Err(ApiError::Decode(<serde_json::Error as serde::de::Error>::custom(
                    "expected a question list or an error object",
                ))
                .into())
            }
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReviewResponse {
    Card(Flashcard),
    Empty { erro: String },
}

impl From<ReviewResponse> for ReviewCard {
    fn from(value: ReviewResponse) -> Self {
        match value {
            ReviewResponse::Card(card) => ReviewCard::Card(card),
            ReviewResponse::Empty { erro } => ReviewCard::Empty(erro),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SaveResponse {
    #[serde(default)]
    sucesso: bool,
}

//
// ─── SOURCE IMPLS ──────────────────────────────────────────────────────────────
//

#[async_trait]
impl QuizSource for ApiClient {
    async fn fetch_questions(&self) -> Result<Vec<QuestionRecord>, QuizLoadError> {
        let response: QuizResponse = self.get(&self.endpoints.quiz).await?;
        response.into_result()
    }
}

#[async_trait]
impl ReviewSource for ApiClient {
    async fn fetch_review_card(&self) -> Result<ReviewCard, ApiError> {
        let response: ReviewResponse = self.get(&self.endpoints.review).await?;
        Ok(response.into())
    }
}

#[async_trait]
impl CardSink for ApiClient {
    async fn save_quick_card(&self, card: &QuickCard) -> Result<bool, ApiError> {
        let url = &self.endpoints.quick_save;
        log::debug!("POST {url}");
        let response = self.client.post(url.clone()).json(card).send().await?;
        let status = response.status();
        let body = response.text().await?;
        let parsed: SaveResponse = decode_body(status, &body)?;
        Ok(parsed.sucesso)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_quiz(status: StatusCode, body: &str) -> Result<Vec<QuestionRecord>, QuizLoadError> {
        decode_body::<QuizResponse>(status, body)
            .map_err(QuizLoadError::from)
            .and_then(QuizResponse::into_result)
    }

    #[test]
    fn base_url_gets_trailing_slash_and_endpoints_join() {
        let config = ApiConfig::new("http://localhost:8000/app").unwrap();
        let endpoints = Endpoints::new(&config.base_url).unwrap();
        assert_eq!(endpoints.quiz.as_str(), "http://localhost:8000/app/api/iniciar_quiz");
        assert_eq!(endpoints.review.as_str(), "http://localhost:8000/app/revisar");
        assert_eq!(
            endpoints.quick_save.as_str(),
            "http://localhost:8000/app/api/salvar_rapido"
        );
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let err = ApiConfig::new("ftp://example.com").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme { .. }));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(parse_timeout_secs("0").is_err());
        assert!(parse_timeout_secs("abc").is_err());
        assert_eq!(parse_timeout_secs(" 5 ").unwrap(), Duration::from_secs(5));
    }

    #[test]
    fn quiz_list_parses() {
        let body = r#"[{"pergunta":"dog","alternativas":["cão","gato"],"resposta_correta":"cão"}]"#;
        let questions = parse_quiz(StatusCode::OK, body).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].prompt(), "dog");
    }

    #[test]
    fn quiz_error_object_is_unavailable_even_on_error_status() {
        let body = r#"{"erro":true,"mensagem":"no questions"}"#;
        let err = parse_quiz(StatusCode::BAD_REQUEST, body).unwrap_err();
        assert!(matches!(err, QuizLoadError::Unavailable(ref msg) if msg == "no questions"));
    }

    #[test]
    fn unparseable_error_status_is_http_status() {
        let err = parse_quiz(StatusCode::INTERNAL_SERVER_ERROR, "<html>").unwrap_err();
        assert!(matches!(
            err,
            QuizLoadError::Api(ApiError::HttpStatus(StatusCode::INTERNAL_SERVER_ERROR))
        ));
    }

    #[test]
    fn object_without_error_flag_is_decode_error() {
        let err = parse_quiz(StatusCode::OK, r#"{"mensagem":"hm"}"#).unwrap_err();
        assert!(matches!(err, QuizLoadError::Api(ApiError::Decode(_))));
    }

    #[test]
    fn review_error_body_is_empty_card() {
        let parsed: ReviewResponse =
            decode_body(StatusCode::NOT_FOUND, r#"{"erro":"Nenhum flashcard cadastrado."}"#)
                .unwrap();
        assert_eq!(
            ReviewCard::from(parsed),
            ReviewCard::Empty("Nenhum flashcard cadastrado.".to_string())
        );
    }

    #[test]
    fn review_card_parses() {
        let parsed: ReviewResponse = decode_body(
            StatusCode::OK,
            r#"{"frente":"dog","verso":"cão","idioma":"Inglês"}"#,
        )
        .unwrap();
        assert_eq!(
            ReviewCard::from(parsed),
            ReviewCard::Card(Flashcard::new("dog", "cão", "Inglês"))
        );
    }

    #[test]
    fn save_response_defaults_to_failure() {
        let parsed: SaveResponse = decode_body(StatusCode::OK, "{}").unwrap();
        assert!(!parsed.sucesso);
    }
}
