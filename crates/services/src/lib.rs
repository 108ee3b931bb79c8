#![forbid(unsafe_code)]

pub mod api_client;
pub mod app_services;
pub mod error;
pub mod quick_add_service;
pub mod quiz;
pub mod review_service;
pub mod sources;

pub use api_client::{ApiClient, ApiConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, parse_timeout_secs};
pub use app_services::AppServices;
pub use error::{ApiError, ConfigError, QuickAddError, QuizLoadError};
pub use quick_add_service::QuickAddService;
pub use quiz::{
    ADVANCE_DELAY, CONNECTION_ERROR_MESSAGE, QuizController, QuizEvent, QuizPresenter,
    RecordingPresenter, SubmitOutcome,
};
pub use reqwest::StatusCode;
pub use review_service::ReviewService;
pub use sources::{CardSink, QuizSource, ReviewCard, ReviewSource};
