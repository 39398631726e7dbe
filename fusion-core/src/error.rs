use crate::models::RequestError;
use thiserror::Error;

/// Everything that can go wrong between a submission and a rendered post
///
/// Validation failures are recovered locally in the UI; the remaining
/// variants cover the generation service and are surfaced to the user as a
/// visible failure message instead of crashing the session.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("the generation service rejected the API key")]
    Unauthorized,
    #[error("generation quota exhausted, try again later")]
    QuotaExhausted,
    #[error("generation service error {status}: {message}")]
    Api { status: u16, message: String },
    #[error("generation service request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("the generation service returned no text")]
    EmptyResponse,
}
