#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure modes for calls against the backend.
///
/// Both kinds receive the same treatment: log to the console, show a notice,
/// leave the session usable. The distinction exists so logs say what
/// actually went wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a decodable 2xx response: network error,
    /// rejected future, non-2xx status, or an undecodable body.
    #[error("request failed: {0}")]
    Transport(String),

    /// The response decoded as JSON but the expected success field was
    /// absent, so the result cannot be applied.
    #[error("unexpected response shape: {0}")]
    Contract(String),
}
