use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    /// The completion service could not be reached, timed out, returned a
    /// non-success status, or sent an unreadable envelope.
    #[error("completion service unavailable: {0}")]
    ServiceUnavailable(String),
}
