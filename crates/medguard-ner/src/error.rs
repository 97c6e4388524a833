use thiserror::Error;

#[derive(Debug, Error)]
pub enum NerError {
    /// The entity tagger failed or could not be reached.
    #[error("entity scanner unavailable: {0}")]
    ScannerUnavailable(String),
}
