use reqwest::StatusCode;
use thiserror::Error;

/// The one error type shared by every stage of the pipeline.
///
/// Stages fail fast: the first error encountered is returned as is, nothing
/// is retried or substituted with a default.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("upstream responded with status code {0}")]
    UpstreamStatus(StatusCode),
    #[error("provider rejected the request: {0}")]
    ProviderRejected(String),
    #[error("invalid coordinates")]
    InvalidCoordinate,
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
