use thiserror::Error;

/// Failure to retrieve or decode a feed snapshot.
///
/// Any of these aborts the whole query; no partial or stale result is
/// returned in its place.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },
    #[error("upstream {url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("feed payload could not be decoded: {0}")]
    Decode(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
