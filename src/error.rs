/// Errors that might occur when using the library.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An HTTP client error (including status codes indicating failure).
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// A response body that couldn't be decoded as a search result.
    #[error("failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),
}
