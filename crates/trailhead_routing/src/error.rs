use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Invalid service URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// The request could not be sent or its response could not be retrieved.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Service responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Transport has been shut down")]
    Closed,
}

/// The response body is not valid JSON or does not have the expected shape.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Coordinate pair at index {index} has {len} members, expected 2")]
    InvalidPair { index: usize, len: usize },
}
