use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No stops available for snapping")]
    NoPointsFound,
    #[error("Negative-weight cycle detected during relaxation")]
    NegativeCycle,
    #[error("Transit network exhausted while repairing a disconnected endpoint")]
    NetworkExhausted,
    #[error("Unknown stop id: {0}")]
    UnknownStop(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
