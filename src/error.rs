use crate::types::SensorChannel;

/// A single sensor message could not be turned into a vector.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed sensor message: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected at least 3 values, got {count}")]
    TooFewValues { count: usize },
}

/// The connection to a sensor source failed.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("connection to {endpoint} failed: {reason}")]
    Connect { endpoint: String, reason: String },

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A frame could not be shown.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    /// The display went away, e.g. the window was closed. Ends the render loop.
    #[error("display closed")]
    Closed,

    #[error("failed to display frame: {0}")]
    Failed(String),
}

/// The pipeline ended abnormally.
#[derive(Debug, thiserror::Error)]
pub enum TwinError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("{0} ingestor panicked")]
    IngestorPanicked(SensorChannel),
}
