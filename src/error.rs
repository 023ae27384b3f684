// src/error.rs

/// Errors surfaced by the ingestion pipeline.
#[derive(Debug, thiserror::Error)]
pub enum CavaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    #[error("request to {url} failed: {msg}")]
    Transport { url: String, msg: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("unknown cruise: {0}")]
    UnknownCruise(String),

    #[error("station matches no known area: {0}")]
    UnknownArea(String),

    #[error("{0}")]
    InvalidInput(String),
}
