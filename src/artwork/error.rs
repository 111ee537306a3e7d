use thiserror::Error;

/// Errors produced while inspecting, locating or saving artwork for one file.
///
/// None of these abort a run; the pipeline turns them into a per-file
/// outcome and a log line.
#[derive(Debug, Error)]
pub enum ArtError {
    #[error("could not read tags: {0}")]
    Tag(#[from] lofty::error::LoftyError),

    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("HTTP {status} for URL: {url}")]
    Status { status: u16, url: String },

    #[error("failed to read response from {url}: {source}")]
    Read {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid search response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
