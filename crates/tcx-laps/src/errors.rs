use thiserror::Error;

/// Errors that abort parsing of a whole TCX document.
///
/// Missing elements are not errors; they surface as absent fields. Only
/// present-but-unreadable values, the mandatory average speed extension and
/// retrieval failures end up here.
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("XML parsing error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Document is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Malformed number in {field}: {value:?}")]
    MalformedNumber { field: &'static str, value: String },

    #[error("Malformed timestamp in {field}: {value:?}")]
    MalformedTimestamp { field: &'static str, value: String },

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T, E = SummaryError> = std::result::Result<T, E>;
