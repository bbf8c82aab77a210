//! Error types for the unxmind library.

use std::io;
use thiserror::Error;

use crate::detect::ContentFormat;

/// Result type alias for unxmind operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during mind-map conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a valid ZIP container.
    #[error("Invalid archive: {0}")]
    ArchiveFormat(String),

    /// The archive holds neither `content.json` nor `content.xml`.
    #[error("Archive contains no content.json or content.xml entry")]
    MissingContent,

    /// A content entry exists but its bytes are not valid UTF-8 JSON/XML.
    #[error("Invalid {format} content: {message}")]
    ContentParse {
        /// Which content entry failed to parse
        format: ContentFormat,
        /// Underlying parser message
        message: String,
    },

    /// A topic node lacks the required title.
    #[error("Topic without title in sheet {sheet} at {path}")]
    MalformedTopic {
        /// Zero-based sheet index
        sheet: usize,
        /// Path from the sheet's root topic to the offending node
        path: String,
    },
}

impl Error {
    /// Build a `ContentParse` error for the given format.
    pub(crate) fn content_parse(format: ContentFormat, message: impl Into<String>) -> Self {
        Error::ContentParse {
            format,
            message: message.into(),
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::FileNotFound => Error::MissingContent,
            _ => Error::ArchiveFormat(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::content_parse(ContentFormat::Json, err.to_string())
    }
}

impl From<roxmltree::Error> for Error {
    fn from(err: roxmltree::Error) -> Self {
        Error::content_parse(ContentFormat::Xml, err.to_string())
    }
}
