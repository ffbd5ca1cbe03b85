use crate::domain::languages::LanguageTable;
use thiserror::Error;

/// Message a translation backend reports when it cannot reach the service.
pub const TIMEOUT_SIGNATURE: &str = "Failed to connect. Probable cause: timeout";

/// Failures reported by a [`TranslationClient`](crate::domain::traits::TranslationClient).
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to connect. Probable cause: timeout ({0})")]
    Connection(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Translation service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

impl ClientError {
    /// True when the failure means the service could not be reached.
    ///
    /// Message-only failures ([`ClientError::Other`]) are matched against
    /// [`TIMEOUT_SIGNATURE`].
    pub fn is_connection_failure(&self) -> bool {
        match self {
            ClientError::Connection(_) => true,
            ClientError::Http(e) => e.is_timeout() || e.is_connect(),
            ClientError::Other(msg) => msg.contains(TIMEOUT_SIGNATURE),
            ClientError::MalformedResponse(_) | ClientError::Status { .. } => false,
        }
    }

    pub fn is_malformed_response(&self) -> bool {
        match self {
            ClientError::MalformedResponse(_) => true,
            ClientError::Http(e) => e.is_decode(),
            _ => false,
        }
    }
}

#[derive(Error, Debug)]
pub enum TranslatorError {
    #[error(
        "Given abbreviation: \"{0}\" is not correct.\nCorrect abbreviations: {valid}",
        valid = LanguageTable::global().abbreviations().join(", ")
    )]
    IncorrectAbbreviation(String),

    #[error("Given text:\n\"{0}\"\n is untranslatable.")]
    Untranslatable(String),

    #[error("Couldn't connect to the Internet.")]
    ConnectionFailure,

    #[error(transparent)]
    Client(#[from] ClientError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Cannot determine config directory")]
    NoConfigDir,

    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
