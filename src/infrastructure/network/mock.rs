//! Mock translation backend for testing
//!
//! A deterministic, network-free [`TranslationClient`] that records what it
//! was asked, so callers can check which texts reached the backend.
//!
//! # Example
//!
//! ```ignore
//! use translator_simplified::{MockClient, MockMode, Translator};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let translator = Translator::new(MockClient::new(MockMode::Suffix));
//!     let result = translator.translate("de", "hello", Some("en")).await.unwrap();
//!     assert_eq!(result, "hello_de");
//! }
//! ```

use crate::domain::error::ClientError;
use crate::domain::model::Detection;
use crate::domain::traits::TranslationClient;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Failures the mock can simulate
#[derive(Debug, Clone, PartialEq)]
pub enum MockFailure {
    /// Connection timed out
    Timeout,
    /// Response body could not be parsed
    Malformed,
    /// Non-success HTTP status
    Status(u16),
    /// Message-only failure
    Other(String),
}

impl MockFailure {
    fn to_error(&self) -> ClientError {
        match self {
            MockFailure::Timeout => ClientError::Connection("simulated timeout".to_string()),
            MockFailure::Malformed => {
                ClientError::MalformedResponse("simulated empty body".to_string())
            }
            MockFailure::Status(status) => ClientError::Status {
                status: *status,
                body: "simulated status".to_string(),
            },
            MockFailure::Other(msg) => ClientError::Other(msg.clone()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum MockMode {
    /// Translation is `"{text}_{target}"`; detection always yields `language`
    Suffix,
    /// Canned responses
    Fixed {
        translation: String,
        detection: String,
    },
    /// Translation as in `Suffix`, detection fails
    DetectFails(MockFailure),
    /// Every call fails
    Fail(MockFailure),
}

/// Calls received by a [`MockClient`]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MockCalls {
    pub detect: Vec<String>,
    pub translate: Vec<(String, String, String)>,
}

#[derive(Debug, Clone)]
pub struct MockClient {
    mode: MockMode,
    language: String,
    calls: Arc<Mutex<MockCalls>>,
}

impl MockClient {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            language: "en".to_string(),
            calls: Arc::new(Mutex::new(MockCalls::default())),
        }
    }

    /// Language returned by `detect` in `Suffix` mode.
    pub fn detecting(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    /// Snapshot of the calls received so far. Clones share the same log.
    pub fn calls(&self) -> MockCalls {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, f: impl FnOnce(&mut MockCalls)) {
        if let Ok(mut calls) = self.calls.lock() {
            f(&mut calls);
        }
    }
}

#[async_trait]
impl TranslationClient for MockClient {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ClientError> {
        self.record(|c| {
            c.translate
                .push((text.to_string(), source.to_string(), target.to_string()))
        });

        match &self.mode {
            MockMode::Suffix | MockMode::DetectFails(_) => Ok(format!("{}_{}", text, target)),
            MockMode::Fixed { translation, .. } => Ok(translation.clone()),
            MockMode::Fail(failure) => Err(failure.to_error()),
        }
    }

    async fn detect(&self, text: &str) -> Result<Detection, ClientError> {
        self.record(|c| c.detect.push(text.to_string()));

        match &self.mode {
            MockMode::Suffix => Ok(Detection::new(self.language.as_str()).with_confidence(1.0)),
            MockMode::Fixed { detection, .. } => Ok(Detection::new(detection.as_str())),
            MockMode::DetectFails(failure) | MockMode::Fail(failure) => Err(failure.to_error()),
        }
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
