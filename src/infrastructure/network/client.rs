use crate::domain::error::{ClientError, ConfigError};
use crate::domain::model::Detection;
use crate::domain::traits::TranslationClient;
use crate::infrastructure::config::ClientConfig;
use crate::infrastructure::network::http::create_client;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

const TRANSLATE_PATH: &str = "/translate_a/single";

/// Codes gtx reports when it cannot tell the language.
const UNDETERMINED_CODES: &[&str] = &["und", "auto", "zxx"];

/// Google Translate backend using the public `gtx` web endpoint
///
/// Every call is a single GET; there is no retry. Timeouts are configured on
/// the `reqwest::Client` and surface as [`ClientError::Connection`].
#[derive(Clone)]
pub struct GoogleWebClient {
    client: Client,
    service_url: String,
}

impl GoogleWebClient {
    pub fn new(client: Client, service_url: impl Into<String>) -> Self {
        let service_url = service_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            service_url,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(create_client(config)?, config.service_url.as_str()))
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    async fn query(&self, text: &str, source: &str, target: &str) -> Result<String, ClientError> {
        let url = format!("{}{}", self.service_url, TRANSLATE_PATH);
        debug!(%url, sl = source, tl = target, chars = text.chars().count(), "sending request");

        let params = [
            ("client", "gtx"),
            ("sl", source),
            ("tl", target),
            ("dt", "t"),
            ("q", text),
        ];

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.text().await.map_err(classify_transport_error)
    }
}

impl std::fmt::Debug for GoogleWebClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleWebClient")
            .field("service_url", &self.service_url)
            .finish()
    }
}

#[async_trait]
impl TranslationClient for GoogleWebClient {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ClientError> {
        let body = self.query(text, source, target).await?;
        parse_translation(&body)
    }

    async fn detect(&self, text: &str) -> Result<Detection, ClientError> {
        // gtx guesses a language even for blank or symbol-only input.
        if !text.chars().any(char::is_alphabetic) {
            debug!(chars = text.chars().count(), "no letters to detect");
            return Ok(Detection::undetectable());
        }

        let body = self.query(text, "auto", "en").await?;
        parse_detection(&body)
    }

    fn provider_name(&self) -> &str {
        "Google Translate"
    }
}

fn classify_transport_error(e: reqwest::Error) -> ClientError {
    if e.is_timeout() || e.is_connect() {
        ClientError::Connection(e.to_string())
    } else {
        ClientError::Http(e)
    }
}

fn parse_body(body: &str) -> Result<Value, ClientError> {
    if body.trim().is_empty() {
        return Err(ClientError::MalformedResponse("empty body".to_string()));
    }
    serde_json::from_str(body)
        .map_err(|e| ClientError::MalformedResponse(format!("invalid JSON: {}", e)))
}

/// Join the translated segments found at `body[0][i][0]`.
pub(crate) fn parse_translation(body: &str) -> Result<String, ClientError> {
    let json = parse_body(body)?;

    let segments = json.get(0).and_then(Value::as_array).ok_or_else(|| {
        ClientError::MalformedResponse("missing translation segments".to_string())
    })?;

    let mut translated = String::new();
    let mut found = false;
    for segment in segments {
        if let Some(part) = segment.get(0).and_then(Value::as_str) {
            translated.push_str(part);
            found = true;
        }
    }

    if !found {
        return Err(ClientError::MalformedResponse(
            "no translated text in response".to_string(),
        ));
    }

    Ok(translated)
}

/// Read the detected language at `body[2]` and its confidence at `body[6]`.
///
/// Undetermined codes become [`Detection::undetectable`], and the legacy
/// Hebrew code `iw` is reported as `he`.
pub(crate) fn parse_detection(body: &str) -> Result<Detection, ClientError> {
    let json = parse_body(body)?;

    let language = json
        .get(2)
        .and_then(Value::as_str)
        .filter(|lang| !lang.is_empty())
        .ok_or_else(|| ClientError::MalformedResponse("missing detected language".to_string()))?;

    if UNDETERMINED_CODES.contains(&language) {
        return Ok(Detection::undetectable());
    }

    let detection = match language {
        "iw" => Detection::new("he"),
        other => Detection::new(other),
    };
    Ok(match json.get(6).and_then(Value::as_f64) {
        Some(confidence) => detection.with_confidence(confidence),
        None => detection,
    })
}
