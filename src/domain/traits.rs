use crate::domain::error::ClientError;
use crate::domain::model::Detection;
use async_trait::async_trait;

/// Trait for translation backends
///
/// The facade only talks to the service through this trait, so the HTTP
/// client can be swapped for a test double without touching calling code.
#[async_trait]
pub trait TranslationClient: Send + Sync {
    /// Translate `text` from `source` to `target` (both abbreviations).
    async fn translate(&self, text: &str, source: &str, target: &str)
        -> Result<String, ClientError>;

    /// Detect the language of `text`.
    async fn detect(&self, text: &str) -> Result<Detection, ClientError>;

    /// Provider name, for logs and status output.
    fn provider_name(&self) -> &str;
}
