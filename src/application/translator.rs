use crate::domain::error::TranslatorError;
use crate::domain::languages::LanguageTable;
use crate::domain::model::UNDETECTABLE_SENTINEL;
use crate::domain::traits::TranslationClient;
use std::sync::Arc;
use tracing::{debug, warn};

/// Texts of this many characters or more are cut before detection.
pub const MAX_DETECT_TEXT_LEN: usize = 500;

/// Translation and language detection on top of a [`TranslationClient`]
///
/// Abbreviations are checked against the [`LanguageTable`] before any
/// request is sent. Backend failures are mapped onto [`TranslatorError`].
#[derive(Clone)]
pub struct Translator {
    client: Arc<dyn TranslationClient>,
    languages: &'static LanguageTable,
}

impl Translator {
    pub fn new(client: impl TranslationClient + 'static) -> Self {
        Self::with_client(Arc::new(client))
    }

    pub fn with_client(client: Arc<dyn TranslationClient>) -> Self {
        Self {
            client,
            languages: LanguageTable::global(),
        }
    }

    pub fn provider_name(&self) -> &str {
        self.client.provider_name()
    }

    /// Translate `text` into `destination_lang`.
    ///
    /// When `source_lang` is `None` the language is detected first, and
    /// detection errors are returned as they are.
    pub async fn translate(
        &self,
        destination_lang: &str,
        text: &str,
        source_lang: Option<&str>,
    ) -> Result<String, TranslatorError> {
        if !self.languages.is_known_abbreviation(destination_lang) {
            return Err(TranslatorError::IncorrectAbbreviation(
                destination_lang.to_string(),
            ));
        }

        let source_lang = match source_lang {
            None => self.detect(text).await?,
            Some(lang) if self.languages.is_known_abbreviation(lang) => lang.to_string(),
            Some(lang) => return Err(TranslatorError::IncorrectAbbreviation(lang.to_string())),
        };

        debug!(
            provider = self.provider_name(),
            source = %source_lang,
            destination = destination_lang,
            "translating"
        );

        self.client
            .translate(text, &source_lang, destination_lang)
            .await
            .map_err(|e| {
                if e.is_malformed_response() {
                    warn!("unparseable translation response: {}", e);
                    TranslatorError::Untranslatable(text.to_string())
                } else if e.is_connection_failure() {
                    warn!("translation service unreachable: {}", e);
                    TranslatorError::ConnectionFailure
                } else {
                    TranslatorError::Client(e)
                }
            })
    }

    /// Detect the language of `text` and return its abbreviation.
    pub async fn detect(&self, text: &str) -> Result<String, TranslatorError> {
        let query = truncate_for_detection(text);

        let detection = self.client.detect(query).await.map_err(|e| {
            if e.is_connection_failure() {
                warn!("detection service unreachable: {}", e);
                TranslatorError::ConnectionFailure
            } else {
                debug!("detection failed: {}", e);
                TranslatorError::Untranslatable(text.to_string())
            }
        })?;

        if detection.is_undetectable() {
            warn!("backend could not classify text, got {}", UNDETECTABLE_SENTINEL);
            return Err(TranslatorError::Untranslatable(text.to_string()));
        }

        debug!(language = %detection.language, confidence = ?detection.confidence, "detected");
        Ok(detection.language)
    }

    pub fn get_abbreviation(&self, name: &str) -> Option<&'static str> {
        self.languages.abbreviation_for(name)
    }

    pub fn get_name(&self, abbreviation: &str) -> Option<&'static str> {
        self.languages.name_for(abbreviation)
    }

    /// Full language names in alphabetical order.
    pub fn names_list(&self) -> &'static [&'static str] {
        self.languages.names()
    }

    /// Abbreviations, index-aligned with [`names_list`](Self::names_list).
    pub fn abbreviation_list(&self) -> &'static [&'static str] {
        self.languages.abbreviations()
    }

    pub fn languages(&self) -> &'static LanguageTable {
        self.languages
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("provider", &self.provider_name())
            .field("languages", &self.languages.len())
            .finish()
    }
}

/// First `MAX_DETECT_TEXT_LEN - 1` characters of `text` when it is too long.
fn truncate_for_detection(text: &str) -> &str {
    match text.char_indices().nth(MAX_DETECT_TEXT_LEN - 1) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_untouched() {
        assert_eq!(truncate_for_detection(""), "");
        assert_eq!(truncate_for_detection("hello"), "hello");
        let text = "a".repeat(MAX_DETECT_TEXT_LEN - 1);
        assert_eq!(truncate_for_detection(&text), text);
    }

    #[test]
    fn test_text_at_threshold_is_truncated() {
        let text = "a".repeat(MAX_DETECT_TEXT_LEN);
        assert_eq!(truncate_for_detection(&text).len(), MAX_DETECT_TEXT_LEN - 1);
    }

    #[test]
    fn test_truncation_counts_characters() {
        let text = "ż".repeat(MAX_DETECT_TEXT_LEN + 20);
        let cut = truncate_for_detection(&text);
        assert_eq!(cut.chars().count(), MAX_DETECT_TEXT_LEN - 1);
        assert!(text.starts_with(cut));
    }
}
