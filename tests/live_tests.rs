//! End-to-end tests against Google Translate (network required)
//!
//! Run with: cargo test -- --ignored

use translator_simplified::infrastructure::config::ClientConfig;
use translator_simplified::{GoogleWebClient, Translator, TranslatorError};

fn translator() -> Translator {
    Translator::new(GoogleWebClient::from_config(&ClientConfig::default()).unwrap())
}

#[tokio::test]
#[ignore]
async fn test_translate() {
    let translator = translator();
    let result = translator
        .translate("pl", "text for translation", Some("en"))
        .await
        .unwrap();
    println!("Translation: text for translation → {}", result);
    assert!(result.to_lowercase().contains("tłumacz"));

    let result = translator
        .translate("de", "tekst do przetłumaczenia", None)
        .await
        .unwrap();
    assert!(result.contains("Übersetz") || result.contains("übersetz"));
}

#[tokio::test]
#[ignore]
async fn test_detect() {
    let translator = translator();
    assert_eq!(translator.detect("text for translation").await.unwrap(), "en");
    assert_eq!(translator.detect("Mittwoch").await.unwrap(), "de");
    assert_eq!(translator.detect("inny przykład").await.unwrap(), "pl");
}

#[tokio::test]
#[ignore]
async fn test_detect_long_text() {
    let text = "This sentence is written in English. ".repeat(40);
    assert!(text.chars().count() >= 500);
    assert_eq!(translator().detect(&text).await.unwrap(), "en");
}

#[tokio::test]
#[ignore]
async fn test_detect_blank_and_symbols_are_untranslatable() {
    let translator = translator();
    for text in ["", "   ", " \t\n", "``2564&&"] {
        let err = translator.detect(text).await.unwrap_err();
        assert!(
            matches!(err, TranslatorError::Untranslatable(ref t) if t == text),
            "{:?} should be untranslatable, got {:?}",
            text,
            err
        );
    }
}

#[tokio::test]
#[ignore]
async fn test_detect_hebrew() {
    let language = translator().detect("שלום עולם").await.unwrap();
    assert_eq!(language, "he");
    assert_eq!(translator().get_name(&language), Some("hebrew"));
}

fn offline_translator() -> Translator {
    Translator::new(
        GoogleWebClient::from_config(&ClientConfig {
            service_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
            ..ClientConfig::default()
        })
        .unwrap(),
    )
}

// Text without letters is rejected before any request.
#[tokio::test]
async fn test_detect_without_letters_needs_no_network() {
    let translator = offline_translator();
    for text in ["", "   ", " \t\n", "``2564&&"] {
        let err = translator.detect(text).await.unwrap_err();
        assert!(matches!(err, TranslatorError::Untranslatable(ref t) if t == text));
    }

    let err = translator.translate("pl", "   ", None).await.unwrap_err();
    assert!(matches!(err, TranslatorError::Untranslatable(_)));
}

// Fails before any request, so it runs without network.
#[tokio::test]
async fn test_incorrect_abbreviation_needs_no_network() {
    let translator = offline_translator();
    let err = translator
        .translate("d", "text for translation", None)
        .await
        .unwrap_err();
    assert!(matches!(err, TranslatorError::IncorrectAbbreviation(_)));
}
