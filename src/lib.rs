//! Translate texts and detect their language through Google Translate.
//!
//! ```ignore
//! use translator_simplified::{GoogleWebClient, Translator};
//! use translator_simplified::infrastructure::config::ClientConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = GoogleWebClient::from_config(&ClientConfig::default())?;
//!     let translator = Translator::new(client);
//!
//!     println!("{}", translator.translate("pl", "text for translation", Some("en")).await?);
//!     println!("{}", translator.detect("Mittwoch").await?);
//!     Ok(())
//! }
//! ```
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::translator::{Translator, MAX_DETECT_TEXT_LEN};
pub use domain::error::{ClientError, ConfigError, TranslatorError, TIMEOUT_SIGNATURE};
pub use domain::languages::{LanguageTable, DEFAULT_SERVICE_URLS, LANGUAGES};
pub use domain::model::{
    Detection, Language, Translation, TranslationRequest, UNDETECTABLE_SENTINEL,
};
pub use domain::traits::TranslationClient;
pub use infrastructure::network::client::GoogleWebClient;
pub use infrastructure::network::mock::{MockCalls, MockClient, MockFailure, MockMode};
