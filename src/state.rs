use std::sync::Arc;
use translator_simplified::infrastructure::config::Config;
use translator_simplified::{ConfigError, GoogleWebClient, Translator};

#[derive(Clone)]
pub struct AppState {
    pub translator: Translator,
    pub service_url: String,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let client = GoogleWebClient::from_config(&config.client)?;
        let service_url = client.service_url().to_string();

        Ok(Self {
            translator: Translator::new(client),
            service_url,
            config: Arc::new(config),
        })
    }
}
