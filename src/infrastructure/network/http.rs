// HTTP client utilities
use crate::domain::error::ConfigError;
use crate::infrastructure::config::ClientConfig;
use reqwest::Client;
use std::time::Duration;

/// Create the HTTP client used by the translation backend
///
/// The request timeout comes from config; a timed-out request is reported
/// as a connection failure by the backend.
pub fn create_client(config: &ClientConfig) -> Result<Client, ConfigError> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(30))
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str());

    if let Some(proxy) = config.http_proxy.as_deref().filter(|p| !p.is_empty()) {
        builder = builder.proxy(reqwest::Proxy::all(proxy)?);
    }

    Ok(builder.build()?)
}
