use crate::app_config::AppConfig;
use crate::pipeline::FetchError;
use reqwest::Client;

/// Builds the client shared by all stages. The configured per-request timeout
/// bounds every call against a provider; an expired timeout surfaces as
/// [`FetchError::Network`].
pub fn new_client(config: &AppConfig) -> Result<Client, FetchError> {
    let client = Client::builder().timeout(config.core().request_timeout()).build()?;
    Ok(client)
}
