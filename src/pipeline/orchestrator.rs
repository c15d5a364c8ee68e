use crate::app_config::AppConfig;
use crate::domain::Pass;
use crate::pipeline::{FetchError, coordinate_resolver, ip_resolver, pass_predictor};
use reqwest::Client;
use tracing::instrument;

/// Determines the upcoming ISS passes for the caller's current location.
///
/// The three lookups run strictly in order, each stage's output feeding the
/// next. The first failing stage's own error reaches the caller and no later
/// stage is invoked; nothing is retried.
#[instrument(skip(client, config))]
pub async fn next_passes(client: &Client, config: &AppConfig) -> Result<Vec<Pass>, FetchError> {
    let ip = ip_resolver::resolve(client, config).await?;
    let coordinate = coordinate_resolver::resolve(client, config, &ip).await?;
    pass_predictor::predict(client, config, &coordinate).await
}
