use crate::app_config::AppConfig;
use crate::domain::Coordinate;
use crate::pipeline::FetchError;
use crate::pipeline::domain::GeolocationGet;
use reqwest::Client;
use tracing::{info, instrument};

/// Resolves the approximate coordinates for an IPv4 address.
#[instrument(skip(client, config))]
pub async fn resolve(client: &Client, config: &AppConfig, ip: &str) -> Result<Coordinate, FetchError> {
    // The IP came out of the previous stage's payload; guard before spending
    // a request on a provider whose behavior for it is undefined.
    if ip.is_empty() {
        return Err(FetchError::MalformedResponse("empty IP address".to_string()));
    }

    info!("Resolving coordinates for {}...", ip);

    let response = client.get(format!("{}/{}", config.providers().geolocation_url(), ip)).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::UpstreamStatus(status));
    }

    let body = response.text().await?;
    let geolocation = serde_json::from_str::<GeolocationGet>(&body).map_err(|e| FetchError::MalformedResponse(e.to_string()))?;
    if !geolocation.success {
        return Err(FetchError::ProviderRejected(geolocation.message.unwrap_or_default()));
    }

    let (Some(latitude), Some(longitude)) = (geolocation.latitude, geolocation.longitude) else {
        return Err(FetchError::MalformedResponse("missing 'latitude' or 'longitude' field".to_string()));
    };
    let coordinate = Coordinate::new(latitude, longitude).map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

    info!("Resolving coordinates for {}... OK, {:?}", ip, coordinate);
    Ok(coordinate)
}
