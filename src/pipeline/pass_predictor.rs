use crate::app_config::AppConfig;
use crate::domain::{Coordinate, Pass};
use crate::pipeline::FetchError;
use crate::pipeline::domain::FlyoverGet;
use chrono::{FixedOffset, Local, TimeZone, Utc};
use reqwest::Client;
use tracing::{info, instrument};

const RISE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Predicts the upcoming ISS passes over a coordinate, in the provider's
/// chronological order, with each rise time rendered in the configured
/// display timezone.
#[instrument(skip(client, config))]
pub async fn predict(client: &Client, config: &AppConfig, coordinate: &Coordinate) -> Result<Vec<Pass>, FetchError> {
    info!("Predicting passes for {:?}...", coordinate);

    let url = format!(
        "{}/json/?lat={}&lon={}",
        config.providers().flyover_url(),
        coordinate.latitude(),
        coordinate.longitude()
    );
    let response = client.get(url).send().await?;
    let status = response.status();
    let body = response.text().await?;

    // The provider reports unusable coordinates as a bare string body, even
    // alongside a non-2xx status, so this check comes first.
    if body == "invalid coordinates" {
        return Err(FetchError::InvalidCoordinate);
    }
    if !status.is_success() {
        return Err(FetchError::UpstreamStatus(status));
    }

    let flyover = serde_json::from_str::<FlyoverGet>(&body).map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

    let offset = config.display().utc_offset();
    let passes = flyover
        .response
        .into_iter()
        .map(|pass| {
            let rise_time = format_rise_time(pass.risetime, offset)?;
            Ok(Pass {
                rise_time,
                duration: pass.duration,
            })
        })
        .collect::<Result<Vec<Pass>, FetchError>>()?;

    info!("Predicting passes for {:?}... OK, {} found", coordinate, passes.len());
    Ok(passes)
}

fn format_rise_time(epoch_seconds: i64, offset: Option<FixedOffset>) -> Result<String, FetchError> {
    let rise_time = Utc
        .timestamp_opt(epoch_seconds, 0)
        .single()
        .ok_or_else(|| FetchError::MalformedResponse(format!("unrepresentable rise time {epoch_seconds}")))?;

    let formatted = match offset {
        Some(offset) => rise_time.with_timezone(&offset).format(RISE_TIME_FORMAT).to_string(),
        None => rise_time.with_timezone(&Local).format(RISE_TIME_FORMAT).to_string(),
    };
    Ok(formatted)
}
