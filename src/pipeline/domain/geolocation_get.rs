use serde::Deserialize;

/// The geolocation provider reports logical failures in the payload itself:
/// `success: false` plus a `message`, with the coordinate fields absent.
#[derive(Debug, Deserialize)]
pub struct GeolocationGet {
    pub success: bool,
    pub message: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
