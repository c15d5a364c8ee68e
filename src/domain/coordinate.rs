use thiserror::Error;

/// A geographic position in decimal degrees.
///
/// Construction validates the ranges, so a `Coordinate` always holds a
/// latitude in [-90, 90] and a longitude in [-180, 180].
#[derive(Clone, PartialEq, Debug)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, OutOfRangeError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(OutOfRangeError { latitude, longitude });
        }

        Ok(Coordinate { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("coordinate out of range: latitude {latitude}, longitude {longitude}")]
pub struct OutOfRangeError {
    pub latitude: f64,
    pub longitude: f64,
}
