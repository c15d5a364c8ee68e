mod flyover_get;
mod geolocation_get;
mod ip_get;

pub use flyover_get::{FlyoverGet, FlyoverPass};
pub use geolocation_get::GeolocationGet;
pub use ip_get::IpGet;
