use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct IpGet {
    pub ip: String,
}
