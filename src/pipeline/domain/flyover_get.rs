use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FlyoverGet {
    pub response: Vec<FlyoverPass>,
}

#[derive(Debug, Deserialize)]
pub struct FlyoverPass {
    pub risetime: i64, // Seconds since the epoch
    pub duration: u64,
}
