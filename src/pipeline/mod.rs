mod client;
mod coordinate_resolver;
mod domain;
mod error;
mod ip_resolver;
mod orchestrator;
mod pass_predictor;

pub use client::new_client;
pub use error::FetchError;
pub use orchestrator::next_passes;
