use crate::app_config::AppConfig;
use crate::pipeline::new_client;
use tracing::info;

mod app_config;
mod domain;
mod pipeline;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🛰️ Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    info!("✅  Loaded configuration");

    let client = new_client(&config)?;

    match pipeline::next_passes(&client, &config).await {
        Ok(passes) => {
            for pass in &passes {
                println!("Next pass at {} for {} seconds!", pass.rise_time, pass.duration);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("It didn't work! {e}");
            std::process::exit(1);
        }
    }
}
