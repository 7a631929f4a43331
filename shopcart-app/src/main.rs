use anyhow::Context;
use shopcart_app::{checkout, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Config only tunes diagnostics, so a bad source never stops the receipt
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // stdout carries the receipt, diagnostics go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(e) = config_error {
        tracing::warn!("Failed to load config, using defaults: {}", e);
    }

    tracing::info!("Starting shopcart");

    checkout::run(std::io::stdout().lock()).context("Failed to price cart")?;

    tracing::info!("shopcart finished");
    Ok(())
}
