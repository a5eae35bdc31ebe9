//! charforge - interactive D&D 5e character creation wizard
//!
//! Walks one character through race selection, class selection, proficiency
//! allocation, and ability rolls, reading reference data from the
//! charforge-catalog proxy.

use std::sync::Arc;
use std::time::Instant;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use charforge::application::ports::outbound::Prompt;
use charforge::application::services::SessionRunner;
use charforge::infrastructure::catalog_client::HttpCatalogClient;
use charforge::infrastructure::config::AppConfig;
use charforge::infrastructure::console::{self, ConsolePrompt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charforge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!("Catalog: {}", config.catalog_base_url);

    let catalog = Arc::new(HttpCatalogClient::new(&config.catalog_base_url));
    let runner = SessionRunner::new(catalog, config.proficiency_mode);
    let mut prompt = ConsolePrompt;
    let mut rng = rand::thread_rng();

    console::banner();
    console::intro();
    prompt.ask("🎯 Press ENTER when you're ready to begin your adventure...\n");

    let started = Instant::now();
    runner.run(&mut prompt, &mut rng).await?;
    tracing::info!("Session completed in {:.2?}", started.elapsed());

    Ok(())
}
