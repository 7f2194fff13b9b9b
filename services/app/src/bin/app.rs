//! services/app/src/bin/app.rs
//!
//! Headless bootstrap: loads configuration, opens the slot store against
//! the JSON file, and logs the public view. Useful for smoke-checking a
//! persisted collection; all real interaction goes through the library.

use app_lib::{
    adapters::{JsonFileStore, UuidIdProvider},
    config::Config,
    error::AppError,
    store::SlotStore,
    views::{self, PublicFilter},
};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Opening slot store...");

    // --- 2. Open the Store Against the Storage File ---
    let repo = Arc::new(JsonFileStore::new(&config.storage_path));
    let ids = Arc::new(UuidIdProvider);
    let store = SlotStore::open(repo, ids, config.register_delay).await;

    // --- 3. Log the Public View ---
    let now = Utc::now();
    let stats = views::stats(store.slots(), now);
    info!(
        upcoming = stats.upcoming,
        available = stats.available,
        total = stats.total,
        "slot collection loaded"
    );

    for slot in views::public_view(store.slots(), "", PublicFilter::Upcoming, now) {
        info!(
            id = %slot.id,
            starts_at = %slot.starts_at(),
            topic = %slot.topic,
            seats = %format!("{}/{}", slot.participants.len(), slot.capacity),
            "upcoming slot"
        );
    }

    Ok(())
}
