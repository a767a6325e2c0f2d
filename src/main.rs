use dotenvy::dotenv;
use olive_branch::{
    bot::{self, BotData},
    config::{database, seed},
    core::seed::seed_from_config,
    errors::{Error, Result},
    store::SheetStore,
};
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Seed configuration (missing file means nothing to seed)
    let seed_config = seed::load_default_config()
        .inspect_err(|e| error!("Failed to load seed configuration: {}", e))?;

    // 4. Initialize database and the sheet store
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;
    let store = SheetStore::new(db);

    // 5. Seed empty sheets
    seed_from_config(&store, &seed_config)
        .await
        .inspect_err(|e| error!("Failed to seed sheets: {}", e))?;

    // 6. Run the bot
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {}", e))
        .map_err(Error::EnvVar)?;

    bot::run_bot(token, BotData::new(store)).await
}
