//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for Olive Branch: slash commands for
//! ordering and administration, autocomplete handlers, and the shared bot data that
//! remembers which roster member each Discord account has selected.

/// Discord command implementations (session, ordering, admin, general)
pub mod commands;
/// Discord interaction handlers (autocomplete, etc.)
pub mod handlers;
/// Message formatting and chunked replies
pub mod reply;

use crate::{
    core::Snapshot,
    errors::{Error, Result},
    store::SheetStore,
};
use poise::serenity_prelude as serenity;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::{error, info, instrument};

/// Shared data available to all bot commands.
///
/// Holds the store and the login selections. Sheet contents are deliberately not
/// kept here: every command loads its own [`Snapshot`].
pub struct BotData {
    /// Tabular store for all reads and writes
    pub store: SheetStore,
    logins: Mutex<HashMap<serenity::UserId, String>>,
}

impl BotData {
    /// Creates a new `BotData` instance around the given store.
    #[must_use]
    pub fn new(store: SheetStore) -> Self {
        Self {
            store,
            logins: Mutex::new(HashMap::new()),
        }
    }

    /// Loads a fresh snapshot of every sheet.
    pub async fn snapshot(&self) -> Result<Snapshot> {
        Snapshot::load(&self.store).await
    }

    /// Remembers `nick_name` as the roster member behind `account`.
    pub async fn login(&self, account: serenity::UserId, nick_name: String) {
        self.logins.lock().await.insert(account, nick_name);
    }

    /// Forgets the selection for `account`, returning the previous nick name.
    pub async fn logout(&self, account: serenity::UserId) -> Option<String> {
        self.logins.lock().await.remove(&account)
    }

    /// Nick name currently selected by `account`.
    pub async fn current_nick_name(&self, account: serenity::UserId) -> Option<String> {
        self.logins.lock().await.get(&account).cloned()
    }
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {error}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            let reply = if error.is_user_facing() {
                format!("❌ {error}")
            } else {
                error!("Error in command `{}`: {:?}", ctx.command().name, error);
                "❌ Something went wrong, please try again.".to_string()
            };
            if let Err(e) = ctx.say(reply).await {
                error!("Failed to send error message: {e}");
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {e}");
            }
        }
    }
}

/// Registers all commands and runs the Discord client until it stops.
#[instrument(skip(token, data))]
pub async fn run_bot(token: String, data: BotData) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(data)
            })
        })
        .build();

    let intents =
        serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::ClientBuilder::new(&token, intents)
        .framework(framework)
        .await?;

    info!("Starting bot client...");
    client.start().await?;
    Ok(())
}
