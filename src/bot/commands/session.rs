//! Session Discord commands - `login`, `logout`, `whoami` and `register`.
//!
//! Logging in is just picking a name from the roster; it is a convenience, not a
//! security boundary.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete},
        core::registration,
        errors::{Error, Result},
        models::{Diet, User},
    };

    /// Selects yourself from the roster.
    #[poise::command(slash_command, prefix_command)]
    pub async fn login(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Your nick name"]
        #[autocomplete = "autocomplete::autocomplete_nick_name"]
        nick_name: String,
    ) -> Result<()> {
        let snapshot = ctx.data().snapshot().await?;
        let Some(user) = snapshot.user(&nick_name) else {
            ctx.say(format!(
                "❌ Nobody called '{nick_name}' on the roster. Use `/register` to join."
            ))
            .await?;
            return Ok(());
        };

        ctx.data()
            .login(ctx.author().id, user.nick_name.clone())
            .await;
        ctx.say(format!("👋 Hello {}!", user.nick_name)).await?;
        Ok(())
    }

    /// Forgets your roster selection.
    #[poise::command(slash_command, prefix_command)]
    pub async fn logout(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        match ctx.data().logout(ctx.author().id).await {
            Some(nick_name) => ctx.say(format!("👋 Bye {nick_name}!")).await?,
            None => ctx.say("You were not logged in.").await?,
        };
        Ok(())
    }

    /// Shows who you are logged in as.
    #[poise::command(slash_command, prefix_command)]
    pub async fn whoami(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let nick_name = ctx.data().current_nick_name(ctx.author().id).await;
        let snapshot = ctx.data().snapshot().await?;
        let user = snapshot.require_user(nick_name.as_deref())?;

        ctx.say(format!(
            "You are **{}** ({}), diet: {}{}",
            user.nick_name,
            user.full_name(),
            user.diet,
            if user.volunteer { ", volunteer" } else { "" }
        ))
        .await?;
        Ok(())
    }

    /// Joins the roster and logs you in.
    #[poise::command(slash_command, prefix_command)]
    #[allow(clippy::too_many_arguments)]
    pub async fn register(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Unique nick name"] nick_name: String,
        #[description = "First name"] first_name: String,
        #[description = "Last name"] last_name: String,
        #[description = "Diet"]
        #[autocomplete = "autocomplete::autocomplete_diet"]
        diet: String,
        #[description = "Allergies"] allergies: Option<String>,
        #[description = "Phone number"] phone_number: Option<String>,
        #[description = "Email"] email: Option<String>,
        #[description = "Address"] address: Option<String>,
        #[description = "Volunteering in the kitchen?"] volunteer: Option<bool>,
    ) -> Result<()> {
        let diet: Diet = diet.parse()?;
        let snapshot = ctx.data().snapshot().await?;

        let user = User {
            nick_name: nick_name.trim().to_string(),
            first_name,
            last_name,
            email: email.unwrap_or_default(),
            phone_number: phone_number.unwrap_or_default(),
            address: address.unwrap_or_default(),
            volunteer: volunteer.unwrap_or(false),
            away: false,
            diet: diet.to_string(),
            allergies: allergies.unwrap_or_default(),
        };
        let user = registration::register_user(&ctx.data().store, &snapshot.roster, user).await?;

        ctx.data()
            .login(ctx.author().id, user.nick_name.clone())
            .await;
        ctx.say(format!(
            "✅ Welcome {}! You are registered and logged in.",
            user.nick_name
        ))
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
