//! Admin Discord commands - roster, tabs, today's meal lists, revenue, late sign-ups.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            BotData,
            handlers::autocomplete,
            reply::{money, say_lines},
        },
        core::aggregate::DietCounts,
        errors::{Error, Result},
        models::Diet,
    };
    use chrono::Local;

    /// Lists the roster with each member's tab.
    #[poise::command(slash_command, prefix_command)]
    pub async fn admin_users(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let snapshot = ctx.data().snapshot().await?;
        let lines: Vec<String> = snapshot
            .roster
            .iter()
            .map(|user| {
                let mut flags = Vec::new();
                if user.volunteer {
                    flags.push("volunteer");
                }
                if user.away {
                    flags.push("away");
                }
                let flags = if flags.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", flags.join(", "))
                };
                format!(
                    "• **{}** {}{} owes {}",
                    user.nick_name,
                    user.full_name(),
                    flags,
                    money(snapshot.debt(&user.nick_name))
                )
            })
            .collect();

        let header = format!("**Roster** ({} users)", snapshot.roster.len());
        say_lines(ctx, &header, &lines).await
    }

    /// Shows a member's details, orders and tab.
    #[poise::command(slash_command, prefix_command)]
    pub async fn admin_user(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Nick name"]
        #[autocomplete = "autocomplete::autocomplete_any_nick_name"]
        nick_name: String,
    ) -> Result<()> {
        let snapshot = ctx.data().snapshot().await?;
        let user = snapshot.require_user(Some(&nick_name))?;

        let header = format!(
            "**{}**\nFull name: {}\nEmail: {}\nPhone: {}\nAddress: {}\nDiet: {}\nAllergies: {}\nOwes: **{}**",
            user.nick_name,
            user.full_name(),
            user.email,
            user.phone_number,
            user.address,
            user.diet,
            user.allergies,
            money(snapshot.debt(&user.nick_name))
        );
        let lines: Vec<String> = snapshot
            .orders_for_user(&user.nick_name)
            .into_iter()
            .map(|order| {
                format!(
                    "`{}` {} x{} = {}",
                    order.history_time(),
                    order.item,
                    order.quantity,
                    money(order.total)
                )
            })
            .collect();
        say_lines(ctx, &header, &lines).await
    }

    /// Shows tonight's dinner list with diet counts.
    #[poise::command(slash_command, prefix_command)]
    pub async fn admin_dinner(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let today = Local::now().date_naive();
        let snapshot = ctx.data().snapshot().await?;
        let roster = snapshot.dinner_roster(today);
        let counts = DietCounts::from_roster(&roster);

        let header = format!(
            "**Dinner {today}**\nTotal eating dinner: {}\n{}: {}\n{}: {}\n{}: {}",
            counts.total,
            Diet::Vegan,
            counts.vegan,
            Diet::Vegetarian,
            counts.vegetarian,
            Diet::Meat,
            counts.meat
        );
        let lines: Vec<String> = roster
            .iter()
            .map(|entry| {
                let allergies = if entry.order.allergies.is_empty() {
                    String::new()
                } else {
                    format!(" ⚠️ {}", entry.order.allergies)
                };
                let volunteer = if entry.volunteer { " (volunteer)" } else { "" };
                format!(
                    "• {} - {}{}{}",
                    entry.order.receiver, entry.order.diet, allergies, volunteer
                )
            })
            .collect();
        say_lines(ctx, &header, &lines).await
    }

    /// Shows today's breakfast and packed-lunch list.
    #[poise::command(slash_command, prefix_command)]
    pub async fn admin_breakfast(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let today = Local::now().date_naive();
        let snapshot = ctx.data().snapshot().await?;
        let roster = snapshot.breakfast_roster(today);

        let header = format!(
            "**Breakfast {today}**\nTotal eating breakfast: {}",
            roster.len()
        );
        let lines: Vec<String> = roster
            .iter()
            .map(|entry| {
                format!(
                    "• `{}` {} - {} {}",
                    entry.display_time, entry.order.receiver, entry.order.diet, entry.order.allergies
                )
                .trim_end()
                .to_string()
            })
            .collect();
        say_lines(ctx, &header, &lines).await
    }

    /// Shows revenue per tax category.
    #[poise::command(slash_command, prefix_command)]
    pub async fn admin_tax(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let snapshot = ctx.data().snapshot().await?;
        let revenue = snapshot.revenue_by_tax_category();
        if revenue.is_empty() {
            ctx.say("No orders yet.").await?;
            return Ok(());
        }

        let lines: Vec<String> = revenue
            .iter()
            .map(|(category, amount)| {
                let category = if category.is_empty() {
                    "(none)"
                } else {
                    category.as_str()
                };
                format!("• {category}: {}", money(*amount))
            })
            .collect();
        say_lines(ctx, "**Revenue by tax category**", &lines).await
    }

    /// Signs someone up for dinner after the deadline, charged to a chosen member.
    #[poise::command(slash_command, prefix_command)]
    pub async fn late_dinner(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Who pays"]
        #[autocomplete = "autocomplete::autocomplete_any_nick_name"]
        nick_name: String,
        #[description = "Diner's full name"] full_name: String,
        #[description = "Diet"]
        #[autocomplete = "autocomplete::autocomplete_diet"]
        diet: String,
        #[description = "Allergies"] allergies: Option<String>,
    ) -> Result<()> {
        let diet: Diet = diet.parse()?;
        let mut snapshot = ctx.data().snapshot().await?;

        let order = snapshot
            .order_dinner_late(
                &ctx.data().store,
                &nick_name,
                &full_name,
                diet.as_str(),
                &allergies.unwrap_or_default(),
            )
            .await?;

        ctx.say(format!(
            "🍽️ Late dinner sign-up for {} charged to {} ({}).",
            order.receiver,
            order.user_nick_name,
            money(order.total)
        ))
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
