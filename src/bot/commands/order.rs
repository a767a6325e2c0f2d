//! Ordering Discord commands - catalog and custom orders, meal sign-ups, history.
//!
//! Every command loads a fresh snapshot, resolves the caller's roster selection, and
//! hands the request to the core. Validation failures surface through the framework's
//! error handler as the error's own message.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            BotData,
            handlers::autocomplete,
            reply::{money, say_lines},
        },
        core::ordering::{BreakfastSignup, CustomOrderRequest, DinnerSignup},
        errors::{Error, Result},
        models::{BreakfastItem, Diet},
    };
    use chrono::Local;

    /// Orders shown by `/history`.
    const HISTORY_LIMIT: usize = 25;

    /// Lists the catalog with prices.
    #[poise::command(slash_command, prefix_command)]
    pub async fn items(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let snapshot = ctx.data().snapshot().await?;
        if snapshot.catalog.is_empty() {
            ctx.say("The catalog is empty.").await?;
            return Ok(());
        }

        let lines: Vec<String> = snapshot
            .catalog
            .iter()
            .map(|item| {
                if item.description.is_empty() {
                    format!("• **{}** {}", item.name, money(item.price))
                } else {
                    format!("• **{}** {} - {}", item.name, money(item.price), item.description)
                }
            })
            .collect();
        say_lines(ctx, "**Catalog**", &lines).await
    }

    /// Orders an item from the catalog.
    #[poise::command(slash_command, prefix_command)]
    pub async fn order(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Item to order"]
        #[autocomplete = "autocomplete::autocomplete_item_name"]
        item_name: String,
        #[description = "How many"] quantity: String,
    ) -> Result<()> {
        let nick_name = ctx.data().current_nick_name(ctx.author().id).await;
        let mut snapshot = ctx.data().snapshot().await?;

        let order = snapshot
            .order_item(&ctx.data().store, nick_name.as_deref(), &item_name, &quantity)
            .await?;

        ctx.say(format!(
            "✅ '{}' x{} registered, {} added to your tab. Thank you!",
            order.item,
            order.quantity,
            money(order.total)
        ))
        .await?;
        Ok(())
    }

    /// Records something that is not in the catalog.
    #[poise::command(slash_command, prefix_command)]
    pub async fn custom_order(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "What did you get?"] name: String,
        #[description = "Price, e.g. 2.50"] price: String,
        #[description = "Tax category"]
        #[autocomplete = "autocomplete::autocomplete_tax_category"]
        tax_category: String,
        #[description = "Optional comment"] comment: Option<String>,
    ) -> Result<()> {
        let nick_name = ctx.data().current_nick_name(ctx.author().id).await;
        let mut snapshot = ctx.data().snapshot().await?;

        let request = CustomOrderRequest {
            name,
            price,
            tax_category,
            comment: comment.unwrap_or_default(),
        };
        let order = snapshot
            .order_custom_item(&ctx.data().store, nick_name.as_deref(), &request)
            .await?;

        ctx.say(format!(
            "✅ '{}' registered, {} added to your tab.",
            order.item,
            money(order.total)
        ))
        .await?;
        Ok(())
    }

    /// Signs you or a guest up for tonight's dinner.
    #[poise::command(slash_command, prefix_command)]
    pub async fn dinner(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Diet"]
        #[autocomplete = "autocomplete::autocomplete_diet"]
        diet: String,
        #[description = "Guest first name (defaults to yours)"] first_name: Option<String>,
        #[description = "Guest last name (defaults to yours)"] last_name: Option<String>,
        #[description = "Allergies"] allergies: Option<String>,
    ) -> Result<()> {
        let diet: Diet = diet.parse()?;
        let nick_name = ctx.data().current_nick_name(ctx.author().id).await;
        let mut snapshot = ctx.data().snapshot().await?;
        let user = snapshot.require_user(nick_name.as_deref())?;

        let form = DinnerSignup {
            first_name: first_name.unwrap_or_else(|| user.first_name.clone()),
            last_name: last_name.unwrap_or_else(|| user.last_name.clone()),
            diet: diet.to_string(),
            allergies: allergies.unwrap_or_else(|| user.allergies.clone()),
        };
        let order = snapshot
            .order_dinner(
                &ctx.data().store,
                nick_name.as_deref(),
                &form,
                Local::now().naive_local(),
            )
            .await?;

        ctx.say(format!(
            "🍽️ Dinner sign-up for {} successful ({}).",
            order.receiver,
            money(order.total)
        ))
        .await?;
        Ok(())
    }

    /// Signs you or a guest up for breakfast or a packed lunch.
    #[poise::command(slash_command, prefix_command)]
    pub async fn breakfast(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Menu item"]
        #[autocomplete = "autocomplete::autocomplete_menu_item"]
        menu_item: String,
        #[description = "Guest first name (defaults to yours)"] first_name: Option<String>,
        #[description = "Guest last name (defaults to yours)"] last_name: Option<String>,
        #[description = "Allergies"] allergies: Option<String>,
    ) -> Result<()> {
        let menu_item: BreakfastItem = menu_item.parse()?;
        let nick_name = ctx.data().current_nick_name(ctx.author().id).await;
        let mut snapshot = ctx.data().snapshot().await?;
        let user = snapshot.require_user(nick_name.as_deref())?;

        let form = BreakfastSignup {
            menu_item,
            first_name: first_name.unwrap_or_else(|| user.first_name.clone()),
            last_name: last_name.unwrap_or_else(|| user.last_name.clone()),
            allergies: allergies.unwrap_or_else(|| user.allergies.clone()),
        };
        let order = snapshot
            .order_breakfast(
                &ctx.data().store,
                nick_name.as_deref(),
                &form,
                Local::now().naive_local(),
            )
            .await?;

        ctx.say(format!(
            "🥐 {} for {} registered ({}).",
            order.diet,
            order.receiver,
            money(order.total)
        ))
        .await?;
        Ok(())
    }

    /// Shows your recent orders and what you owe.
    #[poise::command(slash_command, prefix_command)]
    pub async fn history(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let nick_name = ctx.data().current_nick_name(ctx.author().id).await;
        let snapshot = ctx.data().snapshot().await?;
        let user = snapshot.require_user(nick_name.as_deref())?;

        let orders = snapshot.orders_for_user(&user.nick_name);
        let lines: Vec<String> = orders
            .iter()
            .take(HISTORY_LIMIT)
            .map(|order| {
                format!(
                    "`{}` {} x{} @ {} = {}",
                    order.history_time(),
                    order.item,
                    order.quantity,
                    money(order.price),
                    money(order.total)
                )
            })
            .collect();

        let header = format!(
            "**{}** owes **{}** over {} orders",
            user.nick_name,
            money(snapshot.debt(&user.nick_name)),
            orders.len()
        );
        say_lines(ctx, &header, &lines).await
    }
}

// Re-export all commands
pub use inner::*;
