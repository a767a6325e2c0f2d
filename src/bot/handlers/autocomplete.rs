//! Autocomplete handlers for Discord slash command parameters.
//!
//! Suggestions come from a fresh snapshot (nick names, item names) or from the fixed
//! enumerations (menu, tax categories, diets). The suggested values are exactly the
//! values the commands parse, so a picked suggestion always validates.

use crate::{
    bot::{BotData, reply::money},
    errors::Error,
    models::{AdminConfig, BreakfastItem, Diet, TaxCategory},
};
use poise::serenity_prelude::AutocompleteChoice;
use tracing::warn;

/// Discord shows at most this many suggestions.
const MAX_SUGGESTIONS: usize = 25;

/// Keeps candidates containing `partial` (case-insensitive), in their given order.
pub fn filter_choices<I>(candidates: I, partial: &str) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let partial_lower = partial.to_lowercase();
    candidates
        .into_iter()
        .filter(|candidate| candidate.to_lowercase().contains(&partial_lower))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Suggests nick names of users who are not away.
pub async fn autocomplete_nick_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let Ok(snapshot) = ctx.data().snapshot().await else {
        return Vec::new();
    };
    filter_choices(
        snapshot.active_users().map(|user| user.nick_name.clone()),
        partial,
    )
}

/// Suggests every nick name on the roster, including users who are away.
pub async fn autocomplete_any_nick_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let Ok(snapshot) = ctx.data().snapshot().await else {
        return Vec::new();
    };
    filter_choices(
        snapshot.roster.iter().map(|user| user.nick_name.clone()),
        partial,
    )
}

/// Suggests catalog item names.
pub async fn autocomplete_item_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let Ok(snapshot) = ctx.data().snapshot().await else {
        return Vec::new();
    };
    filter_choices(snapshot.catalog.iter().map(|item| item.name.clone()), partial)
}

/// Shown name of a menu choice, e.g. `Full English (6.50€)`.
#[must_use]
pub fn menu_label(admin: &AdminConfig, item: BreakfastItem) -> String {
    format!("{item} ({})", money(admin.breakfast_price(item)))
}

/// Menu items matching `partial`, in menu order.
#[must_use]
pub fn matching_menu_items(partial: &str) -> Vec<BreakfastItem> {
    filter_choices(
        BreakfastItem::ALL.into_iter().map(|item| item.to_string()),
        partial,
    )
    .iter()
    .filter_map(|label| label.parse().ok())
    .collect()
}

/// Suggests breakfast menu labels with prices.
pub async fn autocomplete_menu_item(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<AutocompleteChoice> {
    let admin = match ctx.data().snapshot().await {
        Ok(snapshot) => snapshot.admin,
        Err(e) => {
            warn!("Could not load prices for menu autocomplete: {e}");
            AdminConfig::default()
        }
    };
    matching_menu_items(partial)
        .into_iter()
        .map(|item| AutocompleteChoice::new(menu_label(&admin, item), item.to_string()))
        .collect()
}

/// Suggests tax category labels.
pub async fn autocomplete_tax_category(
    _ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    filter_choices(
        TaxCategory::ALL.into_iter().map(|category| category.to_string()),
        partial,
    )
}

/// Suggests diets.
pub async fn autocomplete_diet(
    _ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    filter_choices(Diet::ALL.into_iter().map(|diet| diet.to_string()), partial)
}
