//! Reply helpers - money formatting and splitting long listings.
//!
//! Discord rejects messages over 2000 characters, so listings are sent in chunks
//! that each stay under [`MESSAGE_LIMIT`].

use crate::{bot::BotData, errors::{Error, Result}};

/// Maximum characters per chunk, leaving headroom under Discord's limit.
pub const MESSAGE_LIMIT: usize = 1900;

/// Amount with two decimals and the euro sign. Display only; stored values are not rounded.
#[must_use]
pub fn money(amount: f64) -> String {
    format!("{amount:.2}€")
}

/// Splits `header` followed by `lines` into messages under [`MESSAGE_LIMIT`].
///
/// Lines are never split; a single overlong line becomes its own message.
#[must_use]
pub fn chunk_lines(header: &str, lines: &[String]) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = header.to_string();

    for line in lines {
        if !current.is_empty() && current.len() + 1 + line.len() > MESSAGE_LIMIT {
            chunks.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(line);
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Sends `header` and `lines` as one or more messages.
pub async fn say_lines(
    ctx: poise::Context<'_, BotData, Error>,
    header: &str,
    lines: &[String],
) -> Result<()> {
    for chunk in chunk_lines(header, lines) {
        ctx.say(chunk).await?;
    }
    Ok(())
}
