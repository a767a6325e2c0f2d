//! General Discord commands - ping and help.
//! These commands don't touch the store and provide basic bot functionality.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**Olive Branch Help**\n\
        Pick your name with `/login`, then order away. Everything you order is added to your tab.\n\n\
        **You**\n\
        • `/login <nick_name>` - Select yourself from the roster.\n\
        • `/logout` - Forget your selection.\n\
        • `/whoami` - Show who you are logged in as.\n\
        • `/register` - Join the roster.\n\n\
        **Ordering**\n\
        • `/items` - List the catalog.\n\
        • `/order <item> <quantity>` - Order from the catalog.\n\
        • `/custom_order <name> <price> <tax_category> [comment]` - Record something not in the catalog.\n\
        • `/dinner <diet> [first_name] [last_name] [allergies]` - Sign up for tonight's dinner.\n\
        • `/breakfast <menu_item> [first_name] [last_name] [allergies]` - Sign up for breakfast or a packed lunch.\n\
        • `/history` - Your orders and what you owe.\n\n\
        **Admin**\n\
        • `/admin_users`, `/admin_user <nick_name>` - Roster and a member's tab.\n\
        • `/admin_dinner`, `/admin_breakfast` - Today's sign-ups.\n\
        • `/admin_tax` - Revenue per tax category.\n\
        • `/late_dinner <nick_name> <full_name> <diet> [allergies]` - Dinner sign-up after the deadline.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
