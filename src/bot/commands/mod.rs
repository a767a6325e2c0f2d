//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Kitchen and bookkeeping views plus late sign-ups
pub mod admin;

/// General utility commands
pub mod general;

/// Ordering and sign-up commands
pub mod order;

/// Login, logout and registration
pub mod session;

// Export commands
pub use admin::*;
pub use general::*;
pub use order::*;
pub use session::*;

use crate::{bot::BotData, errors::Error};

/// Every command the bot registers.
#[must_use]
pub fn all() -> Vec<poise::Command<BotData, Error>> {
    vec![
        ping(),
        help(),
        login(),
        logout(),
        whoami(),
        register(),
        items(),
        order(),
        custom_order(),
        dinner(),
        breakfast(),
        history(),
        admin_users(),
        admin_user(),
        admin_dinner(),
        admin_breakfast(),
        admin_tax(),
        late_dinner(),
    ]
}
