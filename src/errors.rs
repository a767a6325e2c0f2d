//! Unified error type for Olive Branch.
//!
//! Errors fall into three groups: requester mistakes (validation and lookups that
//! are reported back verbatim), storage failures that abort the current request,
//! and startup problems (configuration, environment, Discord framework).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Store error: {message}")]
    Store { message: String },

    #[error("Malformed stored row: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Quantity must be a non-negative number, got '{input}'")]
    InvalidQuantity { input: String },

    #[error("Price must be a non-negative number with at most two decimals, got '{input}'")]
    InvalidPrice { input: String },

    #[error("Unknown tax category '{name}'")]
    UnknownTaxCategory { name: String },

    #[error("Unknown breakfast menu item '{name}'")]
    UnknownMenuItem { name: String },

    #[error("Unknown diet '{name}', expected Vegan, Vegetarian or Meat")]
    UnknownDiet { name: String },

    #[error("Nick name cannot be empty")]
    EmptyNickName,

    #[error("Nick name '{nick_name}' is already taken")]
    NickNameTaken { nick_name: String },

    #[error("Sign-up for {meal} closed at {deadline}")]
    SignupClosed { meal: String, deadline: String },

    #[error("User '{nick_name}' not found")]
    UserNotFound { nick_name: String },

    #[error("Item '{name}' not found")]
    ItemNotFound { name: String },

    #[error("No user selected, use /login first")]
    NoUserSelected,

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Discord framework error: {0}")]
    Discord(Box<poise::serenity_prelude::Error>),
}

impl Error {
    /// True for errors caused by the requester's input or selection.
    ///
    /// These are shown to the requester as-is; everything else is logged and
    /// answered with a generic failure message.
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::InvalidQuantity { .. }
                | Self::InvalidPrice { .. }
                | Self::UnknownTaxCategory { .. }
                | Self::UnknownMenuItem { .. }
                | Self::UnknownDiet { .. }
                | Self::EmptyNickName
                | Self::NickNameTaken { .. }
                | Self::SignupClosed { .. }
                | Self::UserNotFound { .. }
                | Self::ItemNotFound { .. }
                | Self::NoUserSelected
        )
    }
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Discord(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
