//! User registration - the only way new users enter the roster.

use crate::{
    errors::{Error, Result},
    models::User,
    store::{Sheet, TableStore},
};
use tracing::info;

/// Checks a requested nick name against the current roster.
pub fn validate_nick_name(roster: &[User], nick_name: &str) -> Result<()> {
    if nick_name.trim().is_empty() {
        return Err(Error::EmptyNickName);
    }
    if roster.iter().any(|user| user.nick_name == nick_name) {
        return Err(Error::NickNameTaken {
            nick_name: nick_name.to_string(),
        });
    }
    Ok(())
}

/// Adds `user` to the top of the `users` sheet after validating the nick name.
///
/// Uniqueness is checked against `roster` as loaded; two simultaneous registrations of
/// the same name are not detected.
pub async fn register_user<S: TableStore>(store: &S, roster: &[User], user: User) -> Result<User> {
    validate_nick_name(roster, &user.nick_name)?;
    store
        .append_row(Sheet::Users, user.to_row_values(), true)
        .await?;
    info!(nick_name = %user.nick_name, "Registered user");
    Ok(user)
}
