//! Roster users.

use super::{cell, parse_yes, yes_no};
use crate::{errors::Error, store::Row};
use std::{fmt, str::FromStr};

/// Columns of the `users` sheet, in order.
pub const USER_COLUMNS: [&str; 10] = [
    "nick_name",
    "first_name",
    "last_name",
    "phone_number",
    "email",
    "address",
    "volunteer",
    "away",
    "diet",
    "allergies",
];

/// A registered member of the dining operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    /// Unique, stable identifier chosen at registration
    pub nick_name: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    pub phone_number: String,
    /// Postal address
    pub address: String,
    /// Volunteers eat the meal they help serve for free
    pub volunteer: bool,
    /// Away users are left out of the active roster
    pub away: bool,
    /// `"Vegan"`, `"Vegetarian"` or `"Meat"`, kept as entered
    pub diet: String,
    /// Free-text allergies
    pub allergies: String,
}

impl User {
    /// Parses a `users` row. Returns `None` for rows without a nick name.
    #[must_use]
    pub fn from_row(row: &Row) -> Option<Self> {
        let nick_name = cell(row, "nick_name");
        if nick_name.is_empty() {
            return None;
        }

        Some(Self {
            nick_name: nick_name.to_string(),
            first_name: cell(row, "first_name").to_string(),
            last_name: cell(row, "last_name").to_string(),
            email: cell(row, "email").to_string(),
            phone_number: cell(row, "phone_number").to_string(),
            address: cell(row, "address").to_string(),
            volunteer: parse_yes(cell(row, "volunteer")),
            away: parse_yes(cell(row, "away")),
            diet: cell(row, "diet").to_string(),
            allergies: cell(row, "allergies").to_string(),
        })
    }

    /// First and last name joined by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Cell values in [`USER_COLUMNS`] order.
    #[must_use]
    pub fn to_row_values(&self) -> Vec<String> {
        vec![
            self.nick_name.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.phone_number.clone(),
            self.email.clone(),
            self.address.clone(),
            yes_no(self.volunteer).to_string(),
            yes_no(self.away).to_string(),
            self.diet.clone(),
            self.allergies.clone(),
        ]
    }
}

/// Parses the roster, skipping blank rows, sorted by nick name.
#[must_use]
pub fn parse_roster(rows: &[Row]) -> Vec<User> {
    let mut users: Vec<User> = rows.iter().filter_map(User::from_row).collect();
    users.sort_by(|a, b| a.nick_name.cmp(&b.nick_name));
    users
}

/// The three diets the kitchen cooks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Diet {
    /// No animal products
    Vegan,
    /// No meat or fish
    Vegetarian,
    /// Everything
    Meat,
}

impl Diet {
    /// All diets in display order.
    pub const ALL: [Self; 3] = [Self::Vegan, Self::Vegetarian, Self::Meat];

    /// Label as stored in sheets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vegan => "Vegan",
            Self::Vegetarian => "Vegetarian",
            Self::Meat => "Meat",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Diet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|diet| diet.as_str() == s)
            .ok_or_else(|| Error::UnknownDiet {
                name: s.to_string(),
            })
    }
}
