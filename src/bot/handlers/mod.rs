//! Discord interaction handlers
//!
//! This module provides handlers for Discord interactions other than the commands
//! themselves.

/// Autocomplete handlers for nick names, items, menu items, tax categories and diets
pub mod autocomplete;
