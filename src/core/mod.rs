//! Core business logic - framework-agnostic ledger, ordering and reporting.

/// Derived views: debt, revenue, daily rosters
pub mod aggregate;
/// Sign-up deadline evaluation
pub mod deadline;
/// The in-memory order ledger
pub mod ledger;
/// Order construction for the four ordering intents
pub mod ordering;
/// New user registration
pub mod registration;
/// Startup seeding from config.toml
pub mod seed;
/// Per-request snapshot of all sheets
pub mod snapshot;

pub use ledger::Ledger;
pub use snapshot::Snapshot;
