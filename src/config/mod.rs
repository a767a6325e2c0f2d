/// Database connection and table creation
pub mod database;

/// Seed data loading from config.toml
pub mod seed;
