//! Subcommand implementations, one module per backend area.

pub mod assignments;
pub mod auth;
pub mod categories;
pub mod contractors;
pub mod requests;
pub mod reviews;
pub mod wallet;
