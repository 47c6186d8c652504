//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{
    assignments::AssignmentsCommand, auth::AuthCommand, categories::CategoriesCommand,
    contractors::ContractorsCommand, requests::RequestsCommand, reviews::ReviewsCommand,
    wallet::WalletCommand,
};

/// Command-line client for the fundi contractor marketplace.
#[derive(Parser, Debug)]
#[command(name = "fundi")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Backend base URL (defaults to $FUNDI_API_URL, then localhost)
    #[arg(long, global = true)]
    pub api: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Login, logout, and account registration
    Auth(AuthCommand),
    /// Browse service categories
    Categories(CategoriesCommand),
    /// Post and track service requests
    Requests(RequestsCommand),
    /// Browse contractors and manage your contractor profile
    Contractors(ContractorsCommand),
    /// Respond to and progress assignments
    Assignments(AssignmentsCommand),
    /// Wallet balance, transactions, and M-Pesa transfers
    Wallet(WalletCommand),
    /// Submit and browse reviews
    Reviews(ReviewsCommand),
}
