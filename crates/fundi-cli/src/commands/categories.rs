//! Service category commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;

use fundi_http::ApiClient;

use crate::output;

#[derive(Args, Debug)]
pub struct CategoriesCommand {
    #[command(subcommand)]
    pub command: CategoriesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CategoriesSubcommand {
    /// List all service categories
    List,
    /// Show one category
    Get { id: u64 },
}

pub async fn handle(cmd: CategoriesCommand, client: &ApiClient) -> Result<()> {
    match cmd.command {
        CategoriesSubcommand::List => {
            let categories = client.categories().await.map_err(output::friendly)?;
            for category in categories {
                println!(
                    "{:>4}  {}  {}",
                    category.id,
                    category.name.bold(),
                    category.description.dimmed()
                );
            }
            Ok(())
        }
        CategoriesSubcommand::Get { id } => {
            let category = client.category(id).await.map_err(output::friendly)?;
            output::json_pretty(&category)
        }
    }
}
