//! Contractor browsing and profile commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;

use fundi_core::models::ContractorProfile;
use fundi_http::ApiClient;

use crate::output;

#[derive(Args, Debug)]
pub struct ContractorsCommand {
    #[command(subcommand)]
    pub command: ContractorsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ContractorsSubcommand {
    /// Browse contractors
    List,
    /// Show one contractor profile
    Get { id: u64 },
    /// Show your own contractor profile
    Me,
    /// Mark yourself available or unavailable for new assignments
    SetAvailability {
        #[arg(long, action = clap::ArgAction::Set)]
        available: bool,
    },
    /// Show your document verification status
    VerificationStatus,
}

pub async fn handle(cmd: ContractorsCommand, client: &ApiClient) -> Result<()> {
    match cmd.command {
        ContractorsSubcommand::List => {
            let contractors = client.contractors().await.map_err(output::friendly)?;
            for profile in contractors {
                summarize_row(&profile);
            }
            Ok(())
        }
        ContractorsSubcommand::Get { id } => {
            let profile = client.contractor(id).await.map_err(output::friendly)?;
            output::json_pretty(&profile)
        }
        ContractorsSubcommand::Me => {
            let profile = client
                .my_contractor_profile()
                .await
                .map_err(output::friendly)?;
            output::field("Business", &profile.business_name);
            output::field("Rating", &format!("{:.1}", profile.rating));
            output::field("Jobs completed", &profile.total_jobs_completed.to_string());
            output::field(
                "Available",
                if profile.is_available { "yes" } else { "no" },
            );
            Ok(())
        }
        ContractorsSubcommand::SetAvailability { available } => {
            client
                .update_availability(available)
                .await
                .map_err(output::friendly)?;
            output::success(if available {
                "You are now accepting assignments"
            } else {
                "You are no longer accepting assignments"
            });
            Ok(())
        }
        ContractorsSubcommand::VerificationStatus => {
            let report = client
                .verification_status()
                .await
                .map_err(output::friendly)?;
            output::field("Status", &format!("{:?}", report.verification_status));
            if let Some(notes) = report.verification_notes {
                output::field("Notes", &notes);
            }
            Ok(())
        }
    }
}

fn summarize_row(profile: &ContractorProfile) {
    let availability = if profile.is_available {
        "available".green()
    } else {
        "busy".dimmed()
    };
    println!(
        "{:>4}  {}  {:.1}★  {}/hr  {}",
        profile.user.id,
        profile.business_name.bold(),
        profile.rating,
        profile.hourly_rate,
        availability
    );
}
