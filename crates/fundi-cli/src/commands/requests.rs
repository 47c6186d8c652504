//! Service request commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;

use fundi_core::models::{NewServiceRequest, ServiceRequest, Urgency};
use fundi_http::ApiClient;

use crate::output;

#[derive(Args, Debug)]
pub struct RequestsCommand {
    #[command(subcommand)]
    pub command: RequestsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RequestsSubcommand {
    /// Post a new service request
    Create(CreateArgs),
    /// List your service requests
    List,
    /// Show one service request
    Get { id: u64 },
    /// Confirm the escrow deposit payment
    ConfirmPayment { id: u64 },
    /// Confirm the work is complete, releasing the escrow
    ConfirmCompletion { id: u64 },
    /// Cancel a request
    Cancel { id: u64 },
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Category id (see `fundi categories list`)
    #[arg(long)]
    pub category: u64,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub location: String,
    #[arg(long)]
    pub budget: f64,
    #[arg(long, default_value = "")]
    pub estimated_duration: String,
    /// low, medium, or high
    #[arg(long, default_value = "medium", value_parser = parse_urgency)]
    pub urgency: Urgency,
}

fn parse_urgency(s: &str) -> Result<Urgency, String> {
    match s {
        "low" => Ok(Urgency::Low),
        "medium" => Ok(Urgency::Medium),
        "high" => Ok(Urgency::High),
        other => Err(format!("unknown urgency '{}'", other)),
    }
}

pub async fn handle(cmd: RequestsCommand, client: &ApiClient) -> Result<()> {
    match cmd.command {
        RequestsSubcommand::Create(args) => {
            let request = client
                .create_service_request(&NewServiceRequest {
                    category: args.category,
                    title: args.title,
                    description: args.description,
                    location: args.location,
                    budget: args.budget,
                    estimated_duration: args.estimated_duration,
                    urgency: args.urgency,
                })
                .await
                .map_err(output::friendly)?;

            output::success("Service request posted");
            summarize(&request);
            Ok(())
        }
        RequestsSubcommand::List => {
            let requests = client.service_requests().await.map_err(output::friendly)?;
            for request in requests {
                println!(
                    "{:>4}  {:<20}  {}",
                    request.id,
                    format!("{:?}", request.status).dimmed(),
                    request.title.bold()
                );
            }
            Ok(())
        }
        RequestsSubcommand::Get { id } => {
            let request = client.service_request(id).await.map_err(output::friendly)?;
            output::json_pretty(&request)
        }
        RequestsSubcommand::ConfirmPayment { id } => {
            let request = client.confirm_payment(id).await.map_err(output::friendly)?;
            output::success("Deposit payment confirmed");
            summarize(&request);
            Ok(())
        }
        RequestsSubcommand::ConfirmCompletion { id } => {
            let request = client
                .confirm_completion(id)
                .await
                .map_err(output::friendly)?;
            output::success("Completion confirmed, escrow released");
            summarize(&request);
            Ok(())
        }
        RequestsSubcommand::Cancel { id } => {
            client
                .cancel_service_request(id)
                .await
                .map_err(output::friendly)?;
            output::success("Request cancelled");
            Ok(())
        }
    }
}

fn summarize(request: &ServiceRequest) {
    output::field("Id", &request.id.to_string());
    output::field("Title", &request.title);
    output::field("Status", &format!("{:?}", request.status));
    output::field("Deposit", &format!("{:.2}", request.deposit_amount));
}
