//! Assignment commands for contractors.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;

use fundi_core::models::Assignment;
use fundi_http::ApiClient;

use crate::output;

#[derive(Args, Debug)]
pub struct AssignmentsCommand {
    #[command(subcommand)]
    pub command: AssignmentsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AssignmentsSubcommand {
    /// List assignments awaiting your response
    Pending,
    /// Accept an assignment
    Accept { id: u64 },
    /// Decline an assignment
    Decline { id: u64 },
    /// Mark an accepted assignment as started
    Start { id: u64 },
    /// Mark an assignment as complete
    Complete {
        id: u64,
        /// Closing notes for the client
        #[arg(long, default_value = "")]
        notes: String,
    },
}

pub async fn handle(cmd: AssignmentsCommand, client: &ApiClient) -> Result<()> {
    match cmd.command {
        AssignmentsSubcommand::Pending => {
            let assignments = client
                .pending_assignments()
                .await
                .map_err(output::friendly)?;
            if assignments.is_empty() {
                println!("{}", "No pending assignments".dimmed());
            }
            for assignment in assignments {
                println!(
                    "{:>4}  {}  {}  budget {:.2}",
                    assignment.id,
                    assignment.service_request.title.bold(),
                    assignment.service_request.location.dimmed(),
                    assignment.service_request.budget
                );
            }
            Ok(())
        }
        AssignmentsSubcommand::Accept { id } => {
            let assignment = client.accept_assignment(id).await.map_err(output::friendly)?;
            output::success("Assignment accepted");
            summarize(&assignment);
            Ok(())
        }
        AssignmentsSubcommand::Decline { id } => {
            client
                .decline_assignment(id)
                .await
                .map_err(output::friendly)?;
            output::success("Assignment declined");
            Ok(())
        }
        AssignmentsSubcommand::Start { id } => {
            let assignment = client.start_assignment(id).await.map_err(output::friendly)?;
            output::success("Assignment started");
            summarize(&assignment);
            Ok(())
        }
        AssignmentsSubcommand::Complete { id, notes } => {
            let assignment = client
                .complete_assignment(id, &notes)
                .await
                .map_err(output::friendly)?;
            output::success("Assignment marked complete; awaiting client confirmation");
            summarize(&assignment);
            Ok(())
        }
    }
}

fn summarize(assignment: &Assignment) {
    output::field("Id", &assignment.id.to_string());
    output::field("Request", &assignment.service_request.title);
    output::field("Status", &format!("{:?}", assignment.status));
}
