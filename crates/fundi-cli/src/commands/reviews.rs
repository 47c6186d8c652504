//! Review commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;

use fundi_core::models::{NewReview, Review};
use fundi_http::ApiClient;

use crate::output;

#[derive(Args, Debug)]
pub struct ReviewsCommand {
    #[command(subcommand)]
    pub command: ReviewsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ReviewsSubcommand {
    /// Review completed work
    Create(CreateReviewArgs),
    /// List your reviews
    List,
    /// List reviews left for a contractor
    ForContractor { id: u64 },
}

#[derive(Args, Debug)]
pub struct CreateReviewArgs {
    /// Service request id
    #[arg(long)]
    pub request: u64,
    /// Contractor id
    #[arg(long)]
    pub contractor: u64,
    /// Overall rating, 1-5
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub rating: u8,
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub professionalism: u8,
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub quality: u8,
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub timeliness: u8,
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub communication: u8,
    #[arg(long, default_value = "")]
    pub comment: String,
}

pub async fn handle(cmd: ReviewsCommand, client: &ApiClient) -> Result<()> {
    match cmd.command {
        ReviewsSubcommand::Create(args) => {
            let new = NewReview {
                service_request: args.request,
                contractor: args.contractor,
                rating: args.rating,
                professionalism_rating: args.professionalism,
                quality_rating: args.quality,
                timeliness_rating: args.timeliness,
                communication_rating: args.communication,
                comment: args.comment,
            };
            let review = client.create_review(&new).await.map_err(output::friendly)?;
            output::success("Review submitted");
            output::field("Id", &review.id.to_string());
            Ok(())
        }
        ReviewsSubcommand::List => {
            let reviews = client.reviews().await.map_err(output::friendly)?;
            print_reviews(&reviews);
            Ok(())
        }
        ReviewsSubcommand::ForContractor { id } => {
            let reviews = client.contractor_reviews(id).await.map_err(output::friendly)?;
            print_reviews(&reviews);
            Ok(())
        }
    }
}

fn print_reviews(reviews: &[Review]) {
    if reviews.is_empty() {
        println!("{}", "No reviews".dimmed());
        return;
    }
    for review in reviews {
        println!(
            "{:>4}  {}  {}",
            review.id,
            stars(review.rating),
            review.comment.dimmed()
        );
    }
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
