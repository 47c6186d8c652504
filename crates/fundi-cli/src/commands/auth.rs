//! Login, logout, and registration commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

use fundi_core::Credentials;
use fundi_core::models::{Document, NewClient, NewContractor};
use fundi_http::{ApiClient, RegistrationOutcome};

use crate::output;

#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Authenticate and store a session
    Login(LoginArgs),
    /// End the session locally and on the backend
    Logout,
    /// Display the active session
    Whoami,
    /// Register a client account
    RegisterClient(RegisterClientArgs),
    /// Register a contractor account with verification documents
    RegisterContractor(RegisterContractorArgs),
    /// Request a password-reset email
    PasswordReset(PasswordResetArgs),
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email address
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct RegisterClientArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub full_name: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
}

#[derive(Args, Debug)]
pub struct RegisterContractorArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub full_name: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub business_name: String,
    #[arg(long, default_value = "")]
    pub bio: String,
    #[arg(long, default_value_t = 0)]
    pub years_of_experience: u32,
    #[arg(long)]
    pub hourly_rate: f64,
    #[arg(long)]
    pub location: String,
    /// Path to the national ID document
    #[arg(long)]
    pub id_document: PathBuf,
    /// Path to the KRA PIN certificate
    #[arg(long)]
    pub kra_pin_document: PathBuf,
    /// Path to a work permit, if applicable
    #[arg(long)]
    pub work_permit_document: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct PasswordResetArgs {
    #[arg(long)]
    pub email: String,
}

pub async fn handle(cmd: AuthCommand, client: &ApiClient) -> Result<()> {
    match cmd.command {
        AuthSubcommand::Login(args) => login(args, client).await,
        AuthSubcommand::Logout => logout(client).await,
        AuthSubcommand::Whoami => whoami(client).await,
        AuthSubcommand::RegisterClient(args) => register_client(args, client).await,
        AuthSubcommand::RegisterContractor(args) => register_contractor(args, client).await,
        AuthSubcommand::PasswordReset(args) => password_reset(args, client).await,
    }
}

async fn login(args: LoginArgs, client: &ApiClient) -> Result<()> {
    eprintln!("{}", "Logging in...".dimmed());

    let user = client
        .login(&Credentials::new(&args.email, &args.password))
        .await
        .map_err(output::friendly)?;

    output::success("Logged in successfully");
    println!();
    output::field("Name", &user.full_name);
    output::field("Role", &user.role().to_string());
    Ok(())
}

async fn logout(client: &ApiClient) -> Result<()> {
    client.logout().await.map_err(output::friendly)?;
    output::success("Logged out");
    Ok(())
}

async fn whoami(client: &ApiClient) -> Result<()> {
    let session = client
        .session_store()
        .load()
        .await
        .map_err(output::friendly)?
        .context("No active session. Run 'fundi auth login' first.")?;

    let identity = session.identity();
    output::field("Name", &identity.display_name);
    output::field("Role", &identity.role.to_string());
    output::field("User id", &identity.id.to_string());
    Ok(())
}

async fn register_client(args: RegisterClientArgs, client: &ApiClient) -> Result<()> {
    let outcome = client
        .register_client(&NewClient {
            email: args.email,
            password: args.password,
            full_name: args.full_name,
            phone: args.phone,
            address: args.address,
            city: args.city,
        })
        .await
        .map_err(output::friendly)?;

    report_registration(&outcome);
    Ok(())
}

async fn register_contractor(args: RegisterContractorArgs, client: &ApiClient) -> Result<()> {
    let work_permit_document = args
        .work_permit_document
        .as_deref()
        .map(load_document)
        .transpose()?;

    let outcome = client
        .register_contractor(&NewContractor {
            email: args.email,
            password: args.password,
            full_name: args.full_name,
            phone: args.phone,
            business_name: args.business_name,
            bio: args.bio,
            years_of_experience: args.years_of_experience,
            hourly_rate: args.hourly_rate,
            location: args.location,
            id_document: load_document(&args.id_document)?,
            kra_pin_document: load_document(&args.kra_pin_document)?,
            work_permit_document,
        })
        .await
        .map_err(output::friendly)?;

    report_registration(&outcome);
    output::field("Verification", "pending document review");
    Ok(())
}

async fn password_reset(args: PasswordResetArgs, client: &ApiClient) -> Result<()> {
    client
        .password_reset(&args.email)
        .await
        .map_err(output::friendly)?;
    output::success("Password reset email requested");
    Ok(())
}

fn report_registration(outcome: &RegistrationOutcome) {
    output::success("Account created");
    output::field("Email", &outcome.user().email);
    match outcome {
        RegistrationOutcome::SignedIn { .. } => output::field("Session", "active"),
        RegistrationOutcome::Created(_) => {
            output::field("Session", "none; run 'fundi auth login'")
        }
    }
}

fn load_document(path: &Path) -> Result<Document> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read document {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());

    Ok(Document::new(file_name, content_type_for(path), bytes))
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}
