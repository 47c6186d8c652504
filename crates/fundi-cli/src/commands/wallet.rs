//! Wallet and escrow commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;

use fundi_core::models::Transaction;
use fundi_http::ApiClient;

use crate::output;

#[derive(Args, Debug)]
pub struct WalletCommand {
    #[command(subcommand)]
    pub command: WalletSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum WalletSubcommand {
    /// Show the wallet balance
    Balance,
    /// List wallet transactions
    Transactions,
    /// Deposit via M-Pesa (sends an STK push to the phone)
    Deposit {
        #[arg(long)]
        amount: f64,
        /// Phone number in international format, e.g. 254712345678
        #[arg(long)]
        phone: String,
    },
    /// Withdraw to an M-Pesa phone number
    Withdraw {
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        phone: String,
    },
    /// Pay the escrow deposit for a service request from the wallet
    PayDeposit {
        /// Service request id
        #[arg(long)]
        request: u64,
    },
    /// List transactions currently held in escrow
    Escrow,
}

pub async fn handle(cmd: WalletCommand, client: &ApiClient) -> Result<()> {
    match cmd.command {
        WalletSubcommand::Balance => {
            let balance = client.wallet_balance().await.map_err(output::friendly)?;
            output::field("Available", &format!("{:.2}", balance.available_balance));
            output::field("Locked", &format!("{:.2}", balance.locked_balance));
            output::field("Total", &format!("{:.2}", balance.total_balance));
            if balance.daily_withdrawal_limit > 0.0 {
                output::field(
                    "Daily limit",
                    &format!(
                        "{:.2} ({:.2} remaining)",
                        balance.daily_withdrawal_limit, balance.remaining_daily_limit
                    ),
                );
            }
            Ok(())
        }
        WalletSubcommand::Transactions => {
            let transactions = client.transactions().await.map_err(output::friendly)?;
            print_transactions(&transactions);
            Ok(())
        }
        WalletSubcommand::Deposit { amount, phone } => {
            let ack = client
                .deposit_mpesa(amount, &phone)
                .await
                .map_err(output::friendly)?;
            output::success("Deposit request accepted; approve the prompt on your phone");
            if let Some(reference) = ack.reference_number {
                output::field("Reference", &reference);
            }
            Ok(())
        }
        WalletSubcommand::Withdraw { amount, phone } => {
            let ack = client
                .withdraw_mpesa(amount, &phone)
                .await
                .map_err(output::friendly)?;
            output::success("Withdrawal request accepted");
            if let Some(reference) = ack.reference_number {
                output::field("Reference", &reference);
            }
            Ok(())
        }
        WalletSubcommand::PayDeposit { request } => {
            let body = client.pay_deposit(request).await.map_err(output::friendly)?;
            output::success("Deposit paid");
            output::json_pretty(&body)?;
            Ok(())
        }
        WalletSubcommand::Escrow => {
            let transactions = client.escrow().await.map_err(output::friendly)?;
            print_transactions(&transactions);
            Ok(())
        }
    }
}

fn print_transactions(transactions: &[Transaction]) {
    if transactions.is_empty() {
        println!("{}", "No transactions".dimmed());
        return;
    }
    for tx in transactions {
        println!(
            "{:>6}  {}  {:>10.2}  {:?}  {}",
            tx.id,
            tx.created_at.format("%Y-%m-%d %H:%M"),
            tx.amount,
            tx.transaction_type,
            tx.description.dimmed()
        );
    }
}
