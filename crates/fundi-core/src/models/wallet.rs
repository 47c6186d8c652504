//! Wallet and transaction payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The wallet balance snapshot.
///
/// Older backend versions omit the withdrawal-limit fields, so they
/// default to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub available_balance: f64,
    pub locked_balance: f64,
    pub total_balance: f64,
    #[serde(default)]
    pub daily_withdrawal_limit: f64,
    #[serde(default)]
    pub remaining_daily_limit: f64,
}

/// Kind of wallet movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    EscrowLock,
    EscrowRelease,
    Refund,
    PlatformFee,
    Commission,
}

/// Settlement state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

/// One wallet ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub status: TransactionStatus,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
}

/// Acknowledgement of a mobile-money deposit or withdrawal request.
///
/// The settlement itself is asynchronous on the backend side; this only
/// confirms the request was accepted. Field presence varies across backend
/// versions, so everything is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MpesaAck {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub reference_number: Option<String>,
    #[serde(default)]
    pub transaction_id: Option<u64>,
}
