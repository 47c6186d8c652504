//! Wallet and escrow endpoints.

use serde::Serialize;
use tracing::instrument;

use fundi_core::Result;
use fundi_core::models::{MpesaAck, Transaction, WalletBalance};

use super::ListEnvelope;
use crate::client::ApiClient;

#[derive(Serialize)]
struct MpesaRequest<'a> {
    amount: f64,
    phone_number: &'a str,
}

#[derive(Serialize)]
struct PayDepositRequest {
    service_request_id: u64,
}

impl ApiClient {
    /// Fetch the wallet balance snapshot.
    pub async fn wallet_balance(&self) -> Result<WalletBalance> {
        self.get("/wallet/balance/").await
    }

    /// List wallet transactions, newest first.
    pub async fn transactions(&self) -> Result<Vec<Transaction>> {
        let env: ListEnvelope<Transaction> = self.get("/wallet/transactions/").await?;
        Ok(env.into_items())
    }

    /// Start an M-Pesa deposit (STK push to the given phone).
    #[instrument(skip(self, phone_number))]
    pub async fn deposit_mpesa(&self, amount: f64, phone_number: &str) -> Result<MpesaAck> {
        self.post(
            "/wallet/deposit/mpesa/",
            Some(&MpesaRequest {
                amount,
                phone_number,
            }),
        )
        .await
    }

    /// Start an M-Pesa withdrawal to the given phone.
    #[instrument(skip(self, phone_number))]
    pub async fn withdraw_mpesa(&self, amount: f64, phone_number: &str) -> Result<MpesaAck> {
        self.post(
            "/wallet/withdraw/mpesa/",
            Some(&MpesaRequest {
                amount,
                phone_number,
            }),
        )
        .await
    }

    /// Pay the escrow deposit for a service request from the wallet.
    ///
    /// The response shape varies across backend versions; callers get the
    /// raw JSON and display what they find.
    pub async fn pay_deposit(&self, service_request_id: u64) -> Result<serde_json::Value> {
        self.post(
            "/wallet/pay-deposit/",
            Some(&PayDepositRequest { service_request_id }),
        )
        .await
    }

    /// List transactions currently held in escrow.
    pub async fn escrow(&self) -> Result<Vec<Transaction>> {
        let env: ListEnvelope<Transaction> = self.get("/wallet/escrow/").await?;
        Ok(env.into_items())
    }
}
