use crate::apis::{deserialize_notes, payouts::PayoutMode, Currency, Notes};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A credit or debit on a business account statement.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub entity: String,
    pub account_number: String,
    pub amount: u64,
    pub currency: Currency,
    pub credit: u64,
    pub debit: u64,
    /// Account balance after this transaction.
    pub balance: i64,
    /// The payout, reversal or bank transfer that caused this transaction.
    pub source: Option<TransactionSource>,
    pub fees: Option<u64>,
    pub tax: Option<u64>,
    pub status: Option<String>,
    pub utr: Option<String>,
    pub mode: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct TransactionSource {
    pub id: String,
    pub entity: String,
    pub amount: Option<u64>,
    pub fund_account_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_notes")]
    pub notes: Notes,
    pub payer_name: Option<String>,
    pub payer_contact: Option<String>,
    pub payer_ifsc: Option<String>,
    pub mode: Option<PayoutMode>,
    pub bank_reference: Option<String>,
    pub utr: Option<String>,
}
