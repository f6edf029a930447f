use crate::apis::{deserialize_notes, Currency, Notes, Pagination};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Transfer rail used to move the funds.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum PayoutMode {
    Neft,
    Rtgs,
    Imps,
    Upi,
    #[serde(rename = "amazonpay")]
    AmazonPay,
    #[serde(rename = "card")]
    Card,
    #[serde(untagged)]
    Other(String),
}

/// Purpose of a payout.
///
/// Custom purposes can be created from the dashboard and are carried by `Custom`.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PayoutPurpose {
    Refund,
    Cashback,
    Payout,
    Salary,
    #[serde(rename = "utility bill")]
    UtilityBill,
    #[serde(rename = "vendor bill")]
    VendorBill,
    #[serde(untagged)]
    Custom(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PayoutStatus {
    Queued,
    Pending,
    Rejected,
    Processing,
    Processed,
    Cancelled,
    Reversed,
    Failed,
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
#[builder(setter(into))]
pub struct CreatePayoutRequest {
    /// The business account the payout is debited from.
    pub account_number: String,
    pub fund_account_id: String,
    /// Amount in paise.
    pub amount: u64,
    pub currency: Currency,
    pub mode: PayoutMode,
    pub purpose: PayoutPurpose,
    /// Queue the payout instead of failing it when the balance is insufficient.
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_if_low_balance: Option<bool>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    /// Shown on the beneficiary's bank statement. Up to 30 characters.
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narration: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Notes>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct FetchAllPayoutsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fund_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<PayoutMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PayoutStatus>,
    #[serde(skip)]
    pub pagination: Pagination,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Payout {
    pub id: String,
    pub entity: String,
    pub fund_account_id: String,
    pub amount: u64,
    pub currency: Currency,
    #[serde(default, deserialize_with = "deserialize_notes")]
    pub notes: Notes,
    pub fees: u64,
    pub tax: u64,
    pub status: PayoutStatus,
    /// Unique transaction reference assigned by the bank, once processed.
    pub utr: Option<String>,
    pub mode: PayoutMode,
    pub purpose: PayoutPurpose,
    pub reference_id: Option<String>,
    pub narration: Option<String>,
    pub batch_id: Option<String>,
    pub failure_reason: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}
