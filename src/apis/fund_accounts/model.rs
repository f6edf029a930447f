use crate::{apis::Pagination, Error};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Vpa,
    BankAccount,
    Card,
    Wallet,
}

/// Virtual payment address, for example `gauravkumar@exampleupi`.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Vpa {
    pub address: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
#[builder(setter(into))]
pub struct BankAccount {
    /// Account holder's name, between 4 and 120 characters.
    pub name: String,
    /// 11 characters IFSC of the beneficiary branch, for example `HDFC0000053`.
    pub ifsc: String,
    pub account_number: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Card {
    pub name: String,
    pub number: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum WalletProvider {
    #[serde(rename = "amazonpay")]
    AmazonPay,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
#[builder(setter(into))]
pub struct Wallet {
    pub provider: WalletProvider,
    /// Phone number linked to the wallet.
    pub phone: String,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Links a payment destination to an existing contact.
///
/// Exactly the details matching `account_type` must be set.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
#[builder(setter(into))]
pub struct CreateFundAccountRequest {
    pub contact_id: String,
    pub account_type: AccountType,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpa: Option<Vpa>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<BankAccount>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet: Option<Wallet>,
}

impl CreateFundAccountRequest {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        let (field, present) = match self.account_type {
            AccountType::Vpa => ("vpa", self.vpa.is_some()),
            AccountType::BankAccount => ("bank_account", self.bank_account.is_some()),
            AccountType::Card => ("card", self.card.is_some()),
            AccountType::Wallet => ("wallet", self.wallet.is_some()),
        };

        if !present {
            return Err(Error::Validation(format!("`{}` is missing", field)));
        }

        Ok(())
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct FetchAllFundAccountsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    #[serde(skip)]
    pub pagination: Pagination,
}

/// Card details as returned by RazorpayX. The full card number is never sent back.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct CardDetails {
    pub name: Option<String>,
    pub last4: Option<String>,
    pub network: Option<String>,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub issuer: Option<String>,
}

/// Bank account details as returned by RazorpayX.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BankAccountDetails {
    pub name: String,
    pub ifsc: String,
    pub account_number: String,
    pub bank_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct FundAccount {
    pub id: String,
    pub entity: String,
    pub contact_id: String,
    pub account_type: AccountType,
    pub active: bool,
    pub batch_id: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    pub vpa: Option<Vpa>,
    pub bank_account: Option<BankAccountDetails>,
    pub card: Option<CardDetails>,
    pub wallet: Option<Wallet>,
}
