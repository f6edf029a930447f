use crate::{
    apis::{
        contacts::ContactType, deserialize_notes, payouts::PayoutPurpose, Currency, Notes,
        Pagination,
    },
    dates::DateInput,
    Error,
};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Recipient of a payout link: either an existing contact referenced by `id`,
/// or the details of a new one.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct PayoutLinkContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ContactType>,
}

impl PayoutLinkContact {
    /// A new contact needs a name and a way to reach it.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if is_set(&self.id) {
            return Ok(());
        }

        if !is_set(&self.name) {
            return Err(Error::Validation(
                "`contact name` is required if not providing id".to_string(),
            ));
        }

        if !is_set(&self.email) && !is_set(&self.contact) {
            return Err(Error::Validation(
                "either contact or email mandatory if id is not used".to_string(),
            ));
        }

        Ok(())
    }
}

fn is_set(field: &Option<String>) -> bool {
    field.as_deref().map_or(false, |value| !value.is_empty())
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct CreatePayoutLinkRequest {
    pub account_number: String,
    pub contact: PayoutLinkContact,
    /// Amount in paise.
    pub amount: u64,
    pub currency: Currency,
    pub purpose: PayoutPurpose,
    /// Shown to the recipient on the payout link page.
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Your own reference for the link, up to 40 characters.
    pub receipt: String,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_sms: Option<bool>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_email: Option<bool>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Notes>,
    /// When the link stops accepting claims. Sent as Unix seconds.
    #[builder(default, setter(into, strip_option))]
    #[serde(skip)]
    pub expire_by: Option<DateInput>,
}

/// Body of a create request, with `expire_by` already normalized.
#[derive(Serialize, Debug)]
pub(crate) struct CreatePayoutLinkBody<'a> {
    #[serde(flatten)]
    request: &'a CreatePayoutLinkRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    expire_by: Option<i64>,
}

impl CreatePayoutLinkRequest {
    pub(crate) fn body(&self) -> Result<CreatePayoutLinkBody<'_>, Error> {
        self.contact.validate()?;

        Ok(CreatePayoutLinkBody {
            request: self,
            expire_by: self
                .expire_by
                .as_ref()
                .map(DateInput::to_unix_seconds)
                .transpose()?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PayoutLinkStatus {
    Issued,
    Processing,
    Processed,
    Cancelled,
    Expired,
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct FetchAllPayoutLinksRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fund_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<PayoutPurpose>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PayoutLinkStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
    #[serde(skip)]
    pub pagination: Pagination,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct PayoutLink {
    pub id: String,
    pub entity: String,
    pub contact_id: Option<String>,
    pub contact: Option<PayoutLinkContact>,
    /// Set once the recipient has chosen where to receive the funds.
    pub fund_account_id: Option<String>,
    pub payout_id: Option<String>,
    pub purpose: PayoutPurpose,
    pub status: PayoutLinkStatus,
    pub amount: u64,
    pub currency: Currency,
    pub description: Option<String>,
    #[serde(default)]
    pub attempt_count: u32,
    pub receipt: Option<String>,
    #[serde(default, deserialize_with = "deserialize_notes")]
    pub notes: Notes,
    pub short_url: String,
    #[serde(default)]
    pub send_sms: bool,
    #[serde(default)]
    pub send_email: bool,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub expire_by: Option<DateTime<Utc>>,
    #[serde(
        default,
        alias = "expire_at",
        with = "chrono::serde::ts_seconds_option"
    )]
    pub expired_at: Option<DateTime<Utc>>,
}
