use crate::{
    apis::{deserialize_notes, Notes, Pagination},
    Error,
};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Allowed length, in characters, of a contact name.
pub const CONTACT_NAME_LENGTH: RangeInclusive<usize> = 3..=50;

/// Classification of a contact.
///
/// Additional classifications can be created from the dashboard and are carried by `Custom`.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContactType {
    Vendor,
    Customer,
    Employee,
    /// The business itself.
    #[serde(rename = "self")]
    SelfAccount,
    #[serde(untagged)]
    Custom(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
#[builder(setter(into))]
pub struct CreateContactRequest {
    /// Between 3 and 50 characters.
    pub name: String,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number.
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ContactType>,
    /// Up to 40 characters.
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Notes>,
}

impl CreateContactRequest {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        validate_name(&self.name)
    }
}

/// Fields to change on an existing contact. Unset fields are left untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct UpdateContactRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ContactType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Notes>,
}

impl UpdateContactRequest {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        self.name.as_deref().map_or(Ok(()), validate_name)
    }
}

fn validate_name(name: &str) -> Result<(), Error> {
    if !CONTACT_NAME_LENGTH.contains(&name.chars().count()) {
        return Err(Error::Validation(format!(
            "`name` must be between {} and {} characters",
            CONTACT_NAME_LENGTH.start(),
            CONTACT_NAME_LENGTH.end()
        )));
    }

    Ok(())
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct FetchAllContactsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ContactType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip)]
    pub pagination: Pagination,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Contact {
    pub id: String,
    pub entity: String,
    pub name: String,
    pub contact: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub r#type: Option<ContactType>,
    pub reference_id: Option<String>,
    /// Set when the contact was created through a bulk upload.
    pub batch_id: Option<String>,
    pub active: bool,
    #[serde(default, deserialize_with = "deserialize_notes")]
    pub notes: Notes,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}
