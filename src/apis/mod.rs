//! Clients for the various RazorpayX APIs.

use crate::{
    common::{DEFAULT_COUNT, MAX_COUNT},
    dates::DateInput,
    Error,
};
use derive_builder::Builder;
use serde::{Deserialize, Deserializer, Serialize};
use std::{collections::HashMap, fmt};

pub mod contacts;
pub mod fund_accounts;
pub mod payout_links;
pub mod payouts;
pub mod transactions;

/// Free-form key-value pairs attached to an entity, passed through verbatim.
pub type Notes = HashMap<String, String>;

/// Envelope returned by every "fetch all" endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Collection<T> {
    pub entity: String,
    pub count: u64,
    pub items: Vec<T>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Inr,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Inr => write!(f, "INR"),
        }
    }
}

/// Time window and page selection shared by every "fetch all" operation.
///
/// `count` defaults to 10 and may not exceed 100; `skip` defaults to 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct Pagination {
    pub from: Option<DateInput>,
    pub to: Option<DateInput>,
    pub count: Option<u32>,
    pub skip: Option<u32>,
}

impl Pagination {
    /// Validates the page and normalizes the time window into a query placed after `filters`.
    pub(crate) fn query<'a, F>(&self, filters: &'a F) -> Result<ListQuery<'a, F>, Error> {
        let count = match self.count {
            Some(count) if count > MAX_COUNT => {
                return Err(Error::Validation(format!(
                    "`count` can be maximum of {}",
                    MAX_COUNT
                )))
            }
            Some(count) if count > 0 => count,
            _ => DEFAULT_COUNT,
        };

        Ok(ListQuery {
            filters,
            from: self.from.as_ref().map(DateInput::to_unix_seconds).transpose()?,
            to: self.to.as_ref().map(DateInput::to_unix_seconds).transpose()?,
            count,
            skip: self.skip.unwrap_or(0),
        })
    }
}

/// Query string of a "fetch all" request: endpoint filters first, then the page.
#[derive(Serialize, Debug)]
pub(crate) struct ListQuery<'a, F> {
    #[serde(flatten)]
    filters: &'a F,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<i64>,
    count: u32,
    skip: u32,
}

/// Body of the requests toggling an entity on or off.
#[derive(Serialize, Debug)]
pub(crate) struct SetActive {
    pub(crate) active: bool,
}

/// Filters of endpoints that only support pagination.
#[derive(Serialize, Debug)]
pub(crate) struct NoFilters {}

/// Fails with [`Error::Configuration`] if a required path argument is empty.
///
/// `.` and `..` are rejected too, since URL resolution treats them as dot segments.
pub(crate) fn require(name: &str, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::Configuration(format!("`{}` is missing", name)));
    }
    if value == "." || value == ".." {
        return Err(Error::Configuration(format!("`{}` is invalid", name)));
    }

    Ok(())
}

/// RazorpayX encodes empty notes as `[]` instead of `{}`.
///
/// Anything that is not a map of strings is read as empty notes.
pub(crate) fn deserialize_notes<'de, D>(deserializer: D) -> Result<Notes, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawNotes {
        Map(Notes),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<RawNotes>::deserialize(deserializer)? {
        Some(RawNotes::Map(notes)) => notes,
        Some(RawNotes::Other(_)) | None => Notes::new(),
    })
}

/// HTTP client pointed at a fresh mock server, for the API clients' unit tests.
#[cfg(test)]
pub(crate) async fn mock_client_and_server(
) -> (std::sync::Arc<crate::http::HttpClient>, wiremock::MockServer) {
    use crate::{
        config::{ClientConfig, Credentials},
        http::HttpClient,
    };

    let mock_server = wiremock::MockServer::start().await;

    let mut config = ClientConfig::new(Credentials::new("key-id", "key-secret"));
    config.base_url = reqwest::Url::parse(&format!("{}/v1", mock_server.uri())).unwrap();
    let client = HttpClient::new(&config, None).unwrap();

    (std::sync::Arc::new(client), mock_server)
}
