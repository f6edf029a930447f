//! Configuration of a [`RazorpayXClient`](crate::client::RazorpayXClient).

use crate::{
    common::{ALLOWED_HEADERS, DEFAULT_BASE_URL, USER_AGENT},
    Error,
};
use reqwest::Url;
use secrecy::{ExposeSecret, Secret};
use std::{collections::HashMap, time::Duration};

/// API key pair generated from the RazorpayX dashboard.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub key_id: String,
    pub key_secret: Secret<String>,
}

impl Credentials {
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: Secret::new(key_secret.into()),
        }
    }

    /// Fails with [`Error::Configuration`] if either half of the key pair is empty.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.key_id.is_empty() {
            return Err(Error::Configuration("`key_id` is mandatory".to_string()));
        }

        if self.key_secret.expose_secret().is_empty() {
            return Err(Error::Configuration("`key_secret` is mandatory".to_string()));
        }

        Ok(())
    }
}

/// Immutable transport configuration owned by one client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL every relative API path is resolved against.
    ///
    /// Defaults to: `https://api.razorpay.com/v1/`
    pub base_url: Url,
    pub credentials: Credentials,
    /// Defaults to: `razorpayx@<crate version>`
    pub user_agent: String,
    /// Extra headers requested by the caller. Only names in [`ALLOWED_HEADERS`] are sent.
    ///
    /// Defaults to no extra headers.
    pub extra_headers: HashMap<String, String>,
    /// Per-request timeout applied to the default HTTP client.
    ///
    /// Defaults to no timeout.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            // The default URL is a valid constant
            base_url: Url::parse(DEFAULT_BASE_URL).unwrap(),
            credentials,
            user_agent: USER_AGENT.to_string(),
            extra_headers: HashMap::new(),
            timeout: None,
        }
    }

    /// The extra headers that pass the allow-list. Everything else is dropped silently.
    pub fn permitted_headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.extra_headers
            .iter()
            .filter(|(name, _)| ALLOWED_HEADERS.contains(&name.as_str()))
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// Makes sure `url` ends with a slash so that relative paths are joined below it.
pub(crate) fn ensure_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
