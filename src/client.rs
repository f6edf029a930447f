//! Module containing the main RazorpayX API client.

use crate::{
    apis::{
        contacts::ContactsApi, fund_accounts::FundAccountsApi, payout_links::PayoutLinksApi,
        payouts::PayoutsApi, transactions::TransactionsApi,
    },
    config::{ClientConfig, Credentials},
    http::HttpClient,
    Error,
};
use reqwest::Url;
use std::{sync::Arc, time::Duration};

/// Client for RazorpayX public APIs.
///
/// Cloning is cheap: all the clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct RazorpayXClient {
    /// Contacts APIs client.
    pub contacts: ContactsApi,
    /// Fund accounts APIs client.
    pub fund_accounts: FundAccountsApi,
    /// Payouts APIs client.
    pub payouts: PayoutsApi,
    /// Payout links APIs client.
    pub payout_links: PayoutLinksApi,
    /// Account statement APIs client.
    pub transactions: TransactionsApi,
}

impl RazorpayXClient {
    /// Builds a new [`RazorpayXClient`](crate::client::RazorpayXClient) with the default configuration.
    pub fn new(credentials: Credentials) -> Result<RazorpayXClient, Error> {
        RazorpayXClientBuilder::new(credentials).build()
    }

    /// Returns a new builder to configure a new [`RazorpayXClient`](crate::client::RazorpayXClient).
    pub fn builder(credentials: Credentials) -> RazorpayXClientBuilder {
        RazorpayXClientBuilder::new(credentials)
    }
}

/// Builder for a [`RazorpayXClient`](crate::client::RazorpayXClient).
#[derive(Debug)]
pub struct RazorpayXClientBuilder {
    config: ClientConfig,
    client: Option<reqwest::Client>,
}

impl RazorpayXClientBuilder {
    /// Creates a new builder to configure a [`RazorpayXClient`](crate::client::RazorpayXClient).
    pub fn new(credentials: Credentials) -> Self {
        Self {
            config: ClientConfig::new(credentials),
            client: None,
        }
    }

    /// Consumes the builder and builds a new [`RazorpayXClient`](crate::client::RazorpayXClient).
    ///
    /// Fails with [`Error::Configuration`] if the key id or the key secret are empty.
    pub fn build(self) -> Result<RazorpayXClient, Error> {
        self.config.credentials.validate()?;

        let inner = Arc::new(HttpClient::new(&self.config, self.client)?);

        Ok(RazorpayXClient {
            contacts: ContactsApi::new(inner.clone()),
            fund_accounts: FundAccountsApi::new(inner.clone()),
            payouts: PayoutsApi::new(inner.clone()),
            payout_links: PayoutLinksApi::new(inner.clone()),
            transactions: TransactionsApi::new(inner),
        })
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    ///
    /// The client is used as is: [`with_timeout`](Self::with_timeout) has no effect on it.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Sets the base URL all API paths are resolved against.
    ///
    /// Defaults to: `https://api.razorpay.com/v1/`
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.config.base_url = base_url;
        self
    }

    /// Adds extra headers to every request.
    ///
    /// Only allow-listed names, currently `X-Razorpay-Account`, are sent. Any other header is
    /// silently dropped.
    pub fn with_headers<K, V>(mut self, headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.config.extra_headers.extend(
            headers
                .into_iter()
                .map(|(name, value)| (name.into(), value.into())),
        );
        self
    }

    /// Adds a single extra header. See [`with_headers`](Self::with_headers).
    pub fn with_header(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_headers([(name, value)])
    }

    /// Sets a timeout for each request.
    ///
    /// Requests that time out fail with an [`ApiError`](crate::error::ApiError) without status.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }
}
