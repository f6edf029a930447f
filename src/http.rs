//! Single point of outbound HTTP execution shared by every API client.

use crate::{
    config::{ensure_trailing_slash, ClientConfig},
    middlewares::{
        authentication::BasicAuthMiddleware, default_headers::DefaultHeadersMiddleware,
        error_handling::ErrorHandlingMiddleware,
    },
    Error,
};
use reqwest::{header::HeaderMap, StatusCode, Url};
use reqwest_middleware::{ClientWithMiddleware, RequestBuilder};
use reqwest_tracing::TracingMiddleware;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::{Debug, Formatter};

/// A successful response, passed through untouched apart from parsing the body.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Discards status and headers, keeping the parsed body.
    pub fn into_data(self) -> T {
        self.data
    }
}

pub(crate) struct HttpClient {
    client: ClientWithMiddleware,
    base_url: Url,
}

impl HttpClient {
    /// Builds the middleware stack for `config`.
    ///
    /// `config.credentials` must already be validated: the key id and secret are
    /// assumed non-empty here.
    pub(crate) fn new(
        config: &ClientConfig,
        http_client: Option<reqwest::Client>,
    ) -> Result<Self, Error> {
        let http_client = match http_client {
            Some(http_client) => http_client,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = config.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        let client = reqwest_middleware::ClientBuilder::new(http_client)
            .with(TracingMiddleware::default())
            .with(ErrorHandlingMiddleware)
            .with(DefaultHeadersMiddleware::new(
                &config.user_agent,
                config.permitted_headers(),
            )?)
            .with(BasicAuthMiddleware::new(&config.credentials)?)
            .build();

        Ok(Self {
            client,
            base_url: ensure_trailing_slash(config.base_url.clone()),
        })
    }

    pub(crate) async fn get<T, Q>(
        &self,
        url: &str,
        query: Option<&Q>,
    ) -> Result<ApiResponse<T>, Error>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let mut request = self.client.get(self.resolve(url)?);
        if let Some(query) = query {
            request = request.query(query);
        }

        send(request).await
    }

    pub(crate) async fn post<T, B>(
        &self,
        url: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self.client.post(self.resolve(url)?);
        if let Some(body) = body {
            request = request.json(body);
        }

        send(request).await
    }

    pub(crate) async fn patch<T, B>(&self, url: &str, body: &B) -> Result<ApiResponse<T>, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        send(self.client.patch(self.resolve(url)?).json(body)).await
    }

    /// Resolves a path relative to the base URL. A leading slash does not escape the base path.
    fn resolve(&self, url: &str) -> Result<Url, Error> {
        self.base_url
            .join(url.trim_start_matches('/'))
            .map_err(|e| Error::Other(e.into()))
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<ApiResponse<T>, Error> {
    let response = request.send().await?;

    let status = response.status();
    let headers = response.headers().clone();
    let data = response.json().await?;

    Ok(ApiResponse {
        status,
        headers,
        data,
    })
}

impl Debug for HttpClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
