use crate::Error;
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Middleware to inject the `User-Agent` header and the permitted extra headers
/// into all outgoing requests.
///
/// The header set is computed once on construction and reused for every request.
pub struct DefaultHeadersMiddleware {
    headers: HeaderMap,
}

impl DefaultHeadersMiddleware {
    pub fn new<'a>(
        user_agent: &str,
        extra_headers: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value(user_agent)?);

        for (name, value) in extra_headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                Error::Configuration(format!("`{}` is not a valid header name", name))
            })?;
            headers.insert(name, header_value(value)?);
        }

        Ok(Self { headers })
    }
}

fn header_value(value: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(value)
        .map_err(|_| Error::Configuration(format!("`{}` is not a valid header value", value)))
}

#[async_trait]
impl Middleware for DefaultHeadersMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        for (name, value) in &self.headers {
            req.headers_mut().insert(name.clone(), value.clone());
        }

        next.run(req, extensions).await
    }
}
