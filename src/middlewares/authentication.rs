use crate::{config::Credentials, Error};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::{
    header::{HeaderValue, AUTHORIZATION},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use secrecy::ExposeSecret;
use task_local_extensions::Extensions;

/// Reqwest middleware to authenticate outgoing HTTP requests with HTTP Basic auth.
///
/// Any `Authorization` header already present on the request is replaced.
pub struct BasicAuthMiddleware {
    authorization: HeaderValue,
}

impl BasicAuthMiddleware {
    pub fn new(credentials: &Credentials) -> Result<Self, Error> {
        let encoded = general_purpose::STANDARD.encode(format!(
            "{}:{}",
            credentials.key_id,
            credentials.key_secret.expose_secret()
        ));

        let mut authorization = HeaderValue::from_str(&format!("Basic {}", encoded))
            .map_err(|e| Error::Other(e.into()))?;
        authorization.set_sensitive(true);

        Ok(Self { authorization })
    }
}

#[async_trait]
impl Middleware for BasicAuthMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        req.headers_mut()
            .insert(AUTHORIZATION, self.authorization.clone());

        next.run(req, extensions).await
    }
}
