use crate::error::{ApiError, ApiErrorDetail, Error};
use async_trait::async_trait;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware which translates non-2xx responses returned from RazorpayX APIs
/// into [`Error::ApiError`](crate::error::Error)s.
pub struct ErrorHandlingMiddleware;

#[async_trait]
impl Middleware for ErrorHandlingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        // Capture the response
        let response = next.run(req, extensions).await?;

        // Build an ApiError if the response is not a success
        if !response.status().is_success() {
            tracing::debug!("Failed HTTP request. Status code: {}", response.status());

            let api_error = api_error_from_response(response).await;
            return Err(Error::ApiError(api_error).into());
        }

        Ok(response)
    }
}

/// Body of an error response from RazorpayX APIs.
#[derive(serde::Deserialize, Debug)]
struct ErrorResponseBody {
    error: ApiErrorDetail,
}

async fn api_error_from_response(response: Response) -> ApiError {
    let status = i32::from(response.status().as_u16());

    // The status is known at this point: a body that cannot be read or is not a
    // well-formed error envelope still yields an ApiError, without detail
    let bytes = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!("Failed to read the error response body: {}", e);
            return ApiError::new(status, None);
        }
    };
    let detail = serde_json::from_slice::<ErrorResponseBody>(&bytes)
        .ok()
        .map(|body| body.error);

    ApiError::new(status, detail)
}
