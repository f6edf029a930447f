use crate::{
    apis::{
        payout_links::{CreatePayoutLinkRequest, FetchAllPayoutLinksRequest, PayoutLink},
        require, Collection,
    },
    http::{ApiResponse, HttpClient},
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// RazorpayX payout links APIs client.
#[derive(Clone, Debug)]
pub struct PayoutLinksApi {
    inner: Arc<HttpClient>,
}

impl PayoutLinksApi {
    pub(crate) fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Creates a payout link, letting the recipient choose where to receive the funds.
    #[tracing::instrument(
        name = "Create Payout Link",
        skip(self, request),
        fields(
            amount = request.amount,
            currency = %request.currency,
            receipt = %request.receipt,
        )
    )]
    pub async fn create(
        &self,
        request: &CreatePayoutLinkRequest,
    ) -> Result<ApiResponse<PayoutLink>, Error> {
        let body = request.body()?;

        self.inner.post("payout-links", Some(&body)).await
    }

    /// Cancels a payout link that has not been claimed yet.
    #[tracing::instrument(name = "Cancel Payout Link", skip(self))]
    pub async fn cancel(&self, id: &str) -> Result<ApiResponse<PayoutLink>, Error> {
        require("payout link id", id)?;

        self.inner
            .post::<_, ()>(&format!("payout-links/{}/cancel", encode(id)), None)
            .await
    }

    #[tracing::instrument(name = "Fetch All Payout Links", skip(self, request))]
    pub async fn fetch_all(
        &self,
        request: &FetchAllPayoutLinksRequest,
    ) -> Result<ApiResponse<Collection<PayoutLink>>, Error> {
        let query = request.pagination.query(request)?;

        self.inner.get("payout-links", Some(&query)).await
    }

    #[tracing::instrument(name = "Fetch Payout Link by ID", skip(self))]
    pub async fn fetch(&self, id: &str) -> Result<ApiResponse<PayoutLink>, Error> {
        require("payout link id", id)?;

        self.inner
            .get::<_, ()>(&format!("payout-links/{}", encode(id)), None)
            .await
    }
}
