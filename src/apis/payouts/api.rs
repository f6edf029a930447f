use crate::{
    apis::{
        payouts::{CreatePayoutRequest, FetchAllPayoutsRequest, Payout},
        require, Collection,
    },
    http::{ApiResponse, HttpClient},
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// RazorpayX payouts APIs client.
#[derive(Clone, Debug)]
pub struct PayoutsApi {
    inner: Arc<HttpClient>,
}

impl PayoutsApi {
    pub(crate) fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Pays out from a business account to one of your fund accounts.
    #[tracing::instrument(
        name = "Create Payout",
        skip(self, request),
        fields(
            amount = request.amount,
            currency = %request.currency,
            fund_account_id = %request.fund_account_id,
        )
    )]
    pub async fn create(
        &self,
        request: &CreatePayoutRequest,
    ) -> Result<ApiResponse<Payout>, Error> {
        self.inner.post("payouts", Some(request)).await
    }

    /// Cancels a payout that is still queued.
    #[tracing::instrument(name = "Cancel Payout", skip(self))]
    pub async fn cancel(&self, id: &str) -> Result<ApiResponse<Payout>, Error> {
        require("payout id", id)?;

        self.inner
            .post::<_, ()>(&format!("payouts/{}/cancel", encode(id)), None)
            .await
    }

    /// Lists the payouts made from the business account `account_number`.
    #[tracing::instrument(name = "Fetch All Payouts", skip(self, request))]
    pub async fn fetch_all(
        &self,
        account_number: &str,
        request: &FetchAllPayoutsRequest,
    ) -> Result<ApiResponse<Collection<Payout>>, Error> {
        require("account number", account_number)?;
        let query = request.pagination.query(request)?;

        self.inner
            .get(
                &format!("payouts?account_number={}", encode(account_number)),
                Some(&query),
            )
            .await
    }

    #[tracing::instrument(name = "Fetch Payout by ID", skip(self))]
    pub async fn fetch(&self, id: &str) -> Result<ApiResponse<Payout>, Error> {
        require("payout id", id)?;

        self.inner
            .get::<_, ()>(&format!("payouts/{}", encode(id)), None)
            .await
    }
}
