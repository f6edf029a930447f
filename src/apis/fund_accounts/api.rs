use crate::{
    apis::{
        fund_accounts::{CreateFundAccountRequest, FetchAllFundAccountsRequest, FundAccount},
        require, Collection, SetActive,
    },
    http::{ApiResponse, HttpClient},
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// RazorpayX fund accounts APIs client.
#[derive(Clone, Debug)]
pub struct FundAccountsApi {
    inner: Arc<HttpClient>,
}

impl FundAccountsApi {
    pub(crate) fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Links a bank account, VPA, card or wallet to a contact.
    #[tracing::instrument(
        name = "Create Fund Account",
        skip(self, request),
        fields(
            contact_id = %request.contact_id,
            account_type = ?request.account_type,
        )
    )]
    pub async fn create(
        &self,
        request: &CreateFundAccountRequest,
    ) -> Result<ApiResponse<FundAccount>, Error> {
        request.validate()?;

        self.inner.post("fund_accounts", Some(request)).await
    }

    /// Activates or deactivates a fund account.
    #[tracing::instrument(name = "Set Fund Account Active", skip(self))]
    pub async fn set_active(
        &self,
        id: &str,
        active: bool,
    ) -> Result<ApiResponse<FundAccount>, Error> {
        require("fund account id", id)?;

        self.inner
            .patch(&format!("fund_accounts/{}", encode(id)), &SetActive { active })
            .await
    }

    #[tracing::instrument(name = "Fetch All Fund Accounts", skip(self, request))]
    pub async fn fetch_all(
        &self,
        request: &FetchAllFundAccountsRequest,
    ) -> Result<ApiResponse<Collection<FundAccount>>, Error> {
        let query = request.pagination.query(request)?;

        self.inner.get("fund_accounts", Some(&query)).await
    }

    #[tracing::instrument(name = "Fetch Fund Account by ID", skip(self))]
    pub async fn fetch(&self, id: &str) -> Result<ApiResponse<FundAccount>, Error> {
        require("fund account id", id)?;

        self.inner
            .get::<_, ()>(&format!("fund_accounts/{}", encode(id)), None)
            .await
    }
}
