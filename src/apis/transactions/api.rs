use crate::{
    apis::{require, transactions::Transaction, Collection, NoFilters, Pagination},
    http::{ApiResponse, HttpClient},
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// RazorpayX account statement APIs client.
#[derive(Clone, Debug)]
pub struct TransactionsApi {
    inner: Arc<HttpClient>,
}

impl TransactionsApi {
    pub(crate) fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Lists the transactions of the business account `account_number`.
    #[tracing::instrument(name = "Fetch All Transactions", skip(self, pagination))]
    pub async fn fetch_all(
        &self,
        account_number: &str,
        pagination: &Pagination,
    ) -> Result<ApiResponse<Collection<Transaction>>, Error> {
        require("account number", account_number)?;
        let query = pagination.query(&NoFilters {})?;

        self.inner
            .get(
                &format!("transactions?account_number={}", encode(account_number)),
                Some(&query),
            )
            .await
    }

    #[tracing::instrument(name = "Fetch Transaction by ID", skip(self))]
    pub async fn fetch(&self, id: &str) -> Result<ApiResponse<Transaction>, Error> {
        require("transaction id", id)?;

        self.inner
            .get::<_, ()>(&format!("transactions/{}", encode(id)), None)
            .await
    }
}
