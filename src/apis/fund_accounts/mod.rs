//! APIs and models related to fund accounts.

mod api;
mod model;

pub use api::FundAccountsApi;
pub use model::*;
