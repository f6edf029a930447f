//! APIs and models related to payout links.

mod api;
mod model;

pub use api::PayoutLinksApi;
pub use model::*;
