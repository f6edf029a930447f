//! APIs and models related to contacts.

mod api;
mod model;

pub use api::ContactsApi;
pub use model::*;
