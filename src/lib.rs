//! Unofficial Rust client for the [RazorpayX](https://razorpay.com/x/) payouts APIs.
//!
//! Check out also the official RazorpayX [API documentation](https://razorpay.com/docs/api/x/).
//!
//! # Usage
//!
//! ## Prerequisites
//!
//! Generate an API key pair from the RazorpayX dashboard and note down the account number of
//! the business account payouts are debited from.
//!
//! ## Initialize a new `RazorpayXClient`
//!
//! Create a new [`RazorpayXClient`](crate::client::RazorpayXClient) with your key id and key secret.
//!
//! ```rust,no_run
//! # use razorpayx::{Credentials, Error, RazorpayXClient};
//! # fn main() -> Result<(), Error> {
//! let client = RazorpayXClient::builder(Credentials::new("rzp_test_key_id", "key_secret"))
//!     .with_header("X-Razorpay-Account", "acc_00000000000001")
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! Every operation resolves to an [`ApiResponse`](crate::http::ApiResponse) carrying the HTTP
//! status, the response headers and the parsed body.
//!
//! ## Pay a contact
//!
//! ```rust,no_run
//! # use razorpayx::{RazorpayXClient, Error, apis::{Currency, contacts::*, fund_accounts::*, payouts::*}};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let client: RazorpayXClient = unreachable!();
//! #
//! let contact = client
//!     .contacts
//!     .create(
//!         &CreateContactRequestBuilder::default()
//!             .name("Gaurav Kumar")
//!             .email("gaurav.kumar@example.com")
//!             .r#type(ContactType::Vendor)
//!             .build()
//!             .unwrap(),
//!     )
//!     .await?
//!     .into_data();
//!
//! let fund_account = client
//!     .fund_accounts
//!     .create(
//!         &CreateFundAccountRequestBuilder::default()
//!             .contact_id(contact.id)
//!             .account_type(AccountType::BankAccount)
//!             .bank_account(
//!                 BankAccountBuilder::default()
//!                     .name("Gaurav Kumar")
//!                     .ifsc("HDFC0000053")
//!                     .account_number("765432123456789")
//!                     .build()
//!                     .unwrap(),
//!             )
//!             .build()
//!             .unwrap(),
//!     )
//!     .await?
//!     .into_data();
//!
//! let payout = client
//!     .payouts
//!     .create(
//!         &CreatePayoutRequestBuilder::default()
//!             .account_number("7878780080316316")
//!             .fund_account_id(fund_account.id)
//!             .amount(100_000u64)
//!             .currency(Currency::Inr)
//!             .mode(PayoutMode::Imps)
//!             .purpose(PayoutPurpose::Payout)
//!             .build()
//!             .unwrap(),
//!     )
//!     .await?;
//!
//! println!("Created payout {} ({:?})", payout.data.id, payout.data.status);
//! # Ok(())
//! # }
//! ```
//!
//! ## Listing payouts
//!
//! ```rust,no_run
//! # use razorpayx::{RazorpayXClient, Error, apis::{PaginationBuilder, payouts::*}};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let client: RazorpayXClient = unreachable!();
//! #
//! let request = FetchAllPayoutsRequestBuilder::default()
//!     .status(PayoutStatus::Processed)
//!     .pagination(
//!         PaginationBuilder::default()
//!             .from("2021-10-01")
//!             .count(50u32)
//!             .build()
//!             .unwrap(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let payouts = client.payouts.fetch_all("7878780080316316", &request).await?;
//! for payout in &payouts.data.items {
//!     tracing::info!("Payout {}: {:.2} {}", payout.id, payout.amount as f32 / 100.0, payout.currency);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Verifying webhooks
//!
//! ```rust
//! # use razorpayx::validate_webhook_signature;
//! let body = r#"{"a":1,"b":2,"c":{"d":3}}"#;
//! let signature = "2fe04e22977002e6c7cb553adab8b460cb9e2a4970d5953cb27a8472752e3bbc";
//!
//! assert!(validate_webhook_signature(Some(body), Some(signature), Some("123456")).unwrap());
//! ```
//!
//! ## More examples
//!
//! Look into the [`demos`](../demos) for more example usages of this library.
//!
//! To run an example, use `cargo run` like this:
//!
//! ```shell
//! cargo run --example create_payout
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub mod client;
mod common;
pub mod config;
pub mod dates;
pub mod error;
pub mod http;
mod middlewares;
pub mod webhook;

pub use client::RazorpayXClient;
pub use config::Credentials;
pub use dates::{normalize_date, DateInput};
pub use error::Error;
pub use http::ApiResponse;
pub use webhook::validate_webhook_signature;
