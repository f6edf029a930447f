pub mod authentication;
pub mod default_headers;
pub mod error_handling;
