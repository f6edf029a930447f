// Default URLs
pub static DEFAULT_BASE_URL: &str = "https://api.razorpay.com/v1/";

// Header names
pub const ACCOUNT_HEADER: &str = "X-Razorpay-Account";

/// Names of the extra headers callers are allowed to inject into outgoing requests.
pub const ALLOWED_HEADERS: &[&str] = &[ACCOUNT_HEADER];

/// `User-Agent` sent with every request.
pub static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "@", env!("CARGO_PKG_VERSION"));

// Pagination
pub const DEFAULT_COUNT: u32 = 10;
pub const MAX_COUNT: u32 = 100;
