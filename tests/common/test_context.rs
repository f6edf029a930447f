use base64::{engine::general_purpose::STANDARD, Engine};
use razorpayx::{client::RazorpayXClientBuilder, Credentials, RazorpayXClient};
use reqwest::Url;
use uuid::Uuid;
use wiremock::MockServer;

pub static ACCOUNT_NUMBER: &str = "7878780080316316";
pub static LINKED_ACCOUNT: &str = "acc_00000000000001";

pub struct TestContext {
    pub client: RazorpayXClient,
    pub key_id: String,
    pub key_secret: String,
    pub mock_server: MockServer,
}

impl TestContext {
    pub async fn start() -> Self {
        Self::start_with(|builder| builder).await
    }

    /// Starts a context whose client is further configured by `configure`.
    pub async fn start_with(
        configure: impl FnOnce(RazorpayXClientBuilder) -> RazorpayXClientBuilder,
    ) -> Self {
        // Generate a new set of random credentials for this specific test
        let key_id = format!("rzp_test_{}", Uuid::new_v4().simple());
        let key_secret = Uuid::new_v4().to_string();

        let mock_server = MockServer::start().await;

        // Configure a new RazorpayXClient to point to the mock server
        let builder = RazorpayXClient::builder(Credentials::new(&key_id, &key_secret))
            .with_base_url(Url::parse(&format!("{}/v1", mock_server.uri())).unwrap())
            .with_header("X-Razorpay-Account", LINKED_ACCOUNT)
            .with_header("X-Forwarded-For", "10.0.0.1");
        let client = configure(builder).build().unwrap();

        Self {
            client,
            key_id,
            key_secret,
            mock_server,
        }
    }

    /// Value of the `Authorization` header the client is expected to send.
    pub fn authorization(&self) -> String {
        format!(
            "Basic {}",
            STANDARD.encode(format!("{}:{}", self.key_id, self.key_secret))
        )
    }
}
