use anyhow::Context;
use razorpayx::{
    apis::{
        contacts::{ContactType, CreateContactRequestBuilder},
        fund_accounts::{AccountType, CreateFundAccountRequestBuilder, Vpa},
        payouts::{
            CreatePayoutRequestBuilder, FetchAllPayoutsRequestBuilder, PayoutMode, PayoutPurpose,
        },
        Currency, PaginationBuilder,
    },
    Credentials, RazorpayXClient,
};

#[derive(serde::Deserialize, Debug)]
struct Config {
    key_id: String,
    key_secret: String,
    account_number: String,
    vpa: String,
}

impl Config {
    /// Reads `config.toml`, overridable with `RAZORPAYX_*` environment variables.
    fn read() -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("RAZORPAYX"))
            .build()?
            .try_deserialize()
            .context("Failed to assemble the required configuration")
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::read()?;

    // Setup RazorpayX client
    let client = RazorpayXClient::new(Credentials::new(config.key_id, config.key_secret))?;

    // Create the beneficiary
    let contact = client
        .contacts
        .create(
            &CreateContactRequestBuilder::default()
                .name("Gaurav Kumar")
                .email("gaurav.kumar@example.com")
                .r#type(ContactType::Vendor)
                .build()?,
        )
        .await?
        .into_data();
    tracing::info!("Contact: {}", contact.id);

    // Link a UPI address to it
    let fund_account = client
        .fund_accounts
        .create(
            &CreateFundAccountRequestBuilder::default()
                .contact_id(contact.id)
                .account_type(AccountType::Vpa)
                .vpa(Vpa {
                    address: config.vpa,
                })
                .build()?,
        )
        .await?
        .into_data();
    tracing::info!("Fund account: {}", fund_account.id);

    // Pay out 1 INR
    let payout = client
        .payouts
        .create(
            &CreatePayoutRequestBuilder::default()
                .account_number(&config.account_number)
                .fund_account_id(&fund_account.id)
                .amount(100u64)
                .currency(Currency::Inr)
                .mode(PayoutMode::Upi)
                .purpose(PayoutPurpose::Payout)
                .queue_if_low_balance(true)
                .build()?,
        )
        .await?;
    tracing::info!(
        "Created payout {} (HTTP {}): {:?}",
        payout.data.id,
        payout.status,
        payout.data.status
    );

    // List the latest payouts to the same fund account
    let payouts = client
        .payouts
        .fetch_all(
            &config.account_number,
            &FetchAllPayoutsRequestBuilder::default()
                .fund_account_id(fund_account.id)
                .pagination(PaginationBuilder::default().count(5u32).build()?)
                .build()?,
        )
        .await?;
    for payout in &payouts.data.items {
        tracing::info!(
            "Payout {}: {:.2} {} {:?}",
            payout.id,
            payout.amount as f32 / 100.0,
            payout.currency,
            payout.status
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Setting default subscriber failed");

    if let Err(e) = run().await {
        tracing::error!("Fatal error: {:?}", e);
        std::process::exit(1);
    }
}
