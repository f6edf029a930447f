use crate::common::{
    fixtures,
    test_context::{TestContext, ACCOUNT_NUMBER},
};
use razorpayx::{
    apis::{
        contacts::{FetchAllContactsRequest, UpdateContactRequest},
        fund_accounts::FetchAllFundAccountsRequest,
        payout_links::FetchAllPayoutLinksRequest,
        payouts::{CreatePayoutRequestBuilder, FetchAllPayoutsRequest, PayoutMode, PayoutPurpose},
        Currency, Pagination, PaginationBuilder,
    },
    error::ErrorSource,
    Credentials, Error, RazorpayXClient,
};
use reqwest::{StatusCode, Url};
use serde_json::json;
use wiremock::{matchers::method, Mock, ResponseTemplate};

#[tokio::test]
async fn bad_requests_carry_the_api_error_detail() {
    let ctx = TestContext::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": "BAD_REQUEST_ERROR",
                "description": "The fund account id provided does not exist",
                "source": "business",
                "step": "payout_initiation",
                "reason": "input_validation_failed",
                "metadata": {},
                "field": "fund_account_id"
            }
        })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let request = CreatePayoutRequestBuilder::default()
        .account_number(ACCOUNT_NUMBER)
        .fund_account_id("fa_00000000000000")
        .amount(100u64)
        .currency(Currency::Inr)
        .mode(PayoutMode::Upi)
        .purpose(PayoutPurpose::Cashback)
        .build()
        .unwrap();

    match ctx.client.payouts.create(&request).await {
        Err(Error::ApiError(api_error)) => {
            assert_eq!(api_error.status_code, 400);
            assert_eq!(api_error.status(), Some(StatusCode::BAD_REQUEST));
            assert_eq!(api_error.message, "RazorpayX API Error");

            let detail = api_error.detail.unwrap();
            assert_eq!(detail.code, "BAD_REQUEST_ERROR");
            assert_eq!(detail.source, Some(ErrorSource::Business));
            assert_eq!(detail.reasons.as_deref(), Some("input_validation_failed"));
            assert_eq!(detail.field.as_deref(), Some("fund_account_id"));
        }
        r => panic!("Unexpected result: {:?}", r),
    }
}

#[tokio::test]
async fn server_errors_without_a_json_body_have_no_detail() {
    let ctx = TestContext::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    match ctx.client.payout_links.fetch("poutlk_00000000000001").await {
        Err(Error::ApiError(api_error)) => {
            assert_eq!(api_error.status_code, 502);
            assert_eq!(api_error.detail, None);
        }
        r => panic!("Unexpected result: {:?}", r),
    }
}

fn oversized_page() -> Pagination {
    PaginationBuilder::default().count(101u32).build().unwrap()
}

fn assert_oversized_page_error<T: std::fmt::Debug>(result: Result<T, Error>) {
    match result {
        Err(Error::Validation(m)) => assert_eq!(m, "`count` can be maximum of 100"),
        r => panic!("Unexpected result: {:?}", r),
    }
}

#[tokio::test]
async fn oversized_pages_never_reach_the_server() {
    let ctx = TestContext::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::collection(vec![])))
        .expect(0)
        .mount(&ctx.mock_server)
        .await;

    assert_oversized_page_error(
        ctx.client
            .contacts
            .fetch_all(&FetchAllContactsRequest {
                pagination: oversized_page(),
                ..Default::default()
            })
            .await,
    );
    assert_oversized_page_error(
        ctx.client
            .fund_accounts
            .fetch_all(&FetchAllFundAccountsRequest {
                pagination: oversized_page(),
                ..Default::default()
            })
            .await,
    );
    assert_oversized_page_error(
        ctx.client
            .payouts
            .fetch_all(
                ACCOUNT_NUMBER,
                &FetchAllPayoutsRequest {
                    pagination: oversized_page(),
                    ..Default::default()
                },
            )
            .await,
    );
    assert_oversized_page_error(
        ctx.client
            .payout_links
            .fetch_all(&FetchAllPayoutLinksRequest {
                pagination: oversized_page(),
                ..Default::default()
            })
            .await,
    );
    assert_oversized_page_error(
        ctx.client
            .transactions
            .fetch_all(ACCOUNT_NUMBER, &oversized_page())
            .await,
    );
}

#[tokio::test]
async fn dot_segment_ids_never_reach_the_server() {
    let ctx = TestContext::start().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&ctx.mock_server)
        .await;

    for id in [".", ".."] {
        let results = vec![
            ctx.client.contacts.fetch(id).await.map(|_| ()),
            ctx.client
                .contacts
                .update(id, &UpdateContactRequest::default())
                .await
                .map(|_| ()),
            ctx.client.contacts.set_active(id, false).await.map(|_| ()),
            ctx.client.fund_accounts.fetch(id).await.map(|_| ()),
            ctx.client
                .fund_accounts
                .set_active(id, false)
                .await
                .map(|_| ()),
            ctx.client.payouts.fetch(id).await.map(|_| ()),
            ctx.client.payouts.cancel(id).await.map(|_| ()),
            ctx.client.payout_links.fetch(id).await.map(|_| ()),
            ctx.client.payout_links.cancel(id).await.map(|_| ()),
            ctx.client.transactions.fetch(id).await.map(|_| ()),
        ];

        for result in results {
            assert!(
                matches!(&result, Err(Error::Configuration(m)) if m.ends_with("is invalid")),
                "Unexpected result for {:?}: {:?}",
                id,
                result
            );
        }
    }
}

#[tokio::test]
async fn unreachable_servers_surface_as_api_errors_without_status() {
    // Bind and immediately release a port so that nothing is listening on it
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let client = RazorpayXClient::builder(Credentials::new("rzp_test_key", "secret"))
        .with_base_url(Url::parse(&format!("http://127.0.0.1:{}/v1", port)).unwrap())
        .build()
        .unwrap();

    match client.contacts.fetch("cont_00000000000001").await {
        Err(Error::ApiError(api_error)) => {
            assert_eq!(api_error.status_code, -1);
            assert_eq!(api_error.status(), None);
            assert_eq!(api_error.detail, None);
        }
        r => panic!("Unexpected result: {:?}", r),
    }
}
