use crate::common::{
    fixtures,
    test_context::{TestContext, ACCOUNT_NUMBER},
};
use razorpayx::apis::{Pagination, PaginationBuilder};
use std::time::{Duration, SystemTime};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn fetch_all_within_a_time_window() {
    let ctx = TestContext::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/transactions"))
        .and(query_param("account_number", ACCOUNT_NUMBER))
        .and(query_param("from", "1635379200"))
        .and(query_param("to", "1635465600"))
        .and(query_param("count", "100"))
        .and(query_param("skip", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::collection(vec![
            fixtures::transaction("txn_00000000000001"),
        ])))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let pagination = PaginationBuilder::default()
        .from(SystemTime::UNIX_EPOCH + Duration::from_secs(1_635_379_200))
        .to(1_635_465_600i64)
        .count(100u32)
        .build()
        .unwrap();
    let res = ctx
        .client
        .transactions
        .fetch_all(ACCOUNT_NUMBER, &pagination)
        .await
        .unwrap();

    assert_eq!(res.data.items[0].balance, 4_000_000);
}

#[tokio::test]
async fn fetch() {
    let ctx = TestContext::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/transactions/txn_00000000000001"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(fixtures::transaction("txn_00000000000001")),
        )
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let res = ctx
        .client
        .transactions
        .fetch("txn_00000000000001")
        .await
        .unwrap();

    assert_eq!(res.data.debit, 1_000_000);
    assert!(matches!(
        ctx.client
            .transactions
            .fetch_all("", &Pagination::default())
            .await,
        Err(razorpayx::Error::Configuration(_))
    ));
}
