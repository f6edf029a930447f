use crate::common::{
    fixtures,
    test_context::{TestContext, ACCOUNT_NUMBER},
};
use chrono::{TimeZone, Utc};
use razorpayx::apis::{
    contacts::ContactType,
    payout_links::{
        CreatePayoutLinkRequestBuilder, FetchAllPayoutLinksRequestBuilder,
        PayoutLinkContactBuilder, PayoutLinkStatus,
    },
    payouts::PayoutPurpose,
    Currency,
};
use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path, query_param},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn create_for_a_new_contact() {
    let ctx = TestContext::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payout-links"))
        .and(body_json(json!({
            "account_number": ACCOUNT_NUMBER,
            "contact": {
                "name": "Gaurav Kumar",
                "contact": "912313213210",
                "email": "gaurav.kumar@example.com",
                "type": "customer"
            },
            "amount": 1000,
            "currency": "INR",
            "purpose": "refund",
            "description": "Payout link for Gaurav Kumar",
            "receipt": "Receipt No. 1",
            "send_sms": true,
            "send_email": true,
            "expire_by": 1635379200
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(fixtures::payout_link("poutlk_00000000000001", "issued")),
        )
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let request = CreatePayoutLinkRequestBuilder::default()
        .account_number(ACCOUNT_NUMBER)
        .contact(
            PayoutLinkContactBuilder::default()
                .name("Gaurav Kumar")
                .contact("912313213210")
                .email("gaurav.kumar@example.com")
                .r#type(ContactType::Customer)
                .build()
                .unwrap(),
        )
        .amount(1000u64)
        .currency(Currency::Inr)
        .purpose(PayoutPurpose::Refund)
        .description("Payout link for Gaurav Kumar")
        .receipt("Receipt No. 1")
        .send_sms(true)
        .send_email(true)
        .expire_by(Utc.with_ymd_and_hms(2021, 10, 28, 0, 0, 0).unwrap())
        .build()
        .unwrap();

    let res = ctx.client.payout_links.create(&request).await.unwrap();

    assert_eq!(res.data.id, "poutlk_00000000000001");
    assert_eq!(res.data.status, PayoutLinkStatus::Issued);
}

#[tokio::test]
async fn fetch_all_by_contact_email() {
    let ctx = TestContext::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/payout-links"))
        .and(query_param("contact_email", "gaurav.kumar@example.com"))
        .and(query_param("purpose", "refund"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::collection(vec![
            fixtures::payout_link("poutlk_00000000000001", "processed"),
        ])))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let request = FetchAllPayoutLinksRequestBuilder::default()
        .contact_email("gaurav.kumar@example.com")
        .purpose(PayoutPurpose::Refund)
        .build()
        .unwrap();
    let res = ctx.client.payout_links.fetch_all(&request).await.unwrap();

    assert_eq!(res.data.items[0].status, PayoutLinkStatus::Processed);
}
