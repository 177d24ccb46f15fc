use super::test_utilities::TestClient;
use adboard::fixtures::session_seller_id;
use adboard::{Advertisement, AdvertisementPayload, Statistics};
use serde_json::json;

#[tokio::test]
async fn test_create_valid() {
    // Setup
    let helper = TestClient::new();
    let seller_id = session_seller_id();
    let payload = AdvertisementPayload::new(
        seller_id,
        "Новый товар",
        5000,
        Statistics::new(15, 30, 10),
    );

    // Action
    let response = helper.api.create_item(&payload).await.unwrap();

    // Expectation
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(body["sellerId"], seller_id.value());
    assert_eq!(body["name"], "Новый товар");
    assert_eq!(body["price"], 5000);
    assert_eq!(
        body["statistics"],
        json!({ "likes": 15, "viewCount": 30, "contacts": 10 })
    );

    let advertisement: Advertisement = serde_json::from_value(body).unwrap();
    assert!(advertisement.echoes(&payload));
}

#[tokio::test]
async fn test_create_invalid() {
    let helper = TestClient::new();
    let cases = [
        (
            "missing sellerID",
            json!({ "name": "Товар без sellerID", "price": 100 }),
        ),
        ("missing name", json!({ "sellerID": 123456, "price": 100 })),
        (
            "missing price",
            json!({ "sellerID": 123456, "name": "Товар без цены" }),
        ),
        (
            "non-numeric sellerID",
            json!({ "sellerID": "не число", "name": "Товар", "price": 100 }),
        ),
        (
            "sellerID below range",
            json!({ "sellerID": 100000, "name": "Товар", "price": 100 }),
        ),
        (
            "sellerID above range",
            json!({ "sellerID": 1000000, "name": "Товар", "price": 100 }),
        ),
        (
            "negative price",
            json!({ "sellerID": 123456, "name": "Товар", "price": -100 }),
        ),
    ];

    for (description, payload) in cases {
        let response = helper.api.create_item(&payload).await.unwrap();
        assert_eq!(response.status(), 400, "{description}: {payload}");
    }
}
