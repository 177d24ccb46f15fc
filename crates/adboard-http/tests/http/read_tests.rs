use super::test_utilities::TestClient;
use adboard::fixtures::{session_seller_id, unused_seller_id};
use adboard::{Advertisement, AdvertisementPayload, Statistics};
use std::collections::HashSet;

#[tokio::test]
async fn test_get_by_id() {
    let helper = TestClient::new();
    let created = helper.created_advertisement().await;

    let response = helper.api.get_item(&created.id).await.unwrap();

    assert_eq!(response.status(), 200);
    let advertisements: Vec<Advertisement> = response.json().await.unwrap();
    let first = advertisements
        .first()
        .expect("lookup by id should return a one-element list");
    assert_eq!(first.id, created.id);
    assert_eq!(first.name, created.name);
}

#[tokio::test]
async fn test_get_nonexistent() {
    let helper = TestClient::new();

    let response = helper.api.get_item("nonexistent_id").await.unwrap();

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_get_by_seller() {
    // Setup
    let helper = TestClient::new();
    let seller_id = session_seller_id();
    let first = helper.created_advertisement().await;
    let second = helper
        .create(&AdvertisementPayload::new(
            seller_id,
            "Второй товар",
            2000,
            Statistics::new(5, 10, 2),
        ))
        .await;

    // Action
    let response = helper.api.list_seller_items(seller_id).await.unwrap();

    // Expectation
    assert_eq!(response.status(), 200);
    let advertisements: Vec<Advertisement> = response.json().await.unwrap();
    assert!(advertisements.len() >= 2);
    let ids: HashSet<&str> = advertisements.iter().map(|ad| ad.id.as_str()).collect();
    assert!(ids.contains(first.id.as_str()));
    assert!(ids.contains(second.id.as_str()));
}

#[tokio::test]
async fn test_get_empty_seller() {
    let helper = TestClient::new();

    let response = helper
        .api
        .list_seller_items(unused_seller_id())
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let advertisements: Vec<serde_json::Value> = response.json().await.unwrap();
    assert!(advertisements.is_empty());
}
