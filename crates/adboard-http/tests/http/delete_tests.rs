use super::test_utilities::TestClient;
use adboard::fixtures::{advertisement_data, session_seller_id};
use adboard::{AdvertisementPayload, Statistics};

#[tokio::test]
async fn test_delete_and_verify() {
    // Setup
    let helper = TestClient::new();
    let advertisement = helper
        .create(&advertisement_data(session_seller_id()))
        .await;

    // Action
    let delete_response = helper.api.delete_item(&advertisement.id).await.unwrap();

    // Expectation
    assert_eq!(delete_response.status(), 200);
    let get_response = helper.api.get_item(&advertisement.id).await.unwrap();
    assert_eq!(get_response.status(), 404);
}

#[tokio::test]
async fn test_double_delete() {
    let helper = TestClient::new();
    let created = helper.created_advertisement().await;

    let first_delete = helper.api.delete_item(&created.id).await.unwrap();
    assert_eq!(first_delete.status(), 200);

    let second_delete = helper.api.delete_item(&created.id).await.unwrap();
    assert_eq!(second_delete.status(), 404);
}

#[tokio::test]
async fn test_delete_nonexistent() {
    let helper = TestClient::new();

    let response = helper.api.delete_item("nonexistent_id").await.unwrap();

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_full_lifecycle() {
    let helper = TestClient::new();
    // Never the seller the empty-listing test reads.
    let payload = AdvertisementPayload::new(
        session_seller_id(),
        "Товар",
        1000,
        Statistics::new(10, 20, 5),
    );

    let created = helper.api.create_advertisement(&payload).await.unwrap();
    assert!(created.echoes(&payload));

    let fetched = helper.api.fetch_advertisement(&created.id).await.unwrap();
    assert_eq!(fetched[0].name, "Товар");

    helper.api.remove_advertisement(&created.id).await.unwrap();

    let error = helper
        .api
        .fetch_advertisement(&created.id)
        .await
        .unwrap_err();
    assert!(error.is_not_found(), "{error}");

    let error = helper
        .api
        .remove_advertisement(&created.id)
        .await
        .unwrap_err();
    assert!(error.is_not_found(), "{error}");
}
