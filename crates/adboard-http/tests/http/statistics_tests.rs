use super::test_utilities::TestClient;
use adboard_http::ApiVersion;

#[tokio::test]
async fn test_get_statistics() {
    let helper = TestClient::new();
    let created = helper.created_advertisement().await;

    for version in ApiVersion::ALL {
        let response = helper
            .api
            .get_statistics(version, &created.id)
            .await
            .unwrap();
        assert_eq!(response.status(), 200, "statistics {version}");

        let statistics: serde_json::Value = response.json().await.unwrap();
        let entries = statistics
            .as_array()
            .unwrap_or_else(|| panic!("statistics {version} should be a list"));
        assert!(!entries.is_empty(), "statistics {version} is empty");
        assert_eq!(entries[0]["likes"], 10, "statistics {version}");
        assert_eq!(entries[0]["viewCount"], 20, "statistics {version}");
    }
}

#[tokio::test]
async fn test_nonexistent_statistics() {
    let helper = TestClient::new();

    for version in ApiVersion::ALL {
        let response = helper
            .api
            .get_statistics(version, "nonexistent_id")
            .await
            .unwrap();
        assert_eq!(response.status(), 404, "statistics {version}");
    }
}

#[tokio::test]
async fn test_typed_statistics_match_creation() {
    let helper = TestClient::new();
    let created = helper.created_advertisement().await;

    let statistics = helper
        .api
        .fetch_statistics(ApiVersion::V2, &created.id)
        .await
        .unwrap();

    assert_eq!(statistics.first(), Some(&created.statistics));
}
