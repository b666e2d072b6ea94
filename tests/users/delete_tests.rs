use super::test_utilities::{TestHarness, TestServer};
use restprobe::http::ErrorResponse;

#[tokio::test]
async fn test_delete_user_returns_no_content_with_empty_body() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let harness = TestHarness::new(&server);

    let created = harness.create_user("Alice", "alice@example.com").await;

    let response = harness.api.delete_user(created.id).await.unwrap();
    assert_eq!(response.status(), 204);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_deleted_user_is_gone() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let harness = TestHarness::new(&server);

    let created = harness.create_user("Alice", "alice@example.com").await;

    let response = harness.api.delete_user(created.id).await.unwrap();
    assert_eq!(response.status(), 204);

    let response = harness.api.fetch_user(created.id).await.unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_delete_missing_user_returns_not_found() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let harness = TestHarness::new(&server);

    let response = harness.api.delete_user(99999).await.unwrap();
    assert_eq!(response.status(), 404);

    let error: ErrorResponse = response.json_as().expect("Failed to parse error JSON");
    assert_eq!(error.error, "user_not_found");
    assert_eq!(error.details.unwrap()["id"], 99999);
}

#[tokio::test]
async fn test_repeated_delete_returns_not_found() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let harness = TestHarness::new(&server);

    let created = harness.create_user("Alice", "alice@example.com").await;

    let response = harness.api.delete_user(created.id).await.unwrap();
    assert_eq!(response.status(), 204);

    let response = harness.api.delete_user(created.id).await.unwrap();
    assert_eq!(response.status(), 404);
}
