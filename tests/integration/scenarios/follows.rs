use crate::helpers::client::TestClient;
use crate::helpers::mock_server::MockServer;
use axum::http::StatusCode;
use serde_json::json;

/// 観点: フォロー一覧の名前を大文字小文字無視で照合するか
#[tokio::test]
async fn test_follow_state_case_insensitive() {
    let server = MockServer::start().await;
    let client = TestClient::new_with_api_url(Some(server.base_url())).await;
    client.login().await;

    let (status, body) = client.get("/profiles/bob/follow").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["following"], true);
    assert_eq!(body["data"]["label"], "Following");

    let (_, body) = client.get("/profiles/carol/follow").await;
    assert_eq!(body["data"]["following"], false);
    assert_eq!(body["data"]["label"], "Follow");
}

/// 観点: 未ログインでのフォロー操作はリクエストせずに拒否されるか
#[tokio::test]
async fn test_follow_requires_login() {
    let server = MockServer::start().await;
    let client = TestClient::new_with_api_url(Some(server.base_url())).await;

    let (status, body) = client
        .put("/profiles/carol/follow", json!({ "following": false }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "You must be logged in to follow!");
    assert_eq!(server.hits(), 0);
}

/// 観点: フォロー → アンフォローの往復でリモートの状態とラベルが追従するか
#[tokio::test]
async fn test_follow_then_unfollow() {
    let server = MockServer::start().await;
    let client = TestClient::new_with_api_url(Some(server.base_url())).await;
    client.login().await;

    let (status, body) = client
        .put("/profiles/carol/follow", json!({ "following": false }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["following"], true);
    assert_eq!(body["data"]["label"], "Following");
    assert!(server
        .data
        .following
        .lock()
        .unwrap()
        .contains(&"carol".to_string()));

    let (status, body) = client
        .put("/profiles/carol/follow", json!({ "following": true }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["following"], false);
    assert_eq!(body["data"]["label"], "Follow");
    assert!(!server
        .data
        .following
        .lock()
        .unwrap()
        .contains(&"carol".to_string()));
}

/// 観点: リモートが失敗した場合にリモートのメッセージが返るか
#[tokio::test]
async fn test_follow_remote_failure() {
    let server = MockServer::start().await;
    let client = TestClient::new_with_api_url(Some(server.base_url())).await;
    client.login().await;
    *server.data.fail_follow.lock().unwrap() = true;

    let (status, body) = client
        .put("/profiles/bob/follow", json!({ "following": false }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "You are already following this profile");
}
