use crate::helpers::client::TestClient;
use crate::helpers::mock_server::MockServer;
use axum::http::StatusCode;
use serde_json::json;

/// 観点: 未ログインではリクエストせずに拒否されるか
#[tokio::test]
async fn test_react_requires_login() {
    let server = MockServer::start().await;
    let client = TestClient::new_with_api_url(Some(server.base_url())).await;

    let (status, body) = client
        .put("/posts/1/react", json!({ "active": false, "count": 3 }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "You must be logged in to react.");
    assert_eq!(server.hits(), 0);
}

/// 観点: ボディなしのリアクション要求は {success:false} の 400 になるか
#[tokio::test]
async fn test_react_without_body() {
    let server = MockServer::start().await;
    let client = TestClient::new_with_api_url(Some(server.base_url())).await;
    client.login().await;
    let hits_after_login = server.hits();

    let (status, body) = client
        .send(axum::http::Method::PUT, "/posts/1/react", None)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
    assert_eq!(server.hits(), hits_after_login);
}

/// 観点: トグルで件数がサーバーの合計になり、ローカルの like 記録が詳細表示に反映されるか
#[tokio::test]
async fn test_react_toggles_and_remembers() {
    let server = MockServer::start().await;
    let client = TestClient::new_with_api_url(Some(server.base_url())).await;
    client.login().await;

    let (status, body) = client
        .put("/posts/1/react", json!({ "active": false, "count": 3 }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["active"], true);
    assert_eq!(body["data"]["count"], 4);
    assert_eq!(body["data"]["symbol"], "👍");
    assert_eq!(body["data"]["enabled"], true);
    assert!(server.data.last_react_content_type.lock().unwrap().is_none());

    let (_, view) = client.get("/posts/1/view").await;
    assert_eq!(view["data"]["liked"], true);

    let (status, body) = client
        .put("/posts/1/react", json!({ "active": true, "count": 4 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["active"], false);
    assert_eq!(body["data"]["count"], 3);

    let (_, view) = client.get("/posts/1/view").await;
    assert_eq!(view["data"]["liked"], false);
}

/// 観点: ログアウト後は like 記録が残っていても liked にならないか
#[tokio::test]
async fn test_liked_hidden_after_logout() {
    let server = MockServer::start().await;
    let client = TestClient::new_with_api_url(Some(server.base_url())).await;
    client.login().await;

    client
        .put("/posts/1/react", json!({ "active": false, "count": 3 }))
        .await;
    client.post("/auth/logout", json!({})).await;

    let (_, view) = client.get("/posts/1/view").await;
    assert_eq!(view["data"]["liked"], false);

    // Logging back in brings the remembered like back
    client.login().await;
    let (_, view) = client.get("/posts/1/view").await;
    assert_eq!(view["data"]["liked"], true);
}
