use crate::helpers::client::TestClient;
use crate::helpers::mock_server::MockServer;
use axum::http::StatusCode;

/// 観点: ログイン中の詳細表示でフォロー状態(大文字小文字無視)と作者の他の投稿が揃うか
#[tokio::test]
async fn test_post_view_logged_in() {
    let server = MockServer::start().await;
    let client = TestClient::new_with_api_url(Some(server.base_url())).await;
    client.login().await;

    let (status, body) = client.get("/posts/1/view").await;

    assert_eq!(status, StatusCode::OK);
    let view = &body["data"];
    assert_eq!(view["post"]["id"], 1);
    assert_eq!(view["liked"], false);
    // The post's own counter, not the sum of its reaction list (3)
    assert_eq!(view["reactions"], 4);
    assert_eq!(view["follow"]["author"], "bob");
    assert_eq!(view["follow"]["following"], true);
    assert_eq!(view["follow"]["label"], "Following");

    let more: Vec<u64> = view["moreFromAuthor"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    assert_eq!(more, vec![3]);
}

/// 観点: 未ログインではフォロー状態を取得せず liked も false になるか
#[tokio::test]
async fn test_post_view_anonymous() {
    let server = MockServer::start().await;
    let client = TestClient::new_with_api_url(Some(server.base_url())).await;

    let (status, body) = client.get("/posts/1/view").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["liked"], false);
    assert!(body["data"]["follow"].is_null());
}

/// 観点: 作者の投稿一覧が失敗しても詳細表示自体は成功するか
#[tokio::test]
async fn test_post_view_author_posts_failure() {
    let server = MockServer::start().await;
    let client = TestClient::new_with_api_url(Some(server.base_url())).await;

    let (status, body) = client.get("/posts/7/view").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["post"]["id"], 7);
    assert_eq!(body["data"]["moreFromAuthor"], serde_json::json!([]));
    assert_eq!(body["data"]["moreFromAuthorError"], "No profile with this name");
}

/// 観点: 投稿自体の取得失敗は詳細表示のエラーになるか
#[tokio::test]
async fn test_post_view_missing_post() {
    let server = MockServer::start().await;
    let client = TestClient::new_with_api_url(Some(server.base_url())).await;

    let (status, body) = client.get("/posts/42/view").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No post with such ID");
}
