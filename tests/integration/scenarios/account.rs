use crate::helpers::client::TestClient;
use crate::helpers::mock_server::{MockServer, ACCESS_TOKEN, VALID_PASSWORD};
use axum::http::StatusCode;
use serde_json::json;

/// 観点: ログイン成功でセッションが保存され /auth/me に反映されるか
#[tokio::test]
async fn test_login_persists_session() {
    let server = MockServer::start().await;
    let client = TestClient::new_with_api_url(Some(server.base_url())).await;

    let (status, body) = client
        .post(
            "/auth/login",
            json!({ "email": "alice@stud.noroff.no", "password": VALID_PASSWORD }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Login successful!");
    assert_eq!(body["data"]["name"], "alice");

    assert_eq!(
        client.state.session.access_token().await.as_deref(),
        Some(ACCESS_TOKEN)
    );

    let (status, me) = client.get("/auth/me").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["success"], true);
    assert_eq!(me["data"]["name"], "alice");
    assert_eq!(me["data"]["email"], "alice@stud.noroff.no");
    assert_eq!(me["data"]["isLoggedIn"], true);
}

/// 観点: パスワード誤りでリモートのエラーメッセージが返り、セッションは作られないか
#[tokio::test]
async fn test_login_wrong_password() {
    let server = MockServer::start().await;
    let client = TestClient::new_with_api_url(Some(server.base_url())).await;

    let (status, body) = client
        .post(
            "/auth/login",
            json!({ "email": "alice@stud.noroff.no", "password": "nope" }),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid email or password");
    assert!(!client.state.session.is_logged_in().await);
}

/// 観点: 不正なメール形式ではリモートへ一切リクエストしないか
#[tokio::test]
async fn test_login_invalid_email_makes_no_request() {
    let server = MockServer::start().await;
    let client = TestClient::new_with_api_url(Some(server.base_url())).await;

    let (status, body) = client
        .post(
            "/auth/login",
            json!({ "email": "not-an-email", "password": VALID_PASSWORD }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please enter a valid email address");
    assert_eq!(server.hits(), 0);
}

/// 観点: 名前未入力の登録でメールのローカル部が名前になるか
#[tokio::test]
async fn test_register_defaults_name_from_email() {
    let server = MockServer::start().await;
    let client = TestClient::new_with_api_url(Some(server.base_url())).await;

    let (status, body) = client
        .post(
            "/auth/register",
            json!({
                "name": "",
                "email": "new.user@stud.noroff.no",
                "password": "secret123",
                "confirmPassword": "secret123"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Registration successful! You can now log in.");
    assert_eq!(body["data"]["name"], "new.user");
    // Registration never logs in
    assert!(!client.state.session.is_logged_in().await);
}

/// 観点: 登録のバリデーション(ドメイン・パスワード一致)がリクエスト前に行われるか
#[tokio::test]
async fn test_register_validation() {
    let server = MockServer::start().await;
    let client = TestClient::new_with_api_url(Some(server.base_url())).await;

    let (status, body) = client
        .post(
            "/auth/register",
            json!({
                "name": "x",
                "email": "x@gmail.com",
                "password": "secret123",
                "confirmPassword": "secret123"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Only @stud.noroff.no email addresses are allowed");

    let (status, body) = client
        .post(
            "/auth/register",
            json!({
                "name": "x",
                "email": "x@stud.noroff.no",
                "password": "secret123",
                "confirmPassword": "secret124"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Passwords do not match");

    assert_eq!(server.hits(), 0);
}

/// 観点: 既存プロフィールの登録でリモートのメッセージがそのまま返るか
#[tokio::test]
async fn test_register_remote_error() {
    let server = MockServer::start().await;
    let client = TestClient::new_with_api_url(Some(server.base_url())).await;

    let (status, body) = client
        .post(
            "/auth/register",
            json!({
                "name": "taken",
                "email": "taken@stud.noroff.no",
                "password": "secret123",
                "confirmPassword": "secret123"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Profile already exists");
}

/// 観点: ログアウトでセッションが消え、/auth/me が success:false になるか
#[tokio::test]
async fn test_logout_clears_session() {
    let server = MockServer::start().await;
    let client = TestClient::new_with_api_url(Some(server.base_url())).await;
    client.login().await;

    let (status, body) = client.post("/auth/logout", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Logged out successfully");

    let (status, me) = client.get("/auth/me").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["success"], false);
    assert!(client.state.session.access_token().await.is_none());
}
