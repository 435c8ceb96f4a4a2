use serde_json::json;

use crate::helpers::{TestApp, envelope, get_random_email};

#[tokio::test]
async fn should_return_200_and_set_session_cookie() {
    let app = TestApp::new().await;
    app.post_register(&json!({"username": "a", "password": "p", "email": "a@x.com"}))
        .await;

    let response = app
        .post_login(&json!({"email": "a@x.com", "password": "p"}))
        .await;

    assert_eq!(response.status().as_u16(), 200);

    let auth_cookie = response
        .cookies()
        .find(|cookie| cookie.name() == "token")
        .expect("No session cookie found");
    assert!(!auth_cookie.value().is_empty());
    assert!(auth_cookie.http_only());
    assert_eq!(auth_cookie.path(), Some("/"));

    let body = envelope(response).await;
    assert_eq!(body["status"], "OK");
    assert_eq!(body["data"]["email"], "a@x.com");
}

#[tokio::test]
async fn should_return_401_without_cookie_if_password_is_wrong() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.post_register(&json!({"username": "a", "password": "p", "email": email}))
        .await;

    let response = app
        .post_login(&json!({"email": email, "password": "wrong"}))
        .await;

    assert_eq!(response.status().as_u16(), 401);
    assert!(response.cookies().all(|cookie| cookie.name() != "token"));
    assert_eq!(envelope(response).await["status"], "Unauthorized");
}

#[tokio::test]
async fn should_return_404_if_email_is_unknown() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&json!({"email": get_random_email(), "password": "p"}))
        .await;

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn should_return_422_if_malformed_credentials() {
    let app = TestApp::new().await;

    let response = app.post_raw("/account/login", "not json").await;

    assert_eq!(response.status().as_u16(), 422);
}
