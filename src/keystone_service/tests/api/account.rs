use serde_json::json;

use crate::helpers::{TestApp, envelope, get_random_email};

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::new().await;

    let response = app.get_health().await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn protected_routes_return_401_without_session() {
    let app = TestApp::new().await;

    assert_eq!(app.get_detail().await.status().as_u16(), 401);
    assert_eq!(
        app.patch_update(&json!({"username": "b", "password": "q", "email": "b@x.com"}))
            .await
            .status()
            .as_u16(),
        401
    );
    assert_eq!(app.delete_account().await.status().as_u16(), 401);
}

#[tokio::test]
async fn detail_returns_the_logged_in_account() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.register_and_login(&email).await;

    let response = app.get_detail().await;

    assert_eq!(response.status().as_u16(), 200);
    let body = envelope(response).await;
    assert_eq!(body["data"]["email"], email.as_str());
    assert_eq!(body["data"]["password"], "");
}

#[tokio::test]
async fn update_replaces_account_fields() {
    let app = TestApp::new().await;
    app.register_and_login(&get_random_email()).await;
    let new_email = get_random_email();

    let response = app
        .patch_update(&json!({"username": "b", "password": "q", "email": new_email}))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = envelope(response).await;
    assert_eq!(body["data"]["username"], "b");
    assert_eq!(body["data"]["email"], new_email.as_str());
    assert!(!body["data"]["updated_at"].is_null());

    let response = app
        .post_login(&json!({"email": new_email, "password": "q"}))
        .await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn update_into_a_taken_email_returns_409() {
    let app = TestApp::new().await;
    let taken = get_random_email();
    let response = app
        .post_register(&json!({"username": "x", "password": "p", "email": taken}))
        .await;
    assert_eq!(response.status().as_u16(), 201);
    app.register_and_login(&get_random_email()).await;

    let response = app
        .patch_update(&json!({"username": "b", "password": "q", "email": taken}))
        .await;

    assert_eq!(response.status().as_u16(), 409);
    let body = envelope(response).await;
    assert_eq!(body["status"], "Conflict");
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn update_with_invalid_body_is_rejected() {
    let app = TestApp::new().await;
    app.register_and_login(&get_random_email()).await;

    let response = app
        .patch_update(&json!({"username": "b", "password": "q", "email": "nope"}))
        .await;
    assert_eq!(response.status().as_u16(), 400);

    let response = app.patch_update(&json!({"username": "b"})).await;
    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn delete_removes_the_account() {
    let app = TestApp::new().await;
    app.register_and_login(&get_random_email()).await;

    let response = app.delete_account().await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        envelope(response).await["message"],
        "Account deleted successfully"
    );

    // The session outlives the account.
    assert_eq!(app.get_detail().await.status().as_u16(), 404);
    assert_eq!(app.delete_account().await.status().as_u16(), 404);
}
