use serde_json::json;

use crate::helpers::{TestApp, envelope, get_random_email};

#[tokio::test]
async fn should_return_201_with_the_created_account() {
    let app = TestApp::new().await;

    let response = app
        .post_register(&json!({"username": "a", "password": "p", "email": "a@x.com"}))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body = envelope(response).await;
    assert_eq!(body["status"], "Created");
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["username"], "a");
    assert_eq!(body["data"]["email"], "a@x.com");
    assert_eq!(body["data"]["password"], "");
}

#[tokio::test]
async fn should_return_409_if_email_already_exists() {
    let app = TestApp::new().await;
    let email = get_random_email();
    let body = json!({"username": "a", "password": "p", "email": email});

    app.post_register(&body).await;
    let response = app.post_register(&body).await;

    assert_eq!(response.status().as_u16(), 409);
    assert_eq!(envelope(response).await["status"], "Conflict");
}

#[tokio::test]
async fn should_return_400_if_invalid_input() {
    let app = TestApp::new().await;

    let test_cases = [
        json!({"username": "a", "password": "p", "email": "invalid_email"}),
        json!({"username": "", "password": "p", "email": get_random_email()}),
        json!({"username": "a", "password": "", "email": get_random_email()}),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_register(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            test_case
        );
    }
}

#[tokio::test]
async fn should_return_422_if_malformed_input() {
    let app = TestApp::new().await;

    let response = app.post_raw("/account/register", r#"{"username": "a""#).await;
    assert_eq!(response.status().as_u16(), 422);

    let response = app
        .post_register(&json!({"username": "a", "email": get_random_email()}))
        .await;
    assert_eq!(response.status().as_u16(), 422);
}
