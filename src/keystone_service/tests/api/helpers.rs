use std::time::Duration;

use keystone_adapters::config::constants::test::{APP_ADDRESS, JWT_SECRET};
use keystone_adapters::{HashMapAccountStore, Settings};
use keystone_service::AccountService;
use reqwest::Response;
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

impl TestApp {
    pub async fn new() -> Self {
        let settings = test_settings();
        let service = AccountService::from_settings(&settings, HashMapAccountStore::new())
            .expect("Failed to build account service");
        let router = service.into_router(
            settings.server.allowed_origins.clone(),
            Duration::from_millis(settings.server.request_timeout_in_millis),
        );

        let listener = TcpListener::bind(APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let http_client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .unwrap();

        Self {
            address,
            http_client,
        }
    }

    pub async fn get_health(&self) -> Response {
        self.http_client
            .get(format!("{}/health", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_register(&self, body: &Value) -> Response {
        self.http_client
            .post(format!("{}/account/register", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_login(&self, body: &Value) -> Response {
        self.http_client
            .post(format!("{}/account/login", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_raw(&self, path: &str, body: &'static str) -> Response {
        self.http_client
            .post(format!("{}{}", self.address, path))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_detail(&self) -> Response {
        self.http_client
            .get(format!("{}/account/detail", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn patch_update(&self, body: &Value) -> Response {
        self.http_client
            .patch(format!("{}/account/update", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_account(&self) -> Response {
        self.http_client
            .delete(format!("{}/account/delete", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register `email` with password `p` and log in, leaving the session
    /// cookie in the client's cookie store.
    pub async fn register_and_login(&self, email: &str) {
        let response = self
            .post_register(&json!({"username": "a", "password": "p", "email": email}))
            .await;
        assert_eq!(response.status().as_u16(), 201);

        let response = self
            .post_login(&json!({"email": email, "password": "p"}))
            .await;
        assert_eq!(response.status().as_u16(), 200);
    }
}

fn test_settings() -> Settings {
    let config = Settings::defaults()
        .and_then(|builder| builder.set_override("session.secret", JWT_SECRET))
        .and_then(|builder| builder.set_override("hashing.memory_kib", 8_i64))
        .and_then(|builder| builder.set_override("hashing.iterations", 1_i64))
        .and_then(|builder| builder.set_override("hashing.parallelism", 1_i64))
        .and_then(|builder| builder.build())
        .expect("Failed to build test configuration");

    Settings::from_config(config).expect("Invalid test configuration")
}

pub fn get_random_email() -> String {
    use fake::Fake;
    use fake::faker::internet::en::SafeEmail;

    SafeEmail().fake()
}

pub async fn envelope(response: Response) -> Value {
    response
        .json()
        .await
        .expect("Response body is not JSON")
}
