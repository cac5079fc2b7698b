//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests
//! with an explicit caller identity.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tray_api::{create_app, create_app_state};
use tray_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, ServerConfig, SnowflakeConfig,
};

/// Header carrying the caller's user id
pub const USER_ID_HEADER: &str = "x-user-id";

/// Check whether the test environment is available
///
/// The API tests need a PostgreSQL instance with the migrations applied;
/// they are skipped when DATABASE_URL is not set.
pub fn check_test_env() -> bool {
    let _ = dotenvy::dotenv();
    std::env::var("DATABASE_URL").is_ok()
}

/// Build an AppConfig for tests from the environment
pub fn test_config() -> Result<AppConfig> {
    let _ = dotenvy::dotenv();
    let url = std::env::var("DATABASE_URL")?;

    Ok(AppConfig {
        app: AppSettings {
            name: "tray-server-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url,
            max_connections: 5,
            min_connections: 1,
        },
        cors: CorsConfig::default(),
        snowflake: SnowflakeConfig { worker_id: 901 },
    })
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server on an ephemeral port
    pub async fn start() -> Result<Self> {
        let config = test_config()?;

        // Create app state and build the application
        let state = create_app_state(config).await?;
        let app = create_app(state);

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request without identity
    pub async fn get(&self, path: &str) -> Result<Response> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url(), path))
            .send()
            .await?;
        Ok(response)
    }

    /// Make a GET request as a specific user
    pub async fn get_as(&self, user_id: &str, path: &str) -> Result<Response> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url(), path))
            .header(USER_ID_HEADER, user_id)
            .send()
            .await?;
        Ok(response)
    }

    /// Make a POST request without identity
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url(), path))
            .json(body)
            .send()
            .await?;
        Ok(response)
    }

    /// Make a POST request as a specific user
    pub async fn post_as<T: Serialize>(
        &self,
        user_id: &str,
        path: &str,
        body: &T,
    ) -> Result<Response> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url(), path))
            .header(USER_ID_HEADER, user_id)
            .json(body)
            .send()
            .await?;
        Ok(response)
    }

    /// Make a bodyless POST request as a specific user
    pub async fn post_empty_as(&self, user_id: &str, path: &str) -> Result<Response> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url(), path))
            .header(USER_ID_HEADER, user_id)
            .send()
            .await?;
        Ok(response)
    }
}
