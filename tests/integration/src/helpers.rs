//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests,
//! and asserting on responses.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use reqwest::{multipart::Form, Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use store_api::{create_app, create_app_state};
use store_common::AppConfig;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::unique_suffix;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    upload_dir: PathBuf,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    ///
    /// Uploads go to a fresh temporary directory and the rate limit is
    /// raised so parallel tests never hit it.
    pub async fn start_with_config(mut config: AppConfig) -> Result<Self> {
        let upload_dir = std::env::temp_dir().join(format!(
            "store-integration-{}-{}",
            std::process::id(),
            unique_suffix()
        ));
        config.storage.upload_dir = upload_dir.display().to_string();
        config.rate_limit.requests_per_second = 1000;
        config.rate_limit.burst = 1000;

        // Create app state
        let state = create_app_state(config).await?;

        // Build application
        let app = create_app(state)?;

        // Bind to a free port
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
            upload_dir,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    fn with_token(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => builder.header("Authorization", format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a PUT request with JSON body and optional auth token
    pub async fn put_json<T: Serialize>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &T,
    ) -> Result<Response> {
        let builder = Self::with_token(self.client.put(self.url(path)), token);
        Ok(builder.json(body).send().await?)
    }

    /// Make a multipart POST request with optional auth token
    pub async fn post_form(&self, path: &str, token: Option<&str>, form: Form) -> Result<Response> {
        let builder = Self::with_token(self.client.post(self.url(path)), token);
        Ok(builder.multipart(form).send().await?)
    }

    /// Make a multipart PUT request with optional auth token
    pub async fn put_form(&self, path: &str, token: Option<&str>, form: Form) -> Result<Response> {
        let builder = Self::with_token(self.client.put(self.url(path)), token);
        Ok(builder.multipart(form).send().await?)
    }

    /// Make a DELETE request with optional auth token
    pub async fn delete(&self, path: &str, token: Option<&str>) -> Result<Response> {
        let builder = Self::with_token(self.client.delete(self.url(path)), token);
        Ok(builder.send().await?)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.upload_dir);
    }
}

/// Create a test configuration
pub fn test_config() -> Result<AppConfig> {
    // Load from environment or use defaults
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    for var in ["DATABASE_URL", "JWT_SECRET"] {
        if std::env::var(var).is_err() {
            eprintln!("Skipping test: {} not set", var);
            return false;
        }
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
