/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - Test database setup (migrations included)
/// - Router construction against the real application state
/// - JSON request helpers
/// - Cleanup of accounts created during a test

use axum::body::Body;
use axum::http::{Request, StatusCode};
use sahub_api::app::{build_router, AppState};
use sahub_api::config::Config;
use sqlx::PgPool;
use tower::Service as _;
use uuid::Uuid;

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
    pub config: Config,
}

impl TestContext {
    /// Creates a new test context with a migrated database
    pub async fn new() -> anyhow::Result<Self> {
        // Load test configuration
        let config = Config::from_env()?;

        // Connect to database
        let db = PgPool::connect(&config.database.url).await?;

        // Run migrations (path relative to Cargo.toml, not this file)
        sqlx::migrate!("../migrations").run(&db).await?;

        // Build app
        let state = AppState::new(db.clone(), config.clone());
        let app = build_router(state);

        Ok(TestContext { db, app, config })
    }

    /// Sends a JSON POST request and returns (status, parsed body)
    pub async fn post_json(
        &self,
        uri: &str,
        body: serde_json::Value,
    ) -> anyhow::Result<(StatusCode, serde_json::Value)> {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))?;

        let response = self.app.clone().call(request).await?;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let json: serde_json::Value = serde_json::from_slice(&bytes)?;

        Ok((status, json))
    }

    /// Sends a GET request and returns (status, parsed body)
    pub async fn get_json(&self, uri: &str) -> anyhow::Result<(StatusCode, serde_json::Value)> {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())?;

        let response = self.app.clone().call(request).await?;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let json: serde_json::Value = serde_json::from_slice(&bytes)?;

        Ok((status, json))
    }

    /// Removes an account created during a test
    ///
    /// The store itself exposes no delete operation, so cleanup goes straight
    /// to the table.
    pub async fn cleanup_account(&self, email: &str) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM accounts WHERE email = $1")
            .bind(email)
            .execute(&self.db)
            .await?;
        Ok(())
    }
}

/// Generates an email address unique to this test run
pub fn unique_email() -> String {
    format!("test-{}@example.com", Uuid::new_v4())
}
