//! HTTP client for the catalog API.
//!
//! The client is an explicitly constructed value, never ambient global
//! state, so tests can point it at a local server. Configuration is via
//! environment variables:
//! - `SLAYER_CATALOG_URL` - Base URL (default: `http://localhost:8001/api`)
//!
//! Every outbound call emits a tracing event on dispatch and on response or
//! error. That is the whole failure-handling story: no retries, no backoff.
//! Callers get a uniform [`ClientError::FetchFailed`] for any transport
//! failure, timeout, or non-2xx status; the cause is logged here and not
//! carried up.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{CatalogRecord, Resource};

/// Default URL for local development.
const DEFAULT_URL: &str = "http://localhost:8001/api";

/// Shared bound on every request; exceeding it is a transport failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// Any failed catalog request. Not-found is deliberately not
    /// distinguished from outage.
    #[error("failed to fetch {resource}")]
    FetchFailed { resource: Resource },

    /// The health probe could not reach the backend.
    #[error("backend service unavailable")]
    Unavailable,
}

/// Response body of the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub database: String,
}

/// HTTP client for the catalog API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    http: Client,
}

impl CatalogClient {
    /// Create client from environment variables.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("SLAYER_CATALOG_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
        Self::new(base_url)
    }

    /// Create with an explicit base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to construct HTTP client");
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// Fetch a whole collection, in backend order.
    pub async fn get_all<R: CatalogRecord>(&self) -> Result<Vec<R>, ClientError> {
        self.get_json(R::RESOURCE, &format!("/{}", R::RESOURCE.path()))
            .await
    }

    /// Fetch one record by id.
    pub async fn get_by_id<R: CatalogRecord>(&self, id: i64) -> Result<R, ClientError> {
        self.get_json(R::RESOURCE, &format!("/{}/{}", R::RESOURCE.path(), id))
            .await
    }

    /// Create a new record and return it with its assigned id.
    pub async fn create<R: CatalogRecord>(&self, input: &R::CreateInput) -> Result<R, ClientError> {
        let resource = R::RESOURCE;
        let url = format!("{}/{}", self.base_url, resource.path());
        tracing::debug!(%url, "POST {}", resource);

        let response = self
            .http
            .post(&url)
            .json(input)
            .send()
            .await
            .map_err(|e| self.fetch_failed(resource, &url, &e))?;

        self.decode(resource, &url, response).await
    }

    /// Probe the backend health endpoint.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = format!("{}/health", self.base_url);
        tracing::debug!(%url, "GET health");

        let response = self.http.get(&url).send().await.map_err(|e| {
            tracing::warn!(%url, "health check failed: {}", e);
            ClientError::Unavailable
        })?;

        let status = response.status();
        tracing::debug!(%url, %status, "health response");
        if !status.is_success() {
            return Err(ClientError::Unavailable);
        }
        response.json().await.map_err(|e| {
            tracing::warn!(%url, "health response unreadable: {}", e);
            ClientError::Unavailable
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: Resource,
        path: &str,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET {}", resource);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.fetch_failed(resource, &url, &e))?;

        self.decode(resource, &url, response).await
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        resource: Resource,
        url: &str,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        tracing::debug!(%url, %status, "response");

        if !status.is_success() {
            tracing::warn!(%url, %status, "request for {} rejected", resource);
            return Err(ClientError::FetchFailed { resource });
        }

        response
            .json()
            .await
            .map_err(|e| self.fetch_failed(resource, url, &e))
    }

    fn fetch_failed(
        &self,
        resource: Resource,
        url: &str,
        cause: &dyn std::fmt::Display,
    ) -> ClientError {
        tracing::warn!(%url, "request for {} failed: {}", resource, cause);
        ClientError::FetchFailed { resource }
    }
}
