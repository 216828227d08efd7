//! Panda Market API client.
//!
//! Low-level HTTP client that handles raw requests against a configured
//! base URL. Higher-level operations are implemented via traits on
//! entity types.

use std::sync::Arc;

use reqwest::{Client, Response};
use serde::Serialize;
use url::Url;

use crate::error::{MarketError, Result};

/// Base URL of the production Panda Market API deployment.
pub const DEFAULT_BASE_URL: &str = "https://panda-market-api-crud.vercel.app/api";

const USER_AGENT: &str = concat!("panda-market/", env!("CARGO_PKG_VERSION"));

/// Low-level Panda Market API client.
///
/// Handles HTTP requests against a configured base URL. Entity-specific
/// operations are implemented via the `Get`, `List`, `Create`, `Update`,
/// and `Delete` traits on model types.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use panda_market::{MarketClient, DEFAULT_BASE_URL};
///
/// # fn example() -> panda_market::Result<()> {
/// // Point at the production API
/// let client = MarketClient::new(DEFAULT_BASE_URL)?;
///
/// // Or at a local stub server for testing
/// let client = MarketClient::new("http://127.0.0.1:9999/api")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MarketClient {
    http: Client,
    base_url: Arc<Url>,
}

impl std::fmt::Debug for MarketClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl MarketClient {
    /// Create a new client with the provided base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL for the API (e.g., [`DEFAULT_BASE_URL`])
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(base_url: &str) -> Result<Self> {
        // Ensure base URL ends with / so join() keeps the final segment
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(MarketError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Make a GET request.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(MarketError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a GET request with query parameters.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(MarketError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a POST request with JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(MarketError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a PATCH request with JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .patch(url)
            .json(body)
            .send()
            .await
            .map_err(MarketError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a DELETE request.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(MarketError::HttpError)?;

        Self::check_response(response).await
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = Self::extract_error_message(response, status).await;
        Err(MarketError::ApiError {
            message,
            status_code: Some(status.as_u16()),
        })
    }

    /// Extract error message from a failed response.
    async fn extract_error_message(
        response: Response,
        status: reqwest::StatusCode,
    ) -> String {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return format!("HTTP {status}"),
        };

        // Try to parse as JSON and extract message field
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
            if let Some(err) = json.get("error").and_then(|m| m.as_str()) {
                return err.to_string();
            }
        }

        if body.is_empty() {
            return format!("HTTP {status}");
        }

        body
    }
}
