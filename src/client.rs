//! Cloud Foundry API client.
//!
//! Low-level HTTP client that handles authentication, filter queries and raw
//! requests. Higher-level operations are implemented via traits on resource
//! types.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response};
use serde::Serialize;
use url::Url;

use crate::error::{CloudFoundryError, Result};
use crate::filter::{augment, FilterParameters};

const USER_AGENT: &str = concat!("cfapi/", env!("CARGO_PKG_VERSION"));

/// Low-level Cloud Foundry API client.
///
/// Handles authentication and HTTP requests. Resource-specific operations
/// are implemented via the `Get` and `List` traits on model types.
///
/// The bearer token is forwarded verbatim; obtaining and refreshing it is the
/// caller's concern.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use cfapi::CloudFoundryClient;
///
/// # fn example() -> cfapi::Result<()> {
/// // Create from environment variables
/// let client = CloudFoundryClient::from_env()?;
///
/// // Or configure manually
/// let client = CloudFoundryClient::new("your-token", "https://api.run.example.com")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CloudFoundryClient {
    http: Client,
    base_url: Arc<Url>,
    token: String,
}

impl std::fmt::Debug for CloudFoundryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudFoundryClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl CloudFoundryClient {
    /// Create a client from environment variables.
    ///
    /// Uses `CF_API_URL` for the API endpoint and `CF_ACCESS_TOKEN` for
    /// authentication.
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is not set.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("CF_API_URL").map_err(|_| {
            CloudFoundryError::ConfigMissing("CF_API_URL environment variable not set".to_string())
        })?;

        let token = env::var("CF_ACCESS_TOKEN").map_err(|_| {
            CloudFoundryError::ConfigMissing(
                "CF_ACCESS_TOKEN environment variable not set".to_string(),
            )
        })?;

        Self::new(&token, &base_url)
    }

    /// Create a new client with the provided token and API endpoint.
    ///
    /// # Arguments
    ///
    /// * `token` - OAuth access token, without the `bearer` prefix
    /// * `base_url` - Cloud Foundry API endpoint (e.g., `https://api.run.example.com`)
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(token: &str, base_url: &str) -> Result<Self> {
        // Ensure base URL ends with /
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
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(CloudFoundryError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            token: token.to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `path` against the base URL and append the filters of
    /// `request` as `q` parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not form a valid URL or a filter
    /// accessor fails.
    pub fn request_url<F: FilterParameters>(&self, path: &str, request: &F) -> Result<Url> {
        let mut url = self.base_url.join(path)?;
        augment(&mut url, request)?;
        Ok(url)
    }

    /// Make a GET request.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(CloudFoundryError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a GET request carrying the filters of `filters` and the
    /// serialized parameters of `query`.
    ///
    /// Filters come first, in accessor order, followed by the `query` pairs
    /// (paging and ordering).
    #[tracing::instrument(skip(self, filters, query))]
    pub async fn get_filtered<F, Q>(&self, path: &str, filters: &F, query: &Q) -> Result<Response>
    where
        F: FilterParameters,
        Q: Serialize + ?Sized,
    {
        let url = self.request_url(path, filters)?;
        tracing::debug!(%url, "sending filtered request");

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await
            .map_err(CloudFoundryError::HttpError)?;

        Self::check_response(response).await
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        // Handle rate limiting
        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(CloudFoundryError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        let (message, error_code) = Self::extract_error(response, status).await;
        Err(CloudFoundryError::ApiError {
            message,
            status_code: Some(status.as_u16()),
            error_code,
        })
    }

    /// Extract the message and v2 error code from a failed response.
    ///
    /// v2 error bodies look like
    /// `{"code": 30003, "description": "...", "error_code": "CF-OrganizationNotFound"}`.
    async fn extract_error(
        response: Response,
        status: reqwest::StatusCode,
    ) -> (String, Option<String>) {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return (format!("HTTP {status}"), None),
        };

        parse_error_body(&body).unwrap_or((body, None))
    }
}

fn parse_error_body(body: &str) -> Option<(String, Option<String>)> {
    let json = serde_json::from_str::<serde_json::Value>(body).ok()?;
    let error_code = json
        .get("error_code")
        .and_then(|c| c.as_str())
        .map(str::to_string);

    let message = json
        .get("description")
        .or_else(|| json.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
        .or_else(|| error_code.clone())?;

    Some((message, error_code))
}
