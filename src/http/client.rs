//! HTTP client for the Users API.
//!
//! `UserApiClient` layers resource-shaped convenience calls over a single raw
//! request path. Every call returns the received status and body untouched so
//! callers can assert on negative responses instead of having them swallowed
//! by the transport layer.

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use log::trace;
use reqwest::Method;
use serde_json::Value;

/// Collection path of the Users resource.
pub const USERS_PATH: &str = "/users";

/// Item path for a user id, e.g. `/users/7`.
pub fn user_path(id: u64) -> String {
    format!("{USERS_PATH}/{id}")
}

pub struct UserApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl UserApiClient {
    /// Build a client for the given base URL. Trailing slashes are trimmed so
    /// paths can always be joined with a single `/`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        UserApiClient {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Build a client from resolved settings, failing when `base.url` is not
    /// configured. Construction performs no I/O against the target.
    pub fn from_config(config: &HarnessConfig) -> Result<Self, HarnessError> {
        Ok(Self::new(config.base_url()?))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // USERS RESOURCE OPERATIONS
    // =========================================================================

    pub async fn create_user(&self, body: &Value) -> Result<ApiResponse, HarnessError> {
        self.request(Method::POST, USERS_PATH, Some(body)).await
    }

    pub async fn fetch_user(&self, id: u64) -> Result<ApiResponse, HarnessError> {
        self.request(Method::GET, &user_path(id), None).await
    }

    pub async fn update_user(&self, id: u64, body: &Value) -> Result<ApiResponse, HarnessError> {
        self.request(Method::PUT, &user_path(id), Some(body)).await
    }

    pub async fn delete_user(&self, id: u64) -> Result<ApiResponse, HarnessError> {
        self.request(Method::DELETE, &user_path(id), None).await
    }

    pub async fn list_users(&self) -> Result<ApiResponse, HarnessError> {
        self.request(Method::GET, USERS_PATH, None).await
    }

    // =========================================================================
    // RAW REQUEST LAYER
    // =========================================================================

    /// Issue a request against an arbitrary path under the base URL.
    ///
    /// A JSON body is sent with a JSON content type. Any received response,
    /// 2xx or not, comes back as an `ApiResponse`; only transport failures
    /// (connection refused, timeouts, malformed URLs) are errors.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, HarnessError> {
        let url = format!("{}{}", self.base_url, path);
        let context = format!("{method} {path}");

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| HarnessError::from_transport_error(e, &context))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| HarnessError::from_transport_error(e, &context))?;

        trace!("{context} -> {status}");
        Ok(ApiResponse {
            status,
            body,
            context,
        })
    }
}

// =============================================================================
// RESPONSE HANDLE
// =============================================================================

/// One received HTTP response, owned in full by the caller.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    body: String,
    context: String,
}

impl ApiResponse {
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Raw response body. Empty for bodyless responses such as 204.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Parse the body as JSON. An empty body is not valid JSON and errors.
    pub fn json(&self) -> Result<Value, HarnessError> {
        serde_json::from_str(&self.body)
            .map_err(|e| HarnessError::from_decode_error(e, &self.context))
    }

    /// Deserialize the body into a typed value.
    pub fn json_as<T: serde::de::DeserializeOwned>(&self) -> Result<T, HarnessError> {
        serde_json::from_str(&self.body)
            .map_err(|e| HarnessError::from_decode_error(e, &self.context))
    }
}
