//! HTTP client for the token and content services.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two independent `reqwest` clients, one per service, each with its own base
//! URL and the shared per-request timeout. The content client never sends a
//! request without first passing it through [`ApiClient::authorize`], which
//! attaches the bearer token.
//!
//! ERROR HANDLING
//! ==============
//! Every failure leaves this module as an [`ApiError`]; raw `reqwest` errors
//! never escape. Failures are logged here so callers only decide presentation.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use reqwest::RequestBuilder;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

use super::error::{ApiError, AuthError, TransportError};
use super::types::{ContentItem, TokenRequest, parse_content_response, parse_token_response};
use crate::config::{ClientConfig, normalize_base_url};
use crate::storage::{AUTH_TOKEN_KEY, KeyValueStore};

pub const GENERATE_TOKEN_PATH: &str = "/generateToken";
pub const GET_CONTENT_PATH: &str = "/getContent";

/// Operations the content store needs from the transport. Enables mocking in tests.
#[async_trait::async_trait]
pub trait ContentApi: Send + Sync {
    /// Exchange `email` for a bearer token and hold on to it.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NoTokenReceived`] when the response has no token,
    /// or a [`TransportError`] when the call itself fails.
    async fn request_token(&mut self, email: &str) -> Result<String, ApiError>;

    /// Fetch the next content item with the held token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingToken`] when no token is held, or a
    /// [`TransportError`] when the call fails.
    async fn fetch_content(&self) -> Result<ContentItem, ApiError>;

    /// `true` while a non-empty token is held.
    fn is_authenticated(&self) -> bool;

    /// Drop the held token from memory and durable storage.
    fn clear_token(&mut self);
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct ApiClient {
    auth_http: reqwest::Client,
    content_http: reqwest::Client,
    auth_base_url: String,
    content_base_url: String,
    token: Option<String>,
    storage: Arc<dyn KeyValueStore>,
}

impl ApiClient {
    /// Build both HTTP clients from `config` and pick up any stored token.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Request`] if an HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig, storage: Arc<dyn KeyValueStore>) -> Result<Self, TransportError> {
        let auth_http = build_http(config)?;
        let content_http = build_http(config)?;
        let token = storage.get(AUTH_TOKEN_KEY).filter(|t| !t.is_empty());
        tracing::debug!(has_token = token.is_some(), "api client initialized");
        Ok(Self {
            auth_http,
            content_http,
            auth_base_url: normalize_base_url(&config.auth_base_url),
            content_base_url: normalize_base_url(&config.content_base_url),
            token,
            storage,
        })
    }

    /// The held token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Attach `Authorization: Bearer <token>` when a token is held.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn generate_token(&self, email: &str) -> Result<String, ApiError> {
        let url = format!("{}{GENERATE_TOKEN_PATH}", self.auth_base_url);
        let request = self.auth_http.post(url).json(&TokenRequest { email });
        let body = send(request).await?;
        parse_token_response(&body)
    }

    async fn get_content(&self) -> Result<ContentItem, ApiError> {
        if self.token.is_none() {
            return Err(AuthError::MissingToken.into());
        }
        let url = format!("{}{GET_CONTENT_PATH}", self.content_base_url);
        let request = self.authorize(self.content_http.get(url));
        let body = send(request).await?;
        parse_content_response(&body)
    }
}

#[async_trait::async_trait]
impl ContentApi for ApiClient {
    async fn request_token(&mut self, email: &str) -> Result<String, ApiError> {
        let token = self.generate_token(email).await.inspect_err(|e| {
            tracing::warn!(error = %e, "token generation failed");
        })?;

        self.token = Some(token.clone());
        if let Err(e) = self.storage.set(AUTH_TOKEN_KEY, &token) {
            tracing::warn!(error = %e, "failed to persist auth token");
        }
        tracing::info!("auth token issued");
        Ok(token)
    }

    async fn fetch_content(&self) -> Result<ContentItem, ApiError> {
        self.get_content().await.inspect_err(|e| {
            tracing::warn!(error = %e, "content fetch failed");
        })
    }

    fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    fn clear_token(&mut self) {
        self.token = None;
        if let Err(e) = self.storage.remove(AUTH_TOKEN_KEY) {
            tracing::warn!(error = %e, "failed to remove stored auth token");
        }
    }
}

// =============================================================================
// HTTP
// =============================================================================

fn build_http(config: &ClientConfig) -> Result<reqwest::Client, TransportError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(config.request_timeout)
        .build()
        .map_err(|e| TransportError::Request { message: format!("http client build failed: {e}") })
}

/// Send `request` and return the success body, normalizing every failure.
async fn send(request: RequestBuilder) -> Result<String, TransportError> {
    let response = request.send().await.map_err(|e| TransportError::from_reqwest(&e))?;
    let status = response.status();
    if !status.is_success() {
        // The server answered; an unreadable error body still reports its status.
        let body = response.text().await.unwrap_or_default();
        return Err(TransportError::from_status(status.as_u16(), &body));
    }
    response.text().await.map_err(|e| TransportError::from_reqwest(&e))
}
