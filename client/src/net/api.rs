//! REST API client for the Snipzo backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with cookies sent on
//! every request so the backend's HttpOnly session cookie rides along.
//! Server-side (SSR): the transport answers `ApiError::Unavailable` since the
//! session cookie only exists in the browser.
//!
//! DESIGN
//! ======
//! `ApiClient` owns endpoint knowledge (paths, payloads, response types) and
//! is generic over a `Transport` that only moves requests. Tests swap in a
//! scripted transport to exercise session and list flows without a network.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    AdminUser, AdminUserList, ClickStats, HistoryPage, HistoryQuery, Identity, ShortLink, ShortenResponse, UserUrls,
};
use crate::config::ApiConfig;

/// HTTP verbs used by the backend contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// A transport-agnostic request against the API base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the base URL, e.g. `/urls/7/stats`.
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), query: Vec::new(), body: None }
    }

    fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self { method: Method::Post, path: path.into(), query: Vec::new(), body: Some(body) }
    }

    fn post_empty(path: impl Into<String>) -> Self {
        Self { method: Method::Post, path: path.into(), query: Vec::new(), body: None }
    }

    fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::Delete, path: path.into(), query: Vec::new(), body: None }
    }

    fn with_query(mut self, query: Vec<(&'static str, String)>) -> Self {
        self.query = query;
        self
    }
}

/// Raw HTTP outcome: status plus a JSON body (`Null` when empty).
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves one request to the backend and returns whatever it answered.
///
/// Implementations report HTTP error statuses as `Ok`; only failures to get a
/// response at all are `Err`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Credentialed `fetch` transport used by the browser build.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    config: ApiConfig,
}

impl HttpTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = self.config.endpoint(&request.path);
            let builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Delete => Request::delete(&url),
            }
            .credentials(web_sys::RequestCredentials::Include)
            .header("Content-Type", "application/json")
            .query(request.query.iter().map(|(key, value)| (*key, value.as_str())));

            let resp = match &request.body {
                Some(body) => builder
                    .json(body)
                    .map_err(|e| ApiError::Network(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let status = resp.status();
            let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(ApiResponse { status, body: parse_body(text) })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.config, request);
            Err(ApiError::Unavailable)
        }
    }
}

/// Decode a response body, keeping non-JSON text as a string value.
pub(crate) fn parse_body(text: String) -> serde_json::Value {
    if text.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text))
}

/// The application's client type.
pub type Api = ApiClient<HttpTransport>;

/// Typed wrapper around the backend's REST endpoints.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    transport: T,
}

impl Api {
    /// Client for the compile-time configured base URL.
    pub fn from_env() -> Self {
        Self::new(HttpTransport::new(ApiConfig::from_env()))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call(&self, request: ApiRequest) -> Result<serde_json::Value, ApiError> {
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::from_status(response.status, &response.body));
        }
        Ok(response.body)
    }

    async fn call_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let body = self.call(request).await?;
        serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `POST /register`.
    ///
    /// # Errors
    ///
    /// Returns the backend's failure, e.g. an already-registered e-mail.
    pub async fn register(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        self.call(ApiRequest::post("/register", body)).await.map(drop)
    }

    /// `POST /login`. The backend answers by setting the session cookie.
    ///
    /// # Errors
    ///
    /// Returns the backend's failure, e.g. invalid credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        self.call(ApiRequest::post("/login", body)).await.map(drop)
    }

    /// `POST /logout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.call(ApiRequest::post_empty("/logout")).await.map(drop)
    }

    /// `GET /me`: the identity behind the current session cookie.
    ///
    /// # Errors
    ///
    /// Returns an error when there is no session or the body is malformed.
    pub async fn me(&self) -> Result<Identity, ApiError> {
        self.call_json(ApiRequest::get("/me")).await
    }

    /// `POST /change-password`.
    ///
    /// # Errors
    ///
    /// Returns the backend's failure, e.g. a wrong current password.
    pub async fn change_password(&self, old_password: &str, new_password: &str) -> Result<(), ApiError> {
        let body = serde_json::json!({ "old_password": old_password, "new_password": new_password });
        self.call(ApiRequest::post("/change-password", body)).await.map(drop)
    }

    /// `POST /change-email`.
    ///
    /// # Errors
    ///
    /// Returns the backend's failure, e.g. an e-mail already in use.
    pub async fn change_email(&self, email: &str) -> Result<(), ApiError> {
        let body = serde_json::json!({ "email": email });
        self.call(ApiRequest::post("/change-email", body)).await.map(drop)
    }

    /// `POST /reset-password` with the token from the reset link.
    ///
    /// # Errors
    ///
    /// Returns the backend's failure, e.g. an expired token.
    pub async fn reset_password(&self, token: &str, password: &str) -> Result<(), ApiError> {
        let body = serde_json::json!({ "token": token, "password": password });
        self.call(ApiRequest::post("/reset-password", body)).await.map(drop)
    }

    /// `GET /history`: one page of the user's links.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the page is malformed.
    pub async fn history(&self, query: &HistoryQuery) -> Result<HistoryPage, ApiError> {
        self.call_json(ApiRequest::get("/history").with_query(query.to_pairs())).await
    }

    /// `GET /urls/{id}/stats`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the stats are malformed.
    pub async fn link_stats(&self, link_id: &str) -> Result<ClickStats, ApiError> {
        self.call_json(ApiRequest::get(link_stats_endpoint(link_id))).await
    }

    /// `DELETE /urls/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses the delete.
    pub async fn delete_link(&self, link_id: &str) -> Result<(), ApiError> {
        self.call(ApiRequest::delete(link_endpoint(link_id))).await.map(drop)
    }

    /// `POST /shorten`, returning the new short URL.
    ///
    /// # Errors
    ///
    /// Returns the backend's failure, e.g. a rate limit.
    pub async fn shorten(&self, url: &str) -> Result<String, ApiError> {
        let body = serde_json::json!({ "url": url });
        let resp: ShortenResponse = self.call_json(ApiRequest::post("/shorten", body)).await?;
        Ok(resp.short_url)
    }

    /// `GET /admin/users?search=`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the caller is not an admin.
    pub async fn admin_users(&self, search: &str) -> Result<Vec<AdminUser>, ApiError> {
        let request = ApiRequest::get("/admin/users").with_query(vec![("search", search.to_owned())]);
        let list: AdminUserList = self.call_json(request).await?;
        Ok(list.users)
    }

    /// `POST /admin/users/{id}/set-active`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses the change.
    pub async fn set_user_active(&self, user_id: &str, active: bool) -> Result<(), ApiError> {
        let body = serde_json::json!({ "active": active });
        self.call(ApiRequest::post(set_active_endpoint(user_id), body)).await.map(drop)
    }

    /// `GET /admin/users/{id}/urls`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the list is malformed.
    pub async fn admin_user_urls(&self, user_id: &str) -> Result<Vec<ShortLink>, ApiError> {
        let urls: UserUrls = self.call_json(ApiRequest::get(user_urls_endpoint(user_id))).await?;
        Ok(urls.urls)
    }
}

fn link_endpoint(link_id: &str) -> String {
    format!("/urls/{link_id}")
}

fn link_stats_endpoint(link_id: &str) -> String {
    format!("/urls/{link_id}/stats")
}

fn set_active_endpoint(user_id: &str) -> String {
    format!("/admin/users/{user_id}/set-active")
}

fn user_urls_endpoint(user_id: &str) -> String {
    format!("/admin/users/{user_id}/urls")
}
