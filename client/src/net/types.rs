//! REST DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror backend JSON payloads. The backend is external and not
//! strictly typed on ids, so identifiers decode from either strings or
//! integers and are kept as strings on the client.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Subscription level of an account. The backend calls this field `mode`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Free,
    User,
    Business,
    Enterprise,
    Admin,
}

impl AccessLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::User => "user",
            Self::Business => "business",
            Self::Enterprise => "enterprise",
            Self::Admin => "admin",
        }
    }

    /// Uppercased badge text shown in dashboard headers.
    pub fn badge(self) -> String {
        self.as_str().to_ascii_uppercase()
    }

    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// The authenticated account as returned by `GET /me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub email: String,
    #[serde(rename = "mode")]
    pub access_level: AccessLevel,
    #[serde(default = "default_active")]
    pub active: bool,
}

/// One shortened link owned by the current user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortLink {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub source_url: String,
    pub short_url: String,
    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: String,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub clicks: u64,
}

/// Aggregated click analytics for one link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickStats {
    #[serde(default, deserialize_with = "deserialize_count")]
    pub clicks: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub unique_visitors: u64,
    /// ISO 8601 timestamp of the latest click, if any.
    #[serde(default)]
    pub last_click: Option<String>,
}

/// Response of `GET /history`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryPage {
    #[serde(default)]
    pub urls: Vec<ShortLink>,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total: u64,
}

/// Query parameters for `GET /history`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryQuery {
    pub page: u32,
    pub size: u32,
    pub filter: String,
}

impl HistoryQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("filter", self.filter.clone()),
        ]
    }
}

/// A row of the admin user table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub email: String,
    #[serde(rename = "mode")]
    pub access_level: AccessLevel,
    /// ISO 8601 registration timestamp.
    #[serde(default)]
    pub registered: String,
    /// Missing flag reads as inactive.
    #[serde(default)]
    pub active: bool,
}

/// Response of `GET /admin/users`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AdminUserList {
    #[serde(default)]
    pub users: Vec<AdminUser>,
}

/// Response of `GET /admin/users/{id}/urls`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserUrls {
    #[serde(default)]
    pub urls: Vec<ShortLink>,
}

/// Response of `POST /shorten`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ShortenResponse {
    #[serde(rename = "shortUrl", alias = "short_url")]
    pub short_url: String,
}

fn default_active() -> bool {
    true
}

fn first_page() -> u32 {
    1
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) if !id.is_empty() => Ok(id),
        serde_json::Value::Number(number) if number.is_u64() || number.is_i64() => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected non-empty string or integer id")),
    }
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            if let Some(count) = number.as_u64() {
                return Ok(count);
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= u64::MAX as f64
            {
                return Ok(float as u64);
            }
            Err(D::Error::custom("expected non-negative integer count"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
