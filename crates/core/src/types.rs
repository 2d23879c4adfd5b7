//! Domain types shared by the session manager, repository and views

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Login form contents, also the sign-in request body
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Both fields are required before a sign-in request is sent
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }
}

// Keeps the password out of logs and panic messages
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Token issued by the server on sign-in
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl SessionToken {
    #[must_use]
    pub fn new(value: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            expires_at,
        }
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionToken")
            .field("value", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Proof that the session is authenticated.
///
/// Only [`SessionManager::authorized`](crate::SessionManager::authorized)
/// hands these out, so holding one means the product API may be called.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthorizedToken(String);

impl AuthorizedToken {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthorizedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthorizedToken(<redacted>)")
    }
}

/// Session manager states
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SessionState {
    #[default]
    Unknown,
    Checking,
    Authenticated,
    Unauthenticated,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Checking => "checking",
            Self::Authenticated => "authenticated",
            Self::Unauthenticated => "unauthenticated",
        };
        f.write_str(name)
    }
}

/// Product record as served by the admin API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    pub origin_price: f64,
    pub price: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(deserialize_with = "deserialize_flag")]
    pub is_enabled: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
    #[serde(rename = "imagesUrl", default, deserialize_with = "deserialize_image_list")]
    pub images_url: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(i64),
}

/// The API stores `is_enabled` as `0`/`1` but older records carry booleans
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => value,
        Flag::Int(value) => value != 0,
    })
}

/// `imagesUrl` may be null or contain empty placeholders left by the editor
fn deserialize_image_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let urls = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(urls.into_iter().filter(|url| !url.trim().is_empty()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_accepts_numeric_enabled_flag() {
        let product: Product = serde_json::from_value(json!({
            "id": "-Nabc",
            "title": "Matcha latte",
            "category": "drinks",
            "origin_price": 150,
            "price": 120,
            "unit": "cup",
            "is_enabled": 1,
            "description": "Hot or iced",
            "content": "350ml",
            "imageUrl": "https://img.example/main.png",
            "imagesUrl": ["https://img.example/a.png", "", "https://img.example/b.png"]
        }))
        .unwrap();

        assert!(product.is_enabled);
        assert!((product.origin_price - 150.0).abs() < f64::EPSILON);
        assert_eq!(product.image_url, "https://img.example/main.png");
        assert_eq!(
            product.images_url,
            vec!["https://img.example/a.png", "https://img.example/b.png"]
        );
    }

    #[test]
    fn product_tolerates_missing_optional_fields() {
        let product: Product = serde_json::from_value(json!({
            "id": "p2",
            "title": "Scone",
            "origin_price": 80.5,
            "price": 60,
            "is_enabled": false,
            "imagesUrl": null
        }))
        .unwrap();

        assert!(!product.is_enabled);
        assert!(product.category.is_empty());
        assert!(product.images_url.is_empty());
    }

    #[test]
    fn credential_debug_hides_password() {
        let credential = Credential::new("a@b.com", "hunter2");
        let rendered = format!("{credential:?}");
        assert!(rendered.contains("a@b.com"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn credential_requires_both_fields() {
        assert!(Credential::new("a@b.com", "x").is_complete());
        assert!(!Credential::new("  ", "x").is_complete());
        assert!(!Credential::new("a@b.com", "").is_complete());
    }
}
