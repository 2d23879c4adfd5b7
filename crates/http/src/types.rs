//! Wire types for the admin API

use chrono::{DateTime, Utc};
use hexadmin_core::{Product, SessionToken};
use serde::{Deserialize, Deserializer, Serialize};

/// `message` is a string on most failures and a list of strings on
/// validation failures
#[derive(Deserialize)]
#[serde(untagged)]
enum MessageField {
    Text(String),
    Lines(Vec<String>),
}

pub(crate) fn deserialize_message<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<MessageField>::deserialize(deserializer)?.and_then(|field| match field {
            MessageField::Text(text) => Some(text),
            MessageField::Lines(lines) if lines.is_empty() => None,
            MessageField::Lines(lines) => Some(lines.join(", ")),
        }),
    )
}

/// Body of a non-success response
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default, deserialize_with = "deserialize_message")]
    pub message: Option<String>,
}

/// `POST /admin/signin` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInResponse {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    /// Token expiry in milliseconds since the epoch
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub expired: Option<DateTime<Utc>>,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default, deserialize_with = "deserialize_message")]
    pub message: Option<String>,
}

/// Outcome of a sign-in call that reached the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInResult {
    Granted {
        token: SessionToken,
        message: Option<String>,
    },
    Rejected {
        message: Option<String>,
    },
}

impl From<SignInResponse> for SignInResult {
    fn from(response: SignInResponse) -> Self {
        match (response.success, response.token, response.expired) {
            (true, Some(token), Some(expired)) if !token.is_empty() => Self::Granted {
                token: SessionToken::new(token, expired),
                message: response.message,
            },
            _ => Self::Rejected {
                message: response.message,
            },
        }
    }
}

/// `POST /api/user/check` response
#[derive(Debug, Clone, Deserialize)]
pub struct CheckResponse {
    pub success: bool,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default, deserialize_with = "deserialize_message")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    pub total_pages: u32,
    pub current_page: u32,
    pub has_pre: bool,
    pub has_next: bool,
    #[serde(default)]
    pub category: String,
}

/// `GET /api/{api_path}/admin/products` response
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default, deserialize_with = "deserialize_message")]
    pub message: Option<String>,
}

const fn default_success() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn granted_sign_in_carries_token_and_expiry() {
        let response: SignInResponse = serde_json::from_value(json!({
            "success": true,
            "message": "Signed in",
            "uid": "u1",
            "token": "T",
            "expired": 1_893_456_000_000_i64
        }))
        .unwrap();

        let expected = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            SignInResult::from(response),
            SignInResult::Granted {
                token: SessionToken::new("T", expected),
                message: Some("Signed in".into()),
            }
        );
    }

    #[test]
    fn sign_in_without_token_is_rejected() {
        let response: SignInResponse = serde_json::from_value(json!({
            "success": false,
            "message": ["username is required", "password is required"]
        }))
        .unwrap();

        assert_eq!(
            SignInResult::from(response),
            SignInResult::Rejected {
                message: Some("username is required, password is required".into()),
            }
        );
    }

    #[test]
    fn error_body_tolerates_missing_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(body.message, None);
    }
}
