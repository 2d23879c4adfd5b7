//! Console configuration

use crate::error::{ConsoleError, ConsoleResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Runtime settings for the console
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// API root, e.g. `https://ec-course-api.hexschool.io/v2`
    pub api_base_url: String,
    /// Per-account path segment used by the product endpoints
    pub api_path: String,
    /// Name of the cookie holding the session token
    pub cookie_name: String,
    /// How long the login success banner stays up before the dashboard opens
    #[serde(with = "millis")]
    pub login_settle_delay: Duration,
}

impl ConsoleConfig {
    pub const DEFAULT_API_BASE_URL: &'static str = "https://ec-course-api.hexschool.io/v2";
    pub const DEFAULT_COOKIE_NAME: &'static str = "hexschoolToken";
    pub const DEFAULT_LOGIN_SETTLE_DELAY: Duration = Duration::from_millis(1000);

    /// Check the settings before any client is built
    pub fn validate(&self) -> ConsoleResult<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConsoleError::Configuration(
                "api_base_url must not be empty".into(),
            ));
        }
        if self.api_path.contains('/') {
            return Err(ConsoleError::Configuration(format!(
                "api_path must be a single path segment, got '{}'",
                self.api_path
            )));
        }
        if self.cookie_name.is_empty()
            || self
                .cookie_name
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, ';' | '=' | ','))
        {
            return Err(ConsoleError::Configuration(format!(
                "cookie_name '{}' is not a valid cookie name",
                self.cookie_name
            )));
        }
        Ok(())
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: Self::DEFAULT_API_BASE_URL.to_string(),
            api_path: String::new(),
            cookie_name: Self::DEFAULT_COOKIE_NAME.to_string(),
            login_settle_delay: Self::DEFAULT_LOGIN_SETTLE_DELAY,
        }
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_are_valid() {
        let config = ConsoleConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cookie_name, "hexschoolToken");
        assert_eq!(config.login_settle_delay, Duration::from_secs(1));
    }

    #[test]
    fn partial_documents_fill_in_defaults() {
        let config: ConsoleConfig = serde_json::from_value(json!({
            "api_path": "tea-shop",
            "login_settle_delay": 250
        }))
        .unwrap();

        assert_eq!(config.api_path, "tea-shop");
        assert_eq!(config.api_base_url, ConsoleConfig::DEFAULT_API_BASE_URL);
        assert_eq!(config.login_settle_delay, Duration::from_millis(250));
    }

    #[test]
    fn rejects_bad_cookie_names_and_paths() {
        let config = ConsoleConfig {
            cookie_name: "bad name".into(),
            ..ConsoleConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConsoleError::Configuration(_))
        ));

        let config = ConsoleConfig {
            api_path: "a/b".into(),
            ..ConsoleConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
