//! Build-time console configuration

use hexadmin_core::{ConsoleConfig, ConsoleResult};

/// Endpoint overrides captured when the bundle was compiled
pub struct BuildConfig;

impl BuildConfig {
    pub const API_BASE_URL: Option<&'static str> = option_env!("HEXADMIN_API_BASE_URL");
    pub const API_PATH: Option<&'static str> = option_env!("HEXADMIN_API_PATH");
    pub const COOKIE_NAME: Option<&'static str> = option_env!("HEXADMIN_COOKIE_NAME");

    /// Resolve and validate the console settings for this build
    pub fn console_config() -> ConsoleResult<ConsoleConfig> {
        let config = with_overrides(
            ConsoleConfig::default(),
            Self::API_BASE_URL,
            Self::API_PATH,
            Self::COOKIE_NAME,
        );
        config.validate()?;
        Ok(config)
    }
}

fn with_overrides(
    mut config: ConsoleConfig,
    api_base_url: Option<&str>,
    api_path: Option<&str>,
    cookie_name: Option<&str>,
) -> ConsoleConfig {
    // Blank values are treated as unset
    fn present(value: Option<&str>) -> Option<&str> {
        value.map(str::trim).filter(|v| !v.is_empty())
    }

    if let Some(url) = present(api_base_url) {
        config.api_base_url = url.to_string();
    }
    if let Some(path) = present(api_path) {
        config.api_path = path.to_string();
    }
    if let Some(name) = present(cookie_name) {
        config.cookie_name = name.to_string();
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_defaults() {
        let config = with_overrides(
            ConsoleConfig::default(),
            Some("https://api.example/v2"),
            Some("tea-shop"),
            Some("adminToken"),
        );

        assert_eq!(config.api_base_url, "https://api.example/v2");
        assert_eq!(config.api_path, "tea-shop");
        assert_eq!(config.cookie_name, "adminToken");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_overrides_keep_defaults() {
        let config = with_overrides(ConsoleConfig::default(), Some("  "), None, Some(""));

        assert_eq!(config.api_base_url, ConsoleConfig::DEFAULT_API_BASE_URL);
        assert_eq!(config.cookie_name, ConsoleConfig::DEFAULT_COOKIE_NAME);
    }

    #[test]
    fn overrides_are_trimmed() {
        let base_url = String::from("  https://api.example/v2 ");
        let config = with_overrides(
            ConsoleConfig::default(),
            Some(&base_url),
            Some(" tea-shop "),
            None,
        );

        assert_eq!(config.api_base_url, "https://api.example/v2");
        assert_eq!(config.api_path, "tea-shop");
    }
}
