//! Session token persistence

use crate::error::{ConsoleError, ConsoleResult};
use crate::types::SessionToken;
use chrono::{DateTime, Utc};
use cookie::Cookie;
use cookie::time::OffsetDateTime;
use std::cell::RefCell;
use std::rc::Rc;

/// Where the session token lives between page loads
pub trait TokenStore {
    /// Token value persisted by an earlier login, if still present
    fn load(&self) -> Option<String>;

    fn save(&self, token: &SessionToken) -> ConsoleResult<()>;
}

/// In-process store used by tests and native tooling.
///
/// Clones share the same slot. Expired tokens are not returned.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<SessionToken>>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token that never expires
    #[must_use]
    pub fn with_token(value: impl Into<String>) -> Self {
        let store = Self::new();
        *store.slot.borrow_mut() = Some(SessionToken::new(value, DateTime::<Utc>::MAX_UTC));
        store
    }

    /// Last token written, regardless of expiry
    #[must_use]
    pub fn saved(&self) -> Option<SessionToken> {
        self.slot.borrow().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot
            .borrow()
            .as_ref()
            .filter(|token| token.expires_at > Utc::now())
            .map(|token| token.value.clone())
    }

    fn save(&self, token: &SessionToken) -> ConsoleResult<()> {
        *self.slot.borrow_mut() = Some(token.clone());
        Ok(())
    }
}

/// Render the `document.cookie` assignment for a session token
pub fn session_cookie(name: &str, token: &SessionToken) -> ConsoleResult<String> {
    let expires = OffsetDateTime::from_unix_timestamp(token.expires_at.timestamp())
        .map_err(|e| ConsoleError::Storage(format!("token expiry out of range: {e}")))?;

    let cookie = Cookie::build((name, token.value.as_str()))
        .path("/")
        .expires(expires)
        .build();
    Ok(cookie.to_string())
}

/// Find a cookie value in a `document.cookie` style header.
///
/// Empty values count as absent.
#[must_use]
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse(header)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn finds_named_cookie_among_others() {
        let header = "theme=dark; hexschoolToken=abc.def; lang=zh-TW";
        assert_eq!(
            find_cookie(header, "hexschoolToken").as_deref(),
            Some("abc.def")
        );
        assert_eq!(find_cookie(header, "missing"), None);
    }

    #[test]
    fn empty_cookie_value_is_absent() {
        assert_eq!(find_cookie("hexschoolToken=; theme=dark", "hexschoolToken"), None);
        assert_eq!(find_cookie("", "hexschoolToken"), None);
    }

    #[test]
    fn session_cookie_carries_expiry_and_path() {
        let expires_at = Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap();
        let token = SessionToken::new("T", expires_at);

        let rendered = session_cookie("hexschoolToken", &token).unwrap();

        assert!(rendered.starts_with("hexschoolToken=T"));
        assert!(rendered.contains("Path=/"));
        assert!(rendered.contains("Expires=Wed, 02 Jan 2030 03:04:05 GMT"));
    }

    #[test]
    fn memory_store_skips_expired_tokens() {
        let store = MemoryTokenStore::new();
        let past = Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap();
        store.save(&SessionToken::new("old", past)).unwrap();

        assert_eq!(store.load(), None);
        assert_eq!(store.saved().map(|t| t.value), Some("old".to_string()));

        let shared = store.clone();
        store
            .save(&SessionToken::new("fresh", DateTime::<Utc>::MAX_UTC))
            .unwrap();
        assert_eq!(shared.load().as_deref(), Some("fresh"));
    }
}
