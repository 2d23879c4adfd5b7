//! Session token persisted in `document.cookie`

use hexadmin_core::store::{find_cookie, session_cookie};
use hexadmin_core::{ConsoleError, ConsoleResult, SessionToken, TokenStore};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Token store backed by a path-wide browser cookie
#[derive(Debug, Clone)]
pub struct CookieTokenStore {
    name: String,
}

impl CookieTokenStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn document() -> Option<HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()
    }
}

impl TokenStore for CookieTokenStore {
    fn load(&self) -> Option<String> {
        let header = Self::document()?.cookie().ok()?;
        find_cookie(&header, &self.name)
    }

    fn save(&self, token: &SessionToken) -> ConsoleResult<()> {
        let cookie = session_cookie(&self.name, token)?;
        let document = Self::document()
            .ok_or_else(|| ConsoleError::Storage("document is not available".into()))?;
        document
            .set_cookie(&cookie)
            .map_err(|err| ConsoleError::Storage(format!("failed to write cookie: {err:?}")))?;
        tracing::debug!(cookie = %self.name, "Session cookie written");
        Ok(())
    }
}
