//! Console view state
//!
//! [`ConsoleState::apply`] is a reducer: it updates the state for an action
//! and returns the side effects the runtime must perform. Effects are run
//! by [`ConsoleController`](crate::ConsoleController) and feed their
//! outcome back in as further actions.

use crate::config::ConsoleConfig;
use crate::types::{Credential, Product, SessionState};
use std::time::Duration;

/// Which of the three top-level views to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleView {
    Loading,
    Dashboard,
    Login,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Outcome message of the last login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == BannerKind::Error
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    Username,
    Password,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleAction {
    SessionChanged(SessionState),
    RefreshProducts,
    ProductsLoaded(Vec<Product>),
    ProductsFailed(String),
    /// Row selection by product id
    SelectProduct(String),
    EditCredential(CredentialField, String),
    SubmitLogin,
    LoginSucceeded(String),
    LoginFailed(String),
}

/// Work requested by the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    VerifySession,
    FetchProducts,
    SignIn(Credential),
    /// Promote the granted login once `after` has elapsed
    ActivateSession { after: Duration },
}

impl Effect {
    /// Delay the runtime must wait before performing this effect
    #[must_use]
    pub const fn delay(&self) -> Option<Duration> {
        match self {
            Self::ActivateSession { after } => Some(*after),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleState {
    pub session: SessionState,
    pub products: Vec<Product>,
    pub products_loading: bool,
    pub products_error: Option<String>,
    /// Always a member of `products`, matched by id
    pub selected: Option<Product>,
    pub credential: Credential,
    pub submitting: bool,
    pub banner: Option<Banner>,
    login_settle_delay: Duration,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new(&ConsoleConfig::default())
    }
}

impl ConsoleState {
    #[must_use]
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            session: SessionState::Unknown,
            products: Vec::new(),
            products_loading: false,
            products_error: None,
            selected: None,
            credential: Credential::default(),
            submitting: false,
            banner: None,
            login_settle_delay: config.login_settle_delay,
        }
    }

    /// Spinner while the session is unresolved, dashboard once
    /// authenticated, login form otherwise
    #[must_use]
    pub const fn view(&self) -> ConsoleView {
        match self.session {
            SessionState::Unknown | SessionState::Checking => ConsoleView::Loading,
            SessionState::Authenticated => ConsoleView::Dashboard,
            SessionState::Unauthenticated => ConsoleView::Login,
        }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self.session, SessionState::Authenticated)
    }

    pub fn apply(&mut self, action: ConsoleAction) -> Vec<Effect> {
        match action {
            ConsoleAction::SessionChanged(next) => self.on_session_changed(next),
            ConsoleAction::RefreshProducts => {
                if self.is_authenticated() && !self.products_loading {
                    self.request_products()
                } else {
                    Vec::new()
                }
            }
            ConsoleAction::ProductsLoaded(products) => {
                if self.is_authenticated() {
                    self.selected = self
                        .selected
                        .take()
                        .and_then(|current| products.iter().find(|p| p.id == current.id).cloned());
                    self.products = products;
                    self.products_error = None;
                }
                self.products_loading = false;
                Vec::new()
            }
            ConsoleAction::ProductsFailed(message) => {
                self.products_loading = false;
                if self.is_authenticated() {
                    self.products_error = Some(message);
                }
                Vec::new()
            }
            ConsoleAction::SelectProduct(id) => {
                self.selected = self.products.iter().find(|p| p.id == id).cloned();
                Vec::new()
            }
            ConsoleAction::EditCredential(field, value) => {
                match field {
                    CredentialField::Username => self.credential.username = value,
                    CredentialField::Password => self.credential.password = value,
                }
                Vec::new()
            }
            ConsoleAction::SubmitLogin => {
                if self.submitting || self.session != SessionState::Unauthenticated {
                    return Vec::new();
                }
                self.submitting = true;
                self.banner = None;
                vec![Effect::SignIn(std::mem::take(&mut self.credential))]
            }
            ConsoleAction::LoginSucceeded(message) => {
                self.submitting = false;
                self.banner = Some(Banner::success(message));
                vec![Effect::ActivateSession {
                    after: self.login_settle_delay,
                }]
            }
            ConsoleAction::LoginFailed(message) => {
                self.submitting = false;
                self.banner = Some(Banner::error(message));
                Vec::new()
            }
        }
    }

    fn on_session_changed(&mut self, next: SessionState) -> Vec<Effect> {
        let previous = std::mem::replace(&mut self.session, next);
        if previous == next {
            return Vec::new();
        }

        match next {
            SessionState::Checking => vec![Effect::VerifySession],
            SessionState::Authenticated => {
                self.banner = None;
                self.request_products()
            }
            SessionState::Unknown | SessionState::Unauthenticated => {
                self.products.clear();
                self.selected = None;
                self.products_loading = false;
                self.products_error = None;
                Vec::new()
            }
        }
    }

    fn request_products(&mut self) -> Vec<Effect> {
        self.products_loading = true;
        self.products_error = None;
        vec![Effect::FetchProducts]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::product;

    fn authenticated_with(products: Vec<Product>) -> ConsoleState {
        let mut state = ConsoleState::default();
        state.apply(ConsoleAction::SessionChanged(SessionState::Authenticated));
        state.apply(ConsoleAction::ProductsLoaded(products));
        state
    }

    #[test]
    fn view_follows_session_state() {
        let mut state = ConsoleState::default();
        assert_eq!(state.view(), ConsoleView::Loading);

        state.apply(ConsoleAction::SessionChanged(SessionState::Checking));
        assert_eq!(state.view(), ConsoleView::Loading);

        state.apply(ConsoleAction::SessionChanged(SessionState::Unauthenticated));
        assert_eq!(state.view(), ConsoleView::Login);

        state.apply(ConsoleAction::SessionChanged(SessionState::Authenticated));
        assert_eq!(state.view(), ConsoleView::Dashboard);
    }

    #[test]
    fn checking_requests_verification() {
        let mut state = ConsoleState::default();
        let effects = state.apply(ConsoleAction::SessionChanged(SessionState::Checking));
        assert_eq!(effects, vec![Effect::VerifySession]);
    }

    #[test]
    fn authentication_fetches_products_once() {
        let mut state = ConsoleState::default();
        let effects = state.apply(ConsoleAction::SessionChanged(SessionState::Authenticated));
        assert_eq!(effects, vec![Effect::FetchProducts]);
        assert!(state.products_loading);

        let repeated = state.apply(ConsoleAction::SessionChanged(SessionState::Authenticated));
        assert!(repeated.is_empty());
    }

    #[test]
    fn products_are_ignored_without_a_session() {
        let mut state = ConsoleState::default();
        state.apply(ConsoleAction::SessionChanged(SessionState::Unauthenticated));
        state.apply(ConsoleAction::ProductsLoaded(vec![product("a")]));
        assert!(state.products.is_empty());
    }

    #[test]
    fn selecting_rows_replaces_the_detail() {
        let mut state = authenticated_with(vec![product("a"), product("b")]);

        state.apply(ConsoleAction::SelectProduct("a".into()));
        assert_eq!(state.selected, Some(product("a")));

        state.apply(ConsoleAction::SelectProduct("b".into()));
        assert_eq!(state.selected, Some(product("b")));

        state.apply(ConsoleAction::SelectProduct("zzz".into()));
        assert_eq!(state.selected, None);
    }

    #[test]
    fn refresh_drops_selection_missing_from_new_list() {
        let mut state = authenticated_with(vec![product("a"), product("b")]);
        state.apply(ConsoleAction::SelectProduct("b".into()));

        state.apply(ConsoleAction::RefreshProducts);
        state.apply(ConsoleAction::ProductsLoaded(vec![product("a"), product("c")]));

        assert_eq!(state.selected, None);
    }

    #[test]
    fn refresh_rebinds_selection_to_new_record() {
        let mut state = authenticated_with(vec![product("a")]);
        state.apply(ConsoleAction::SelectProduct("a".into()));

        let mut updated = product("a");
        updated.price = 42.0;
        state.apply(ConsoleAction::RefreshProducts);
        state.apply(ConsoleAction::ProductsLoaded(vec![updated.clone()]));

        assert_eq!(state.selected, Some(updated));
    }

    #[test]
    fn fetch_failure_is_visible_and_retryable() {
        let mut state = ConsoleState::default();
        state.apply(ConsoleAction::SessionChanged(SessionState::Authenticated));
        state.apply(ConsoleAction::ProductsFailed("Unknown error".into()));

        assert_eq!(state.products_error.as_deref(), Some("Unknown error"));
        assert!(!state.products_loading);

        let effects = state.apply(ConsoleAction::RefreshProducts);
        assert_eq!(effects, vec![Effect::FetchProducts]);
        assert_eq!(state.products_error, None);
    }

    #[test]
    fn submit_moves_credential_into_effect() {
        let mut state = ConsoleState::default();
        state.apply(ConsoleAction::SessionChanged(SessionState::Unauthenticated));
        state.apply(ConsoleAction::EditCredential(CredentialField::Username, "a@b.com".into()));
        state.apply(ConsoleAction::EditCredential(CredentialField::Password, "x".into()));

        let effects = state.apply(ConsoleAction::SubmitLogin);

        assert_eq!(effects, vec![Effect::SignIn(Credential::new("a@b.com", "x"))]);
        assert!(state.submitting);
        assert_eq!(state.credential, Credential::default());
    }

    #[test]
    fn duplicate_submit_is_ignored_while_in_flight() {
        let mut state = ConsoleState::default();
        state.apply(ConsoleAction::SessionChanged(SessionState::Unauthenticated));
        state.apply(ConsoleAction::SubmitLogin);

        assert!(state.apply(ConsoleAction::SubmitLogin).is_empty());
    }

    #[test]
    fn login_success_schedules_activation() {
        let mut state = ConsoleState::new(&ConsoleConfig {
            login_settle_delay: Duration::from_millis(1000),
            ..ConsoleConfig::default()
        });
        state.apply(ConsoleAction::SessionChanged(SessionState::Unauthenticated));
        state.apply(ConsoleAction::SubmitLogin);

        let effects = state.apply(ConsoleAction::LoginSucceeded("Signed in".into()));

        assert_eq!(
            effects,
            vec![Effect::ActivateSession {
                after: Duration::from_secs(1)
            }]
        );
        assert_eq!(effects[0].delay(), Some(Duration::from_secs(1)));
        assert!(!state.submitting);
        assert_eq!(state.banner, Some(Banner::success("Signed in")));
        assert_eq!(state.view(), ConsoleView::Login);
    }

    #[test]
    fn login_failure_shows_error_and_reenables_submit() {
        let mut state = ConsoleState::default();
        state.apply(ConsoleAction::SessionChanged(SessionState::Unauthenticated));
        state.apply(ConsoleAction::SubmitLogin);

        let effects = state.apply(ConsoleAction::LoginFailed("invalid password".into()));

        assert!(effects.is_empty());
        assert!(!state.submitting);
        assert!(state.banner.as_ref().is_some_and(Banner::is_error));
        assert_eq!(state.view(), ConsoleView::Login);
    }
}
