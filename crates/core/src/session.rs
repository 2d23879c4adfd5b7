//! Session manager: owns the token and the authentication state machine
//!
//! ```text
//! Unknown ──start──▶ Checking ──verify ok──▶ Authenticated
//!    │                  └──verify err──▶ Unauthenticated ──login+activate──▶ Authenticated
//!    └──start (no token)──────────────────▶ Unauthenticated
//! ```

use crate::api::{AuthApi, SignInGrant};
use crate::error::{ConsoleError, ConsoleResult};
use crate::store::TokenStore;
use crate::types::{AuthorizedToken, Credential, SessionState};
use std::cell::{Cell, RefCell};

pub struct SessionManager<A, S> {
    api: A,
    store: S,
    state: Cell<SessionState>,
    token: RefCell<Option<String>>,
    pending: RefCell<Option<String>>,
}

impl<A: AuthApi, S: TokenStore> SessionManager<A, S> {
    pub const fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            state: Cell::new(SessionState::Unknown),
            token: RefCell::new(None),
            pending: RefCell::new(None),
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    /// Read the persisted token and pick the first state.
    ///
    /// Without a token the session is `Unauthenticated` straight away and
    /// no request is made. Only the first call has any effect.
    pub fn start(&self) -> SessionState {
        if self.state() != SessionState::Unknown {
            return self.state();
        }

        match self.store.load() {
            Some(token) => {
                *self.token.borrow_mut() = Some(token);
                self.transition(SessionState::Checking);
            }
            None => {
                tracing::debug!("No persisted session token");
                self.transition(SessionState::Unauthenticated);
            }
        }
        self.state()
    }

    /// Validate the persisted token against the server.
    ///
    /// Any failure, network errors included, downgrades the session to
    /// `Unauthenticated`. Outside `Checking` this returns the current state.
    pub async fn verify(&self) -> SessionState {
        if self.state() != SessionState::Checking {
            return self.state();
        }

        let Some(token) = self.token.borrow().clone() else {
            self.transition(SessionState::Unauthenticated);
            return self.state();
        };

        match self.api.verify(&token).await {
            Ok(()) => self.transition(SessionState::Authenticated),
            Err(e) => {
                if e.is_auth_failure() {
                    tracing::warn!(error = %e, "Persisted session rejected");
                } else {
                    tracing::warn!(error = %e, "Session check failed");
                }
                self.token.borrow_mut().take();
                self.transition(SessionState::Unauthenticated);
            }
        }
        self.state()
    }

    /// Exchange a credential for a token and persist it.
    ///
    /// The session stays `Unauthenticated` until [`activate`](Self::activate)
    /// so the success banner can be shown first.
    pub async fn login(&self, credential: &Credential) -> ConsoleResult<SignInGrant> {
        if !credential.is_complete() {
            return Err(ConsoleError::Validation(
                "Email and password are required".into(),
            ));
        }
        if self.state() == SessionState::Unknown {
            self.transition(SessionState::Unauthenticated);
        }

        tracing::info!(username = %credential.username, "Signing in");
        let grant = self.api.sign_in(credential).await.inspect_err(|e| {
            tracing::warn!(error = %e, "Sign-in failed");
        })?;

        // A failed cookie write only costs the session on the next page load
        if let Err(e) = self.store.save(&grant.token) {
            tracing::warn!(error = %e, "Could not persist session token");
        }
        *self.pending.borrow_mut() = Some(grant.token.value.clone());
        tracing::info!(expires_at = %grant.token.expires_at, "Sign-in accepted");

        Ok(grant)
    }

    /// Promote a granted login to `Authenticated`
    pub fn activate(&self) -> SessionState {
        if let Some(token) = self.pending.borrow_mut().take() {
            *self.token.borrow_mut() = Some(token);
            self.transition(SessionState::Authenticated);
        }
        self.state()
    }

    /// Token for protected calls, only while authenticated
    #[must_use]
    pub fn authorized(&self) -> Option<AuthorizedToken> {
        if self.state() != SessionState::Authenticated {
            return None;
        }
        self.token.borrow().as_deref().map(AuthorizedToken::new)
    }

    fn transition(&self, next: SessionState) {
        let previous = self.state.replace(next);
        if previous != next {
            tracing::info!(from = %previous, to = %next, "Session state changed");
        }
    }
}
