//! Effect controller tying the session manager and repository to the
//! console reducer

use crate::api::{AuthApi, ProductApi};
use crate::console::{ConsoleAction, Effect};
use crate::error::ConsoleError;
use crate::products::ProductRepository;
use crate::session::SessionManager;
use crate::store::TokenStore;
#[cfg(test)]
use crate::console::ConsoleState;
#[cfg(test)]
use std::collections::VecDeque;

/// Banner text when the server confirms a login without a message
pub const LOGIN_SUCCEEDED: &str = "Login successful";

pub struct ConsoleController<A, P, S> {
    session: SessionManager<A, S>,
    products: ProductRepository<P>,
}

impl<A, P, S> ConsoleController<A, P, S>
where
    A: AuthApi,
    P: ProductApi,
    S: TokenStore,
{
    pub const fn new(session: SessionManager<A, S>, products: ProductRepository<P>) -> Self {
        Self { session, products }
    }

    pub const fn session(&self) -> &SessionManager<A, S> {
        &self.session
    }

    /// First action to feed the reducer: the session state after reading
    /// the persisted token
    pub fn start(&self) -> ConsoleAction {
        ConsoleAction::SessionChanged(self.session.start())
    }

    /// Carry out one effect and report its outcome.
    ///
    /// Delays are the caller's business: `ActivateSession` activates
    /// immediately when performed.
    pub async fn perform(&self, effect: Effect) -> ConsoleAction {
        match effect {
            Effect::VerifySession => ConsoleAction::SessionChanged(self.session.verify().await),
            Effect::FetchProducts => {
                let result = match self.session.authorized() {
                    Some(token) => self.products.fetch_all(&token).await,
                    None => Err(ConsoleError::NotAuthenticated),
                };
                match result {
                    Ok(products) => ConsoleAction::ProductsLoaded(products),
                    Err(e) => ConsoleAction::ProductsFailed(e.to_string()),
                }
            }
            Effect::SignIn(credential) => match self.session.login(&credential).await {
                Ok(grant) => ConsoleAction::LoginSucceeded(
                    grant.message.unwrap_or_else(|| LOGIN_SUCCEEDED.to_string()),
                ),
                Err(e) => ConsoleAction::LoginFailed(e.user_message()),
            },
            Effect::ActivateSession { .. } => {
                ConsoleAction::SessionChanged(self.session.activate())
            }
        }
    }

    /// Apply `action` and perform every resulting effect until none are
    /// left, ignoring delays. Returns the effects performed, in order.
    #[cfg(test)]
    pub async fn run_to_idle(&self, state: &mut ConsoleState, action: ConsoleAction) -> Vec<Effect> {
        let mut performed = Vec::new();
        let mut queue = VecDeque::from([action]);
        while let Some(action) = queue.pop_front() {
            for effect in state.apply(action) {
                performed.push(effect.clone());
                queue.push_back(self.perform(effect).await);
            }
        }
        performed
    }
}
