//! Remote API seams implemented by the HTTP client

use crate::error::ConsoleResult;
use crate::types::{AuthorizedToken, Credential, Product, SessionToken};
use async_trait::async_trait;

/// Successful sign-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInGrant {
    pub token: SessionToken,
    /// Confirmation text from the server, if it sent one
    pub message: Option<String>,
}

/// Sign-in and token verification endpoints.
///
/// Futures are not `Send`: the console runs on the browser event loop.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn sign_in(&self, credential: &Credential) -> ConsoleResult<SignInGrant>;

    /// Succeeds only if the server still accepts `token`
    async fn verify(&self, token: &str) -> ConsoleResult<()>;
}

/// Product collection endpoint
#[async_trait(?Send)]
pub trait ProductApi {
    async fn list_products(&self, token: &AuthorizedToken) -> ConsoleResult<Vec<Product>>;
}
