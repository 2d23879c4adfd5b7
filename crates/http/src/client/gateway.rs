//! Core API traits backed by the HTTP client

use super::typed::PublicAdminClient;
use crate::types::SignInResult;
use async_trait::async_trait;
use hexadmin_core::{
    AuthApi, AuthorizedToken, ConsoleError, ConsoleResult, Credential, Product, ProductApi,
    SignInGrant,
};

#[async_trait(?Send)]
impl AuthApi for PublicAdminClient {
    async fn sign_in(&self, credential: &Credential) -> ConsoleResult<SignInGrant> {
        match self.admin_signin(credential).await? {
            SignInResult::Granted { token, message } => Ok(SignInGrant { token, message }),
            SignInResult::Rejected { message } => Err(ConsoleError::Unauthorized { message }),
        }
    }

    async fn verify(&self, token: &str) -> ConsoleResult<()> {
        self.with_token(token).user_check().await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl ProductApi for PublicAdminClient {
    async fn list_products(&self, token: &AuthorizedToken) -> ConsoleResult<Vec<Product>> {
        let response = self.with_token(token.as_str()).admin_products().await?;
        Ok(response.products)
    }
}
