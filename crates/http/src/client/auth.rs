//! Sign-in and session check endpoints

use super::{
    error::ClientError,
    typed::{AuthenticatedAdminClient, PublicAdminClient},
};
use crate::types::{CheckResponse, SignInResponse, SignInResult};
use hexadmin_core::Credential;
use reqwest::Method;

impl PublicAdminClient {
    /// Exchange a credential for a session token (public endpoint)
    pub async fn admin_signin(&self, credential: &Credential) -> Result<SignInResult, ClientError> {
        let request = self.request(Method::POST, "/admin/signin").json(credential);
        let response: SignInResponse = self.execute(request).await?;
        Ok(response.into())
    }
}

impl AuthenticatedAdminClient {
    /// Ask the server whether the token is still valid.
    ///
    /// A 2xx answer with `success: false` is reported as
    /// [`ClientError::Rejected`].
    pub async fn user_check(&self) -> Result<CheckResponse, ClientError> {
        let request = self.request(Method::POST, "/api/user/check");
        let response: CheckResponse = self.execute(request).await?;
        if response.success {
            Ok(response)
        } else {
            Err(ClientError::Rejected {
                message: response.message,
            })
        }
    }
}
