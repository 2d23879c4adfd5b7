//! Product endpoints

use super::{error::ClientError, typed::AuthenticatedAdminClient};
use crate::types::ProductsResponse;
use reqwest::Method;

impl AuthenticatedAdminClient {
    /// Fetch the admin product listing for this account
    pub async fn admin_products(&self) -> Result<ProductsResponse, ClientError> {
        if self.api_path().is_empty() {
            return Err(ClientError::Configuration(
                "api_path is required for product endpoints".into(),
            ));
        }

        let path = format!("/api/{}/admin/products", self.api_path());
        let response: ProductsResponse = self.execute(self.request(Method::GET, &path)).await?;
        if response.success {
            Ok(response)
        } else {
            Err(ClientError::Rejected {
                message: response.message,
            })
        }
    }
}
