//! Product repository

use crate::api::ProductApi;
use crate::error::ConsoleResult;
use crate::types::{AuthorizedToken, Product};

/// Fetches the product collection.
///
/// No caching: every call goes to the server and the caller replaces
/// whatever it showed before.
pub struct ProductRepository<P> {
    api: P,
}

impl<P: ProductApi> ProductRepository<P> {
    pub const fn new(api: P) -> Self {
        Self { api }
    }

    pub async fn fetch_all(&self, token: &AuthorizedToken) -> ConsoleResult<Vec<Product>> {
        tracing::debug!("Fetching products");
        let products = self.api.list_products(token).await.inspect_err(|e| {
            tracing::warn!(error = %e, "Product fetch failed");
        })?;
        tracing::info!(count = products.len(), "Products loaded");
        Ok(products)
    }
}
