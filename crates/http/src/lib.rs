//! Hexadmin HTTP client
//!
//! Typed clients for the product admin API. The public client signs in;
//! authenticating it with a session token unlocks the token check and the
//! product endpoints. Both run natively and in the browser.

pub mod client;
pub mod types;

pub use client::error::ClientError;
pub use client::{AuthenticatedAdminClient, PublicAdminClient, TypedClientBuilder};
