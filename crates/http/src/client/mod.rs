//! Hexadmin API clients

pub mod auth;
pub mod error;
pub mod gateway;
pub mod products;
pub mod typed;

pub use error::ClientError;
pub use typed::{AuthenticatedAdminClient, PublicAdminClient, TypedClientBuilder};
