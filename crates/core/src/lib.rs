//! Hexadmin core types and state machines
//!
//! Everything here is platform agnostic: the browser frontend and the
//! native tests drive the same session manager, product repository and
//! console view state through the traits in [`api`] and [`store`].

pub mod api;
pub mod config;
pub mod console;
pub mod controller;
pub mod error;
pub mod products;
pub mod session;
pub mod store;
pub mod task;
pub mod types;

#[cfg(test)]
mod testing;

pub use api::{AuthApi, ProductApi, SignInGrant};
pub use config::ConsoleConfig;
pub use console::{Banner, BannerKind, ConsoleAction, ConsoleState, ConsoleView, CredentialField, Effect};
pub use controller::ConsoleController;
pub use error::{ConsoleError, ConsoleResult, UNKNOWN_ERROR};
pub use products::ProductRepository;
pub use session::SessionManager;
pub use store::{MemoryTokenStore, TokenStore};
pub use task::{TaskAborted, TaskSet};
pub use types::{AuthorizedToken, Credential, Product, SessionState, SessionToken};
