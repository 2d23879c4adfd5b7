//! Hexadmin browser console
//!
//! Yew front end for the product admin API: a login form backed by a
//! cookie-stored session token and a two-pane product browser.

pub mod components;
pub mod config;
pub mod console;
pub mod cookie_store;
pub mod logging;

pub use components::ConsoleApp;
