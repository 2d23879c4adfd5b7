//! Console state shared across the component tree

mod context;
mod runtime;

pub use context::{ConsoleHandle, ConsoleProvider, ConsoleProviderProps, use_console};
pub use runtime::{BrowserController, ConsoleRuntime};
