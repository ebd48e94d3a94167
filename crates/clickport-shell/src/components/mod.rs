//! UI components for the Clickport shell.

mod fields;
mod navbar;
mod shell;

pub use fields::*;
pub use navbar::*;
pub use shell::*;
