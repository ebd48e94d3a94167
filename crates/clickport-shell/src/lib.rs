//! Clickport shell
//!
//! A Dioxus application shell for moving data between ClickHouse and flat
//! files. It owns the visual theme, the navigation bar and client-side
//! routing; each route renders one tool page.

pub mod components;
pub mod forms;
pub mod pages;
pub mod routing;
pub mod theme;

pub use components::{Shell, ShellConfig};
pub use routing::{Location, RouteTable, ViewId};
pub use theme::{Theme, ThemeMode, ThemeOptions};
