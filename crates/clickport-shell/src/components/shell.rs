//! Shell: the composition root for theme, chrome and routing.

use dioxus::prelude::*;

use crate::routing::{Location, RouteOutlet, RouteTable, Router};
use crate::theme::{CssBaseline, Theme, ThemeProvider};

use super::Navbar;

/// Everything the shell needs, passed in explicitly at launch.
#[derive(Clone, Debug, PartialEq)]
pub struct ShellConfig {
    pub theme: Theme,
    pub routes: RouteTable,
    pub initial_location: Location,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            routes: RouteTable::standard(),
            initial_location: Location::root(),
        }
    }
}

/// Root component: theme provider, baseline styles, router, navbar and the
/// main content container.
#[component]
pub fn Shell(config: ShellConfig) -> Element {
    let theme = config.theme;
    let container_style = format!(
        "display: block; width: 100%; box-sizing: border-box; margin-left: auto; \
         margin-right: auto; padding-left: {pad}; padding-right: {pad}; max-width: {max}px; \
         margin-top: {mt}; margin-bottom: {mb}; flex: 1;",
        pad = theme.spacing(3),
        max = theme.container_max_width,
        mt = theme.spacing(4),
        mb = theme.spacing(4),
    );

    rsx! {
        ThemeProvider { theme,
            CssBaseline {}
            Router {
                routes: config.routes.clone(),
                initial: config.initial_location.clone(),
                div {
                    class: "shell",
                    style: "display: flex; flex-direction: column; min-height: 100vh;",
                    Navbar {}
                    main {
                        "data-region": "content",
                        style: "{container_style}",
                        RouteOutlet {}
                    }
                }
            }
        }
    }
}
