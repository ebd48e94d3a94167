//! Application bar with history buttons and one link per route.

use dioxus::prelude::*;

use crate::routing::{use_navigator, use_routes};
use crate::theme::use_theme;

const APP_TITLE: &str = "ClickHouse Data Ingestion";

#[component]
pub fn Navbar() -> Element {
    let theme = use_theme();
    let mut navigator = use_navigator();
    let routes = use_routes();

    let location = navigator.location();
    let can_go_back = navigator.can_go_back();
    let can_go_forward = navigator.can_go_forward();

    let primary = theme.palette.primary;
    let bar_style = format!(
        "display: flex; align-items: center; gap: {gap}; min-height: 64px; padding: 0 {pad}; \
         background-color: {bg}; color: {fg}; box-shadow: 0px 2px 4px -1px rgba(0,0,0,0.2), \
         0px 4px 5px 0px rgba(0,0,0,0.14), 0px 1px 10px 0px rgba(0,0,0,0.12);",
        gap = theme.spacing(2),
        pad = theme.spacing(3),
        bg = primary.main,
        fg = primary.contrast_text,
    );
    let history_button_style = format!(
        "background: transparent; border: none; color: {}; font-size: 1.25rem; cursor: pointer;",
        primary.contrast_text
    );

    rsx! {
        header {
            "data-region": "navbar",
            style: "{bar_style}",

            div {
                class: "navbar-history",
                style: "display: flex; gap: 4px;",
                button {
                    style: "{history_button_style}",
                    title: "Back",
                    disabled: !can_go_back,
                    onclick: move |_| navigator.back(),
                    "\u{2190}"
                }
                button {
                    style: "{history_button_style}",
                    title: "Forward",
                    disabled: !can_go_forward,
                    onclick: move |_| navigator.forward(),
                    "\u{2192}"
                }
            }

            h1 {
                style: "margin: 0; flex: 1; font-size: 1.25rem; font-weight: 500; line-height: 1.6;",
                "{APP_TITLE}"
            }

            nav {
                style: "display: flex; gap: {theme.spacing(1)};",
                for route in routes.iter() {
                    {
                        let path = route.path.clone();
                        let is_active = location.pathname() == path;
                        let background = if is_active {
                            primary.dark.to_string()
                        } else {
                            "transparent".to_string()
                        };
                        let link_style = format!(
                            "background-color: {}; color: {}; border: none; border-radius: 4px; \
                             padding: 6px 8px; font-size: 0.875rem; font-weight: 500; \
                             text-transform: uppercase; cursor: pointer;",
                            background, primary.contrast_text
                        );
                        rsx! {
                            button {
                                key: "{route.path}",
                                "data-link": "{route.view.slug()}",
                                "data-active": "{is_active}",
                                style: "{link_style}",
                                onclick: move |_| navigator.push(&path),
                                "{route.view.label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}
