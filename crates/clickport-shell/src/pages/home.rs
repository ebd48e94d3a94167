//! Landing page with one card per tool.

use dioxus::prelude::*;

use super::{description, PageFrame};
use crate::routing::{use_navigator, use_routes, ViewId};
use crate::theme::use_theme;

const TOOLS: [ViewId; 3] = [
    ViewId::ClickHouseToFile,
    ViewId::FileToClickHouse,
    ViewId::JoinTables,
];

#[component]
pub fn Home() -> Element {
    let theme = use_theme();
    let mut navigator = use_navigator();
    let routes = use_routes();

    let card_style = format!(
        "display: flex; flex-direction: column; gap: {}; padding: {}; \
         background-color: {}; border: 1px solid {}; border-radius: 4px;",
        theme.spacing(1),
        theme.spacing(2),
        theme.palette.background.paper,
        theme.palette.divider
    );
    let button_style = format!(
        "align-self: flex-start; padding: 6px 16px; border: none; border-radius: 4px; \
         background-color: {}; color: {}; font-weight: 500; text-transform: uppercase; cursor: pointer;",
        theme.palette.primary.main, theme.palette.primary.contrast_text
    );
    let grid_style = format!(
        "display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: {};",
        theme.spacing(3)
    );

    rsx! {
        PageFrame { view: ViewId::Home,
            div { style: "{grid_style}",
                for tool in TOOLS {
                    if let Some(path) = routes.path_for(tool).map(str::to_string) {
                        article {
                            key: "{tool.slug()}",
                            "data-tool": "{tool.slug()}",
                            style: "{card_style}",
                            h3 { style: "margin: 0; font-weight: 500;", "{tool.label()}" }
                            p { style: "margin: 0; flex: 1;", "{description(tool)}" }
                            button {
                                style: "{button_style}",
                                onclick: move |_| navigator.push(&path),
                                "Open"
                            }
                        }
                    }
                }
            }
        }
    }
}
