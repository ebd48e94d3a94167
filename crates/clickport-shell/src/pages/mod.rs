//! Page views selected by the router.

mod clickhouse_to_file;
mod file_to_clickhouse;
mod home;
mod join_tables;

pub use clickhouse_to_file::ClickHouseToFile;
pub use file_to_clickhouse::FileToClickHouse;
pub use home::Home;
pub use join_tables::JoinTables;

use dioxus::prelude::*;

use crate::forms::FormError;
use crate::routing::ViewId;
use crate::theme::use_theme;

/// Renders the page bound to `view`.
#[component]
pub fn PageView(view: ViewId) -> Element {
    match view {
        ViewId::Home => rsx! { Home {} },
        ViewId::ClickHouseToFile => rsx! { ClickHouseToFile {} },
        ViewId::FileToClickHouse => rsx! { FileToClickHouse {} },
        ViewId::JoinTables => rsx! { JoinTables {} },
    }
}

/// One-line description of what a tool page does.
pub fn description(view: ViewId) -> &'static str {
    match view {
        ViewId::Home => "Move data between ClickHouse tables and flat files.",
        ViewId::ClickHouseToFile => {
            "Export selected columns of a ClickHouse table to a delimited flat file."
        }
        ViewId::FileToClickHouse => {
            "Load a delimited flat file into a ClickHouse table, creating it if needed."
        }
        ViewId::JoinTables => {
            "Join two ClickHouse tables and export the selected columns to a flat file."
        }
    }
}

/// Page root: heading in the primary color, description, then content.
#[component]
fn PageFrame(view: ViewId, children: Element) -> Element {
    let theme = use_theme();
    let heading_style = format!(
        "margin: 0 0 {}; color: {}; font-size: 2.125rem; font-weight: 400; line-height: 1.235;",
        theme.spacing(1),
        theme.palette.primary.main
    );

    rsx! {
        section {
            "data-view": "{view.slug()}",
            h2 { style: "{heading_style}", "{view.label()}" }
            p {
                style: "margin: 0 0 {theme.spacing(3)}; color: {theme.palette.text.secondary};",
                "{description(view)}"
            }
            {children}
        }
    }
}

/// Splits a validation result into the props of `FormSummary`.
fn summary_parts<P>(
    result: Result<P, Vec<FormError>>,
    describe: impl FnOnce(&P) -> (Vec<(String, String)>, Vec<String>),
) -> (Vec<String>, Vec<(String, String)>, Vec<String>) {
    match result {
        Ok(plan) => {
            let (rows, statements) = describe(&plan);
            (Vec::new(), rows, statements)
        }
        Err(errors) => (
            errors.iter().map(ToString::to_string).collect(),
            Vec::new(),
            Vec::new(),
        ),
    }
}
