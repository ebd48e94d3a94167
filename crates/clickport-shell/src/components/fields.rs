//! Form building blocks shared by the tool pages.

use dioxus::prelude::*;

use crate::forms::{ConnectionField, ConnectionForm};
use crate::theme::use_theme;

/// Labelled single-line text input.
#[component]
pub fn TextField(
    label: &'static str,
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: &'static str,
    #[props(default)] password: bool,
) -> Element {
    let theme = use_theme();
    let input_type = if password { "password" } else { "text" };
    let input_style = format!(
        "padding: 8.5px 14px; font: inherit; color: {}; background-color: {}; \
         border: 1px solid {}; border-radius: 4px;",
        theme.palette.text.primary, theme.palette.background.paper, theme.palette.divider
    );

    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 4px; font-size: 0.875rem; color: {theme.palette.text.secondary};",
            "{label}"
            input {
                r#type: "{input_type}",
                value: "{value}",
                placeholder: "{placeholder}",
                style: "{input_style}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}

/// Titled group of fields.
#[component]
pub fn FieldGroup(title: &'static str, children: Element) -> Element {
    let theme = use_theme();
    let group_style = format!(
        "display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: {}; \
         margin: 0 0 {}; padding: {}; border: 1px solid {}; border-radius: 4px;",
        theme.spacing(2),
        theme.spacing(3),
        theme.spacing(2),
        theme.palette.divider
    );

    rsx! {
        fieldset {
            style: "{group_style}",
            legend { style: "padding: 0 4px; font-weight: 500;", "{title}" }
            {children}
        }
    }
}

/// ClickHouse connection inputs.
#[component]
pub fn ConnectionFields(
    connection: ConnectionForm,
    on_change: EventHandler<(ConnectionField, String)>,
) -> Element {
    let fields = [
        (ConnectionField::Host, "Host", false),
        (ConnectionField::Port, "Port", false),
        (ConnectionField::Database, "Database", false),
        (ConnectionField::User, "User", false),
        (ConnectionField::JwtToken, "JWT token", true),
    ];

    rsx! {
        FieldGroup { title: "ClickHouse connection",
            for (field, label, secret) in fields {
                TextField {
                    key: "{label}",
                    label,
                    value: connection.get(field).to_string(),
                    password: secret,
                    on_input: move |value: String| on_change.call((field, value)),
                }
            }
        }
    }
}

/// Validation errors, or the request summary once the form is valid.
#[component]
pub fn FormSummary(
    errors: Vec<String>,
    rows: Vec<(String, String)>,
    statements: Vec<String>,
) -> Element {
    let theme = use_theme();
    let statement_style = format!(
        "margin: 0 0 {}; padding: {}; overflow-x: auto; background-color: {}; border-radius: 4px;",
        theme.spacing(1),
        theme.spacing(2),
        theme.palette.divider
    );

    if !errors.is_empty() {
        return rsx! {
            div {
                "data-summary": "invalid",
                style: "color: {theme.palette.secondary.main};",
                p { style: "margin: 0 0 4px; font-weight: 500;", "Fix the following before continuing:" }
                ul { style: "margin: 0;",
                    for error in errors.iter() {
                        li { "{error}" }
                    }
                }
            }
        };
    }

    rsx! {
        div {
            "data-summary": "valid",
            table {
                style: "border-collapse: collapse; margin-bottom: {theme.spacing(2)};",
                for (name, value) in rows.iter() {
                    tr {
                        th {
                            style: "text-align: left; padding: 4px {theme.spacing(2)} 4px 0; color: {theme.palette.text.secondary};",
                            "{name}"
                        }
                        td { style: "padding: 4px 0;", "{value}" }
                    }
                }
            }
            for statement in statements.iter() {
                pre {
                    style: "{statement_style}",
                    "{statement}"
                }
            }
        }
    }
}
