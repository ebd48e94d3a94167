//! Join ClickHouse tables and export the result to a flat file.

use dioxus::prelude::*;

use super::{summary_parts, PageFrame};
use crate::components::{ConnectionFields, FieldGroup, FormSummary, TextField};
use crate::forms::{ConnectionField, JoinForm};
use crate::routing::ViewId;

#[component]
pub fn JoinTables() -> Element {
    let mut form = use_signal(JoinForm::default);
    let current = form.read().clone();

    let (errors, rows, statements) = summary_parts(current.validate(), |plan| {
        (plan.summary(), vec![plan.statement()])
    });

    rsx! {
        PageFrame { view: ViewId::JoinTables,
            ConnectionFields {
                connection: current.connection.clone(),
                on_change: move |(field, value): (ConnectionField, String)| {
                    form.write().connection.set(field, value);
                },
            }
            FieldGroup { title: "Join",
                TextField {
                    label: "Source table",
                    value: current.source_table.clone(),
                    placeholder: "orders",
                    on_input: move |value: String| form.write().source_table = value,
                }
                TextField {
                    label: "Join table",
                    value: current.join_table.clone(),
                    placeholder: "customers (optional)",
                    on_input: move |value: String| form.write().join_table = value,
                }
                TextField {
                    label: "Join condition",
                    value: current.join_condition.clone(),
                    placeholder: "orders.customer_id = customers.id",
                    on_input: move |value: String| form.write().join_condition = value,
                }
                TextField {
                    label: "Columns",
                    value: current.columns.clone(),
                    placeholder: "orders.id, customers.name",
                    on_input: move |value: String| form.write().columns = value,
                }
            }
            FieldGroup { title: "Target file",
                TextField {
                    label: "File path",
                    value: current.file_path.clone(),
                    placeholder: "exports/orders_customers.csv",
                    on_input: move |value: String| form.write().file_path = value,
                }
                TextField {
                    label: "Delimiter",
                    value: current.delimiter.clone(),
                    on_input: move |value: String| form.write().delimiter = value,
                }
            }
            FormSummary { errors, rows, statements }
        }
    }
}
