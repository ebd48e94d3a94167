//! Load a flat file into a ClickHouse table.

use dioxus::prelude::*;

use super::{summary_parts, PageFrame};
use crate::components::{ConnectionFields, FieldGroup, FormSummary, TextField};
use crate::forms::{ConnectionField, ImportForm};
use crate::routing::ViewId;

#[component]
pub fn FileToClickHouse() -> Element {
    let mut form = use_signal(ImportForm::default);
    let current = form.read().clone();

    let (errors, rows, statements) = summary_parts(current.validate(), |plan| {
        (plan.summary(), vec![plan.create_table_statement()])
    });

    rsx! {
        PageFrame { view: ViewId::FileToClickHouse,
            FieldGroup { title: "Source file",
                TextField {
                    label: "File path",
                    value: current.file_path.clone(),
                    placeholder: "uploads/customers.csv",
                    on_input: move |value: String| form.write().file_path = value,
                }
                TextField {
                    label: "Delimiter",
                    value: current.delimiter.clone(),
                    on_input: move |value: String| form.write().delimiter = value,
                }
            }
            ConnectionFields {
                connection: current.connection.clone(),
                on_change: move |(field, value): (ConnectionField, String)| {
                    form.write().connection.set(field, value);
                },
            }
            FieldGroup { title: "Target table",
                TextField {
                    label: "Table",
                    value: current.table.clone(),
                    placeholder: "customers",
                    on_input: move |value: String| form.write().table = value,
                }
                TextField {
                    label: "Columns",
                    value: current.columns.clone(),
                    placeholder: "id, name, email",
                    on_input: move |value: String| form.write().columns = value,
                }
            }
            FormSummary { errors, rows, statements }
        }
    }
}
