//! Export a ClickHouse table to a flat file.

use dioxus::prelude::*;

use super::{summary_parts, PageFrame};
use crate::components::{ConnectionFields, FieldGroup, FormSummary, TextField};
use crate::forms::{ConnectionField, ExportForm};
use crate::routing::ViewId;

#[component]
pub fn ClickHouseToFile() -> Element {
    let mut form = use_signal(ExportForm::default);
    let current = form.read().clone();

    let (errors, rows, statements) = summary_parts(current.validate(), |plan| {
        (plan.summary(), vec![plan.statement()])
    });

    rsx! {
        PageFrame { view: ViewId::ClickHouseToFile,
            ConnectionFields {
                connection: current.connection.clone(),
                on_change: move |(field, value): (ConnectionField, String)| {
                    form.write().connection.set(field, value);
                },
            }
            FieldGroup { title: "Source",
                TextField {
                    label: "Table",
                    value: current.table.clone(),
                    placeholder: "events",
                    on_input: move |value: String| form.write().table = value,
                }
                TextField {
                    label: "Columns",
                    value: current.columns.clone(),
                    placeholder: "id, name, created_at",
                    on_input: move |value: String| form.write().columns = value,
                }
            }
            FieldGroup { title: "Target file",
                TextField {
                    label: "File path",
                    value: current.file_path.clone(),
                    placeholder: "exports/events.csv",
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
