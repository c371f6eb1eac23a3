//! Generic table for the list screens.

use dioxus::prelude::*;

use crate::context::{confirm, dispatch, SharedApp};
use crate::markup::{RowAction, Table};

/// Renders pre-escaped cells and one button per row action.
#[component]
pub fn DataTable(model: Table, on_action: EventHandler<RowAction>) -> Element {
    if model.rows.is_empty() {
        return rsx! {
            p { class: "empty-hint", "{model.empty_hint}" }
        };
    }

    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    for header in model.headers.iter() {
                        th { "{header}" }
                    }
                    th { "Actions" }
                }
            }
            tbody {
                for row in model.rows.iter() {
                    tr {
                        key: "{row.key}",
                        for cell in row.cells.iter() {
                            td { dangerous_inner_html: "{cell}" }
                        }
                        td {
                            class: "row-actions",
                            for action in row.actions.iter().cloned() {
                                button {
                                    class: action.class(),
                                    onclick: {
                                        let action = action.clone();
                                        move |_| on_action.call(action.clone())
                                    },
                                    "{action.label()}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Route a row action to the controller, asking first when it deletes.
pub fn run_row_action(app: &SharedApp, action: RowAction) {
    let prompt = action.confirmation().unwrap_or_default();
    match action {
        RowAction::ViewPerson(id) => dispatch(app, move |app| async move { app.view_person(id).await }),
        RowAction::EditPerson(id) => dispatch(app, move |app| async move { app.edit_person(id).await }),
        RowAction::DeletePerson { id, .. } => dispatch(app, move |app| async move {
            app.delete_person(id, confirm(prompt)).await
        }),
        RowAction::EditRelationship(id) => {
            dispatch(app, move |app| async move { app.edit_relationship(id).await })
        }
        RowAction::DeleteRelationship(id) => dispatch(app, move |app| async move {
            app.delete_relationship(id, confirm(prompt)).await
        }),
        RowAction::EditEvent(id) => dispatch(app, move |app| async move { app.edit_event(id).await }),
        RowAction::DeleteEvent { id, .. } => dispatch(app, move |app| async move {
            app.delete_event(id, confirm(prompt)).await
        }),
    }
}
