use dioxus::prelude::*;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use tracing::warn;

use crate::domain::entities::grid::{GridError, GridRecord};
use crate::ui::styles::{
    button_style, row_style, table_cell_style, table_container_style, table_header_cell_style,
    ButtonKind,
};
use crate::usecase::grid::{DataGrid, GridEvent, GridSnapshot};

pub type GridSignal<T> = Signal<Result<DataGrid<T>, GridError>>;

pub fn pagination_label(page: usize, total_pages: usize) -> String {
    format!("Page {page} of {total_pages}")
}

pub fn delete_prompt(selected: usize) -> String {
    if selected == 1 {
        "Delete the selected item?".to_string()
    } else {
        format!("Delete {selected} selected items?")
    }
}

fn confirm_delete(selected: usize) -> bool {
    MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Delete Selected")
        .set_description(delete_prompt(selected))
        .set_buttons(MessageButtons::YesNo)
        .show()
        == MessageDialogResult::Yes
}

/// Applies a table event to the page's grid, asking before deletes.
pub fn dispatch_grid_event<T: GridRecord + 'static>(
    mut grid: GridSignal<T>,
    rows: &[T],
    event: GridEvent,
    mut status: Signal<String>,
) {
    if event == GridEvent::DeleteSelected {
        let selected = match &*grid.read() {
            Ok(engine) => engine.selection().len(),
            Err(_) => 0,
        };
        if selected > 0 && !confirm_delete(selected) {
            return;
        }
    }

    let mut guard = grid.write();
    let Ok(engine) = &mut *guard else {
        return;
    };
    if let Err(err) = engine.apply(event, rows) {
        warn!("grid event rejected: {err}");
        status.set(format!("Action failed: {err}"));
    }
}

#[component]
pub fn DataTable(snapshot: GridSnapshot, on_event: EventHandler<GridEvent>) -> Element {
    let column_span = snapshot.columns.len() + 1;
    let can_select = snapshot.can_select;
    let delete_disabled = snapshot.selected_count == 0;
    let page_label = pagination_label(snapshot.page, snapshot.total_pages);
    let create_style = button_style(ButtonKind::Primary, false);
    let delete_style = button_style(ButtonKind::Danger, delete_disabled);
    let prev_style = button_style(ButtonKind::Plain, !snapshot.can_go_previous);
    let next_style = button_style(ButtonKind::Plain, !snapshot.can_go_next);

    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 16px; min-height: 0; flex: 1;",
            h1 { style: "font-size: 1.5rem; font-weight: bold; margin: 0;", "{snapshot.title}" }

            div { style: "display: flex; align-items: center; gap: 8px;",
                input {
                    r#type: "text",
                    style: "padding: 8px; border: 1px solid #d1d5db; border-radius: 4px;",
                    placeholder: "{snapshot.search_placeholder}",
                    value: "{snapshot.term}",
                    oninput: move |event| on_event.call(GridEvent::Search(event.value())),
                }
                if snapshot.can_create {
                    button {
                        style: "{create_style}",
                        onclick: move |_| on_event.call(GridEvent::Create),
                        "Create"
                    }
                }
                if snapshot.can_select {
                    button {
                        style: "{delete_style}",
                        disabled: delete_disabled,
                        onclick: move |_| on_event.call(GridEvent::DeleteSelected),
                        "Delete Selected"
                    }
                }
            }

            div { style: "{table_container_style()}",
                table { style: "width: 100%; border-collapse: collapse; background: #fff; color: #000;",
                    thead {
                        tr {
                            th { style: "{table_header_cell_style()}",
                                if snapshot.can_select {
                                    input {
                                        r#type: "checkbox",
                                        checked: snapshot.all_visible_selected,
                                        onclick: move |_| on_event.call(GridEvent::ToggleAllVisible),
                                    }
                                }
                            }
                            for label in snapshot.columns.iter() {
                                th { style: "{table_header_cell_style()}", "{label}" }
                            }
                        }
                    }
                    tbody {
                        {snapshot.rows.iter().map(|row| {
                            let id = row.id.clone();
                            let key = row.id.to_string();
                            let cells = row.cells.clone();
                            let selected = row.selected;
                            rsx!(
                                tr { key: "{key}", style: "{row_style(selected)}",
                                    td { style: "{table_cell_style()}",
                                        if can_select {
                                            input {
                                                r#type: "checkbox",
                                                checked: selected,
                                                onclick: move |_| on_event.call(GridEvent::ToggleRow(id.clone())),
                                            }
                                        }
                                    }
                                    for value in cells.iter() {
                                        td { style: "{table_cell_style()}", "{value}" }
                                    }
                                }
                            )
                        })}
                        if snapshot.is_empty() {
                            tr {
                                td {
                                    colspan: "{column_span}",
                                    style: "padding: 16px; text-align: center; color: #6b7280;",
                                    "No items found."
                                }
                            }
                        }
                    }
                }
            }

            if snapshot.pagination_enabled {
                div { style: "display: flex; align-items: center; justify-content: space-between; gap: 8px; color: #000;",
                    div { style: "display: flex; align-items: center; gap: 4px;",
                        span { "Rows per page:" }
                        select {
                            style: "padding: 4px; border: 1px solid #d1d5db; border-radius: 4px;",
                            value: "{snapshot.page_size}",
                            onchange: move |event| {
                                match event.value().parse::<usize>() {
                                    Ok(size) => on_event.call(GridEvent::PageSize(size)),
                                    Err(err) => warn!("unexpected page size option: {err}"),
                                }
                            },
                            for choice in snapshot.page_size_choices.iter() {
                                option {
                                    value: "{choice.size}",
                                    selected: choice.size == snapshot.page_size,
                                    "{choice.label}"
                                }
                            }
                        }
                    }
                    div { style: "display: flex; align-items: center; gap: 4px;",
                        span { "{page_label}" }
                        button {
                            style: "{prev_style}",
                            disabled: !snapshot.can_go_previous,
                            onclick: move |_| on_event.call(GridEvent::PreviousPage),
                            "Prev"
                        }
                        button {
                            style: "{next_style}",
                            disabled: !snapshot.can_go_next,
                            onclick: move |_| on_event.call(GridEvent::NextPage),
                            "Next"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_label_reads_naturally() {
        assert_eq!(pagination_label(2, 3), "Page 2 of 3");
        assert_eq!(pagination_label(1, 0), "Page 1 of 0");
    }

    #[test]
    fn delete_prompt_counts_items() {
        assert_eq!(delete_prompt(1), "Delete the selected item?");
        assert_eq!(delete_prompt(4), "Delete 4 selected items?");
    }
}
