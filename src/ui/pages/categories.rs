use dioxus::prelude::*;
use tracing::{info, warn};

use crate::domain::entities::catalog::{Category, NewCategory};
use crate::domain::entities::grid::{ColumnSpec, RowId};
use crate::ui::components::data_table::{dispatch_grid_event, DataTable, GridSignal};
use crate::ui::components::modal::{FormField, ModalFrame};
use crate::ui::state::app_state::AppState;
use crate::ui::state::services::AppServices;
use crate::ui::styles::{button_style, input_style, ButtonKind};
use crate::usecase::grid::{DataGrid, GridConfig};
use crate::usecase::services::catalog_service::CatalogService;

fn load_categories(catalog: &CatalogService) -> Vec<Category> {
    catalog.list_categories().unwrap_or_else(|err| {
        warn!("failed to list categories: {err}");
        Vec::new()
    })
}

pub fn category_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("id", "ID"),
        ColumnSpec::new("name", "ชื่อหมวดหมู่"),
        ColumnSpec::new("description", "รายละเอียด"),
    ]
}

#[component]
pub fn CategoriesPage() -> Element {
    let services = use_context::<AppServices>();
    let AppState { mut status, .. } = use_context::<AppState>();

    let catalog = services.catalog.clone();
    let mut categories = use_signal(move || load_categories(&catalog));
    let mut show_create = use_signal(|| false);

    let catalog_for_delete = services.catalog.clone();
    let grid_settings = services.config.grid.clone();
    let grid: GridSignal<Category> = use_signal(move || {
        let config = GridConfig::new(category_columns(), Category::row_id)
            .with_title("จัดการข้อมูลของ หมวดหมู่")
            .with_search_placeholder("ค้าหาหมวดหมู่")
            .with_initial_page_size(grid_settings.initial_page_size)
            .with_pagination(grid_settings.enable_pagination)
            .on_create(move || show_create.set(true))
            .on_delete_selected(move |ids: Vec<RowId>| {
                match catalog_for_delete.delete_categories(&ids) {
                    Ok(removed) => {
                        categories.set(load_categories(&catalog_for_delete));
                        status.set(format!("Deleted {removed} categories"));
                    }
                    Err(err) => {
                        warn!("failed to delete categories: {err}");
                        status.set(format!("Delete failed: {err}"));
                    }
                }
            });
        DataGrid::new(config)
    });

    let rows = categories();
    let snapshot = match &*grid.read() {
        Ok(engine) => engine.snapshot(&rows).map_err(|err| err.to_string()),
        Err(err) => Err(err.to_string()),
    };

    let catalog_for_create = services.catalog.clone();
    let save = move |input: NewCategory| match catalog_for_create.create_category(input) {
        Ok(created) => {
            info!("created category {}", created.id);
            categories.set(load_categories(&catalog_for_create));
            status.set(format!("Created {}", created.name));
            show_create.set(false);
        }
        Err(err) => status.set(format!("Create failed: {err}")),
    };

    rsx! {
        {match snapshot {
            Ok(snapshot) => rsx! {
                DataTable {
                    snapshot,
                    on_event: move |event| dispatch_grid_event(grid, &categories(), event, status),
                }
            },
            Err(message) => rsx! {
                p { style: "color: #dc2626;", "{message}" }
            },
        }}
        if show_create() {
            CreateCategoryModal { on_close: move |_| show_create.set(false), on_submit: save }
        }
    }
}

#[component]
fn CreateCategoryModal(
    on_close: EventHandler<()>,
    on_submit: EventHandler<NewCategory>,
) -> Element {
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut image_url = use_signal(String::new);

    rsx! {
        ModalFrame { title: "เพิ่มหมวดหมู่", on_close,
            div { style: "display: flex; flex-direction: column; gap: 12px;",
                FormField { label: "ชื่อหมวดหมู่",
                    input { style: "{input_style()}", value: "{name}", oninput: move |event| name.set(event.value()) }
                }
                FormField { label: "รายละเอียด",
                    textarea { style: "{input_style()}", value: "{description}", oninput: move |event| description.set(event.value()) }
                }
                FormField { label: "Image URL",
                    input { style: "{input_style()}", value: "{image_url}", oninput: move |event| image_url.set(event.value()) }
                }
                div { style: "display: flex; justify-content: flex-end; gap: 8px;",
                    button { style: "{button_style(ButtonKind::Plain, false)}", onclick: move |_| on_close.call(()), "ยกเลิก" }
                    button {
                        style: "{button_style(ButtonKind::Primary, false)}",
                        onclick: move |_| {
                            on_submit.call(NewCategory {
                                name: name(),
                                description: description(),
                                image_url: image_url(),
                            })
                        },
                        "บันทึก"
                    }
                }
            }
        }
    }
}
