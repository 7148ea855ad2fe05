use dioxus::prelude::*;
use tracing::{info, warn};

use crate::domain::entities::catalog::{NewProduct, Product, PRODUCT_CONDITIONS};
use crate::domain::entities::grid::{ColumnSpec, RowId};
use crate::ui::components::data_table::{dispatch_grid_event, DataTable, GridSignal};
use crate::ui::components::modal::{FormField, ModalFrame};
use crate::ui::state::app_state::AppState;
use crate::ui::state::services::AppServices;
use crate::ui::styles::{button_style, input_style, ButtonKind};
use crate::usecase::grid::{DataGrid, GridConfig};
use crate::usecase::services::catalog_service::CatalogService;

fn load_products(catalog: &CatalogService) -> Vec<Product> {
    catalog.list_products().unwrap_or_else(|err| {
        warn!("failed to list products: {err}");
        Vec::new()
    })
}

pub fn product_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("id", "ID"),
        ColumnSpec::new("name", "Name"),
        ColumnSpec::new("category", "Category"),
    ]
}

#[component]
pub fn ProductsPage() -> Element {
    let services = use_context::<AppServices>();
    let AppState { mut status, .. } = use_context::<AppState>();

    let catalog = services.catalog.clone();
    let mut products = use_signal(move || load_products(&catalog));
    let mut show_create = use_signal(|| false);

    let catalog_for_delete = services.catalog.clone();
    let grid_settings = services.config.grid.clone();
    let grid: GridSignal<Product> = use_signal(move || {
        let config = GridConfig::new(product_columns(), Product::row_id)
            .with_title("My Items with Pagination")
            .with_search_placeholder("Search items...")
            .with_initial_page_size(grid_settings.initial_page_size)
            .with_pagination(grid_settings.enable_pagination)
            .on_create(move || show_create.set(true))
            .on_delete_selected(move |ids: Vec<RowId>| {
                match catalog_for_delete.delete_products(&ids) {
                    Ok(removed) => {
                        products.set(load_products(&catalog_for_delete));
                        status.set(format!("Deleted {removed} item(s)"));
                    }
                    Err(err) => {
                        warn!("failed to delete products: {err}");
                        status.set(format!("Delete failed: {err}"));
                    }
                }
            });
        DataGrid::new(config)
    });

    let rows = products();
    let snapshot = match &*grid.read() {
        Ok(engine) => engine.snapshot(&rows).map_err(|err| err.to_string()),
        Err(err) => Err(err.to_string()),
    };

    let catalog_for_create = services.catalog.clone();

    rsx! {
        {match snapshot {
            Ok(snapshot) => rsx! {
                DataTable {
                    snapshot,
                    on_event: move |event| dispatch_grid_event(grid, &products(), event, status),
                }
            },
            Err(message) => rsx! {
                p { style: "color: #dc2626;", "Cannot show products: {message}" }
            },
        }}
        if show_create() {
            CreateProductModal {
                on_close: move |_| show_create.set(false),
                on_submit: move |input: NewProduct| match catalog_for_create.create_product(input) {
                    Ok(created) => {
                        info!("created product {}", created.id);
                        products.set(load_products(&catalog_for_create));
                        status.set(format!("Created {}", created.name));
                        show_create.set(false);
                    }
                    Err(err) => status.set(format!("Create failed: {err}")),
                },
            }
        }
    }
}

#[component]
fn CreateProductModal(on_close: EventHandler<()>, on_submit: EventHandler<NewProduct>) -> Element {
    let mut name = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut condition = use_signal(|| PRODUCT_CONDITIONS[0].to_string());
    let mut description = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut image_url = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let submit = move |_: MouseEvent| {
        let parsed_price = if price().trim().is_empty() {
            0.0
        } else {
            match price().trim().parse::<f64>() {
                Ok(value) => value,
                Err(_) => {
                    error.set(Some("Price must be a number.".to_string()));
                    return;
                }
            }
        };
        error.set(None);
        on_submit.call(NewProduct {
            name: name(),
            category: category(),
            condition: condition(),
            description: description(),
            price: parsed_price,
            image_url: image_url(),
        });
    };

    rsx! {
        ModalFrame { title: "Create Product", on_close,
            div { style: "display: flex; flex-direction: column; gap: 12px;",
                FormField { label: "Name",
                    input { style: "{input_style()}", value: "{name}", oninput: move |event| name.set(event.value()) }
                }
                FormField { label: "Category",
                    input { style: "{input_style()}", value: "{category}", oninput: move |event| category.set(event.value()) }
                }
                FormField { label: "Condition",
                    select {
                        style: "{input_style()}",
                        value: "{condition}",
                        onchange: move |event| condition.set(event.value()),
                        for choice in PRODUCT_CONDITIONS {
                            option { key: "{choice}", value: "{choice}", "{choice}" }
                        }
                    }
                }
                FormField { label: "Description",
                    textarea { style: "{input_style()}", value: "{description}", oninput: move |event| description.set(event.value()) }
                }
                FormField { label: "Price",
                    input { style: "{input_style()}", r#type: "number", value: "{price}", oninput: move |event| price.set(event.value()) }
                }
                FormField { label: "Image URL",
                    input { style: "{input_style()}", value: "{image_url}", oninput: move |event| image_url.set(event.value()) }
                }
                if let Some(message) = error() {
                    p { style: "color: #dc2626; margin: 0;", "{message}" }
                }
                div { style: "display: flex; justify-content: flex-end; gap: 8px;",
                    button { style: "{button_style(ButtonKind::Plain, false)}", onclick: move |_| on_close.call(()), "Cancel" }
                    button { style: "{button_style(ButtonKind::Primary, false)}", onclick: submit, "Save" }
                }
            }
        }
    }
}
