use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use proptest::prelude::*;

use crate::domain::entities::auth::LoginRequest;
use crate::domain::entities::catalog::{sample_products, Product};
use crate::domain::entities::grid::{CellValue, ColumnSpec, GridRecord, RowId};
use crate::infra::config::AppConfig;
use crate::infra::memory::repo::MemoryCatalogRepo;
use crate::ui::pages::products::product_columns;
use crate::ui::state::services::AppServices;
use crate::usecase::grid::{DataGrid, GridConfig, GridEvent, RowView};
use crate::usecase::services::catalog_service::CatalogService;

type DeleteLog = Rc<RefCell<Vec<Vec<RowId>>>>;

fn ids(values: &[&str]) -> Vec<RowId> {
    values.iter().map(|value| RowId::from(*value)).collect()
}

fn product_grid(deleted: DeleteLog) -> DataGrid<Product> {
    let config = GridConfig::new(product_columns(), Product::row_id)
        .with_initial_page_size(5)
        .with_pagination(true)
        .on_delete_selected(move |ids| deleted.borrow_mut().push(ids));
    DataGrid::new(config).expect("page size 5 is valid")
}

#[test]
fn eight_products_keep_selection_across_pages_and_delete_once() {
    let rows = sample_products();
    let deleted: DeleteLog = Rc::default();
    let mut grid = product_grid(deleted.clone());

    assert_eq!(grid.visible_ids(&rows), ids(&["1", "2", "3", "4", "5"]));
    assert_eq!(grid.total_pages(&rows), 2);

    grid.apply(GridEvent::NextPage, &rows).expect("next page");
    assert_eq!(grid.page_state().page, 2);
    assert_eq!(grid.visible_ids(&rows), ids(&["6", "7", "8"]));

    grid.apply(GridEvent::ToggleRow(RowId::from("6")), &rows)
        .expect("toggle 6");
    grid.apply(GridEvent::ToggleRow(RowId::from("7")), &rows)
        .expect("toggle 7");

    grid.apply(GridEvent::PreviousPage, &rows).expect("previous page");
    assert_eq!(grid.page_state().page, 1);
    assert_eq!(grid.selection().selected_ids(), ids(&["6", "7"]));

    grid.apply(GridEvent::ToggleAllVisible, &rows)
        .expect("select all visible");
    assert_eq!(
        grid.selection().selected_ids(),
        ids(&["1", "2", "3", "4", "5", "6", "7"])
    );

    grid.apply(GridEvent::DeleteSelected, &rows).expect("delete");
    assert_eq!(
        *deleted.borrow(),
        vec![ids(&["1", "2", "3", "4", "5", "6", "7"])]
    );
    assert!(grid.selection().is_empty());
}

#[test]
fn category_term_matches_regardless_of_case() {
    let rows = sample_products();
    let mut grid = product_grid(Rc::default());

    grid.apply(GridEvent::Search("category 1".to_string()), &rows)
        .expect("search");

    let filtered: Vec<&Product> = grid.filtered(&rows).iter().collect();
    assert_eq!(filtered.len(), 3);
    assert!(filtered.iter().all(|product| product.category == "Category 1"));
    let snapshot = grid.snapshot(&rows).expect("snapshot");
    assert_eq!(snapshot.total_pages, 1);
    assert_eq!(snapshot.rows[0].cells, vec!["1", "Item A", "Category 1"]);
}

#[test]
fn narrowing_the_search_on_a_later_page_shows_an_empty_page() {
    let rows = sample_products();
    let mut grid = product_grid(Rc::default());

    grid.apply(GridEvent::NextPage, &rows).expect("next page");
    grid.apply(GridEvent::Search("item a".to_string()), &rows)
        .expect("search");

    let snapshot = grid.snapshot(&rows).expect("snapshot");
    assert_eq!(snapshot.page, 2);
    assert_eq!(snapshot.total_pages, 1);
    assert!(snapshot.is_empty());
    assert!(snapshot.can_go_previous);
}

#[test]
fn next_page_on_empty_dataset_is_a_no_op() {
    let rows: Vec<Product> = Vec::new();
    let mut grid = product_grid(Rc::default());

    grid.apply(GridEvent::NextPage, &rows).expect("next page");

    assert_eq!(grid.page_state().page, 1);
    assert_eq!(grid.total_pages(&rows), 0);
    let snapshot = grid.snapshot(&rows).expect("snapshot");
    assert!(!snapshot.can_go_next);
    assert!(!snapshot.can_go_previous);
}

#[test]
fn grid_delete_handler_removes_rows_from_catalog() {
    let catalog = Arc::new(CatalogService::new(Arc::new(MemoryCatalogRepo::seeded())));
    let rows = catalog.list_products().expect("list products");
    let removed = Rc::new(RefCell::new(0_usize));

    let handler_catalog = catalog.clone();
    let handler_removed = removed.clone();
    let config = GridConfig::new(product_columns(), Product::row_id)
        .with_pagination(true)
        .on_delete_selected(move |ids| {
            let count = handler_catalog
                .delete_products(&ids)
                .expect("delete products");
            *handler_removed.borrow_mut() += count;
        });
    let mut grid = DataGrid::new(config).expect("grid");

    grid.apply(GridEvent::ToggleRow(RowId::from("2")), &rows)
        .expect("toggle");
    grid.apply(GridEvent::ToggleRow(RowId::from("8")), &rows)
        .expect("toggle");
    grid.apply(GridEvent::DeleteSelected, &rows).expect("delete");

    assert_eq!(*removed.borrow(), 2);
    let remaining: Vec<i64> = catalog
        .list_products()
        .expect("list products")
        .iter()
        .map(|product| product.id)
        .collect();
    assert_eq!(remaining, vec![1, 3, 4, 5, 6, 7]);
}

#[test]
fn services_from_default_config_accept_demo_login() {
    let services = AppServices::from_config(AppConfig::default());

    let session = services
        .auth
        .login(&LoginRequest {
            email: "test@example.com".to_string(),
            password: "password123".to_string(),
        })
        .expect("demo credentials should log in");

    assert_eq!(session.email, "test@example.com");
    assert_eq!(services.config.grid.initial_page_size, 5);
    assert_eq!(
        services.catalog.list_categories().expect("categories").len(),
        3
    );
}

#[derive(Debug, Clone)]
struct LabeledRow {
    id: usize,
    label: String,
}

impl GridRecord for LabeledRow {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => CellValue::Integer(self.id as i64),
            "label" => CellValue::from(self.label.as_str()),
            _ => CellValue::Empty,
        }
    }
}

const MAX_ROWS: usize = 40;

fn arb_rows() -> impl Strategy<Value = Vec<LabeledRow>> {
    prop::collection::vec("[a-cA-C ]{0,6}", 0..MAX_ROWS).prop_map(|labels| {
        labels
            .into_iter()
            .enumerate()
            .map(|(id, label)| LabeledRow { id, label })
            .collect()
    })
}

fn arb_mask() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), MAX_ROWS)
}

fn labeled_grid(page_size: usize) -> DataGrid<LabeledRow> {
    labeled_grid_with(page_size, true)
}

fn labeled_grid_with(page_size: usize, paginated: bool) -> DataGrid<LabeledRow> {
    let columns = vec![ColumnSpec::new("id", "ID"), ColumnSpec::new("label", "Label")];
    let config = GridConfig::new(columns, |row: &LabeledRow| RowId::from(row.id as i64))
        .with_initial_page_size(page_size)
        .with_pagination(paginated);
    DataGrid::new(config).expect("page size is at least 1")
}

fn all_ids(grid: &DataGrid<LabeledRow>, rows: &[LabeledRow]) -> Vec<RowId> {
    grid.filtered(rows).iter().map(|row| grid.row_id(row)).collect()
}

proptest! {
    #[test]
    fn empty_term_returns_the_dataset_itself(rows in arb_rows()) {
        let grid = labeled_grid(5);

        match grid.filtered(&rows) {
            RowView::Slice(view) => prop_assert!(std::ptr::eq(view, rows.as_slice())),
            RowView::Picked(_) => prop_assert!(false, "empty term should not copy rows"),
        }
    }

    #[test]
    fn every_filtered_row_contains_the_term(rows in arb_rows(), term in "[a-cA-C1-3]{1,2}") {
        let mut grid = labeled_grid(5);
        grid.set_search_term(term.clone());
        let needle = term.to_lowercase();
        let matches = |row: &LabeledRow| {
            row.id.to_string().contains(&needle) || row.label.to_lowercase().contains(&needle)
        };

        let filtered = grid.filtered(&rows);
        for row in filtered.iter() {
            prop_assert!(matches(row));
        }
        prop_assert_eq!(filtered.len(), rows.iter().filter(|row| matches(row)).count());
    }

    #[test]
    fn pages_concatenate_back_to_the_filtered_rows(
        rows in arb_rows(),
        page_size in 1_usize..8,
        term in prop_oneof![Just(String::new()), "[a-c]{1}"],
    ) {
        let mut grid = labeled_grid(page_size);
        grid.set_search_term(term);
        let expected = all_ids(&grid, &rows);
        let total = grid.total_pages(&rows);
        prop_assert_eq!(total, expected.len().div_ceil(page_size));

        let mut collected = Vec::new();
        for _ in 0..total {
            collected.extend(grid.visible_ids(&rows));
            grid.next_page(&rows);
        }
        prop_assert_eq!(collected, expected);
    }

    #[test]
    fn navigation_stays_within_bounds(
        rows in arb_rows(),
        page_size in 1_usize..8,
        paginated in any::<bool>(),
        moves in prop::collection::vec(any::<bool>(), 0..30),
    ) {
        let mut grid = labeled_grid_with(page_size, paginated);
        let total = grid.total_pages(&rows);
        if !paginated {
            prop_assert_eq!(total, 1);
        }

        for forward in moves {
            if forward {
                grid.next_page(&rows);
            } else {
                grid.previous_page();
            }
            let page = grid.page_state().page;
            prop_assert!(page >= 1);
            prop_assert!(page <= total.max(1));
            prop_assert_eq!(grid.snapshot(&rows).expect("snapshot").page, page);
        }
    }

    #[test]
    fn changing_page_size_returns_to_first_page(
        rows in arb_rows(),
        forward in 0_usize..10,
        new_size in 1_usize..12,
    ) {
        let mut grid = labeled_grid(2);
        for _ in 0..forward {
            grid.next_page(&rows);
        }

        grid.set_page_size(new_size).expect("non-zero size");

        prop_assert_eq!(grid.page_state().page, 1);
        prop_assert_eq!(grid.page_state().page_size, new_size);
    }

    #[test]
    fn select_all_twice_restores_selection(
        rows in arb_rows(),
        page_size in 1_usize..8,
        forward in 0_usize..6,
        mask in arb_mask(),
        visible_preselected in any::<bool>(),
    ) {
        let mut grid = labeled_grid(page_size);
        for _ in 0..forward {
            grid.next_page(&rows);
        }
        let visible = grid.visible_ids(&rows);
        for row in &rows {
            let id = grid.row_id(row);
            let on_page = visible.contains(&id);
            if (on_page && visible_preselected) || (!on_page && mask[row.id]) {
                grid.toggle_row(id);
            }
        }
        let before = grid.selection().selected_ids();

        grid.toggle_select_all_visible(&rows);
        if !visible.is_empty() {
            prop_assert_eq!(grid.all_visible_selected(&rows), !visible_preselected);
        }
        grid.toggle_select_all_visible(&rows);

        prop_assert_eq!(grid.selection().selected_ids(), before);
    }

    #[test]
    fn delete_hands_over_exact_selection_once(rows in arb_rows(), mask in arb_mask()) {
        let deleted: DeleteLog = Rc::default();
        let log = deleted.clone();
        let columns = vec![ColumnSpec::new("label", "Label")];
        let config = GridConfig::new(columns, |row: &LabeledRow| RowId::from(row.id as i64))
            .on_delete_selected(move |ids| log.borrow_mut().push(ids));
        let mut grid = DataGrid::new(config).expect("grid");
        for row in rows.iter().filter(|row| mask[row.id]) {
            grid.toggle_row(grid.row_id(row));
        }
        let before = grid.selection().selected_ids();

        let fired = grid.delete_selected();

        prop_assert_eq!(fired, !before.is_empty());
        if before.is_empty() {
            prop_assert!(deleted.borrow().is_empty());
        } else {
            prop_assert_eq!(deleted.borrow().clone(), vec![before]);
        }
        prop_assert!(grid.selection().is_empty());
    }
}
