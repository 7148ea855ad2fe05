use std::collections::HashSet;
use std::rc::Rc;

use tracing::{debug, info};

use crate::domain::entities::grid::{
    ColumnSpec, FilterState, GridError, GridRecord, PageState, RowId,
};
use crate::usecase::grid::filter::{filter_rows, row_contains, RowView};
use crate::usecase::grid::pagination::{page_size_choices, paginate, total_pages, PageSizeChoice};
use crate::usecase::grid::selection::SelectionSet;

pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const DEFAULT_TITLE: &str = "Data Table";
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search...";

type IdentityFn<T> = Rc<dyn Fn(&T) -> RowId>;
type MatchFn<T> = Rc<dyn Fn(&T, &str) -> bool>;
type CreateFn = Box<dyn FnMut()>;
type DeleteFn = Box<dyn FnMut(Vec<RowId>)>;

/// Construction options for a [`DataGrid`].
///
/// `identity` must return a distinct id for every row of the dataset; the
/// grid refuses to render or act on a dataset where two rows share one.
pub struct GridConfig<T> {
    columns: Vec<ColumnSpec>,
    identity: IdentityFn<T>,
    matches: Option<MatchFn<T>>,
    on_create: Option<CreateFn>,
    on_delete_selected: Option<DeleteFn>,
    title: String,
    search_placeholder: String,
    initial_page_size: usize,
    enable_pagination: bool,
}

impl<T> GridConfig<T> {
    pub fn new(columns: Vec<ColumnSpec>, identity: impl Fn(&T) -> RowId + 'static) -> Self {
        Self {
            columns,
            identity: Rc::new(identity),
            matches: None,
            on_create: None,
            on_delete_selected: None,
            title: DEFAULT_TITLE.to_string(),
            search_placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
            initial_page_size: DEFAULT_PAGE_SIZE,
            enable_pagination: false,
        }
    }

    pub fn with_matcher(mut self, matches: impl Fn(&T, &str) -> bool + 'static) -> Self {
        self.matches = Some(Rc::new(matches));
        self
    }

    pub fn on_create(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_create = Some(Box::new(handler));
        self
    }

    pub fn on_delete_selected(mut self, handler: impl FnMut(Vec<RowId>) + 'static) -> Self {
        self.on_delete_selected = Some(Box::new(handler));
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    pub fn with_initial_page_size(mut self, page_size: usize) -> Self {
        self.initial_page_size = page_size;
        self
    }

    pub fn with_pagination(mut self, enabled: bool) -> Self {
        self.enable_pagination = enabled;
        self
    }
}

/// One user interaction with the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridEvent {
    Search(String),
    ToggleRow(RowId),
    ToggleAllVisible,
    Create,
    DeleteSelected,
    PreviousPage,
    NextPage,
    PageSize(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRow {
    pub id: RowId,
    pub cells: Vec<String>,
    pub selected: bool,
}

/// Everything a view needs to draw the table for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSnapshot {
    pub title: String,
    pub search_placeholder: String,
    pub term: String,
    pub columns: Vec<String>,
    pub rows: Vec<SnapshotRow>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub pagination_enabled: bool,
    pub page_size_choices: Vec<PageSizeChoice>,
    pub all_visible_selected: bool,
    pub selected_count: usize,
    pub can_create: bool,
    pub can_select: bool,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

impl GridSnapshot {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub struct DataGrid<T> {
    config: GridConfig<T>,
    filter: FilterState,
    page: PageState,
    selection: SelectionSet,
}

impl<T: GridRecord> DataGrid<T> {
    pub fn new(config: GridConfig<T>) -> Result<Self, GridError> {
        let page = PageState::new(config.initial_page_size)?;
        Ok(Self {
            config,
            filter: FilterState::default(),
            page,
            selection: SelectionSet::new(),
        })
    }

    pub fn page_state(&self) -> PageState {
        self.page
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn row_id(&self, row: &T) -> RowId {
        (self.config.identity)(row)
    }

    /// Fails on the first id produced by two different rows.
    pub fn check_identities(&self, rows: &[T]) -> Result<(), GridError> {
        let mut seen = HashSet::with_capacity(rows.len());
        for row in rows {
            let id = self.row_id(row);
            if !seen.insert(id.clone()) {
                return Err(GridError::DuplicateRowId(id));
            }
        }
        Ok(())
    }

    pub fn filtered<'a>(&self, rows: &'a [T]) -> RowView<'a, T> {
        match &self.config.matches {
            Some(matches) => {
                filter_rows(rows, &self.filter.term, |row, term| matches(row, term))
            }
            None => {
                let needle = self.filter.term.to_lowercase();
                let columns = &self.config.columns;
                filter_rows(rows, &self.filter.term, |row, _| {
                    row_contains(row, columns, &needle)
                })
            }
        }
    }

    pub fn visible<'a>(&self, rows: &'a [T]) -> RowView<'a, T> {
        paginate(self.filtered(rows), self.page, self.config.enable_pagination)
    }

    pub fn visible_ids(&self, rows: &[T]) -> Vec<RowId> {
        self.visible(rows).iter().map(|row| self.row_id(row)).collect()
    }

    /// Page count of the filtered set; 0 when nothing matches, 1 when
    /// pagination is off.
    pub fn total_pages(&self, rows: &[T]) -> usize {
        self.page_count(self.filtered(rows).len())
    }

    fn page_count(&self, filtered_len: usize) -> usize {
        if self.config.enable_pagination {
            total_pages(filtered_len, self.page.page_size)
        } else {
            1
        }
    }

    /// Replaces the search term. The current page is kept as is.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.term = term.into();
    }

    pub fn toggle_row(&mut self, id: RowId) {
        self.selection.toggle_row(id);
    }

    pub fn toggle_select_all_visible(&mut self, rows: &[T]) {
        let visible = self.visible_ids(rows);
        self.selection.toggle_select_all_visible(&visible);
    }

    pub fn all_visible_selected(&self, rows: &[T]) -> bool {
        self.selection.all_selected(&self.visible_ids(rows))
    }

    pub fn previous_page(&mut self) {
        self.page.previous_page();
    }

    pub fn next_page(&mut self, rows: &[T]) {
        let total = self.total_pages(rows);
        self.page.next_page(total);
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), GridError> {
        self.page.set_page_size(page_size)
    }

    pub fn can_create(&self) -> bool {
        self.config.on_create.is_some()
    }

    pub fn can_select(&self) -> bool {
        self.config.on_delete_selected.is_some()
    }

    /// Forwards to the create handler; grid state is not touched.
    pub fn create(&mut self) {
        if let Some(handler) = self.config.on_create.as_mut() {
            handler();
        }
    }

    /// Hands the selection to the delete handler once and clears it.
    ///
    /// Returns `false` without calling the handler when nothing is selected.
    pub fn delete_selected(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        let Some(handler) = self.config.on_delete_selected.as_mut() else {
            return false;
        };
        let ids = self.selection.selected_ids();
        info!(count = ids.len(), "deleting selected rows");
        handler(ids);
        self.selection.clear();
        true
    }

    pub fn apply(&mut self, event: GridEvent, rows: &[T]) -> Result<(), GridError> {
        self.check_identities(rows)?;
        debug!(?event, "grid event");
        match event {
            GridEvent::Search(term) => self.set_search_term(term),
            GridEvent::ToggleRow(id) => self.toggle_row(id),
            GridEvent::ToggleAllVisible => self.toggle_select_all_visible(rows),
            GridEvent::Create => self.create(),
            GridEvent::DeleteSelected => {
                self.delete_selected();
            }
            GridEvent::PreviousPage => self.previous_page(),
            GridEvent::NextPage => self.next_page(rows),
            GridEvent::PageSize(size) => self.set_page_size(size)?,
        }
        Ok(())
    }

    pub fn snapshot(&self, rows: &[T]) -> Result<GridSnapshot, GridError> {
        self.check_identities(rows)?;

        let filtered = self.filtered(rows);
        let filtered_len = filtered.len();
        let enabled = self.config.enable_pagination;
        let total = self.page_count(filtered_len);
        let visible = paginate(filtered, self.page, enabled);

        let snapshot_rows: Vec<SnapshotRow> = visible
            .iter()
            .map(|row| {
                let id = self.row_id(row);
                let cells = self
                    .config
                    .columns
                    .iter()
                    .map(|column| row.field(&column.key).to_string())
                    .collect();
                SnapshotRow {
                    selected: self.selection.contains(&id),
                    id,
                    cells,
                }
            })
            .collect();
        let all_visible_selected =
            !snapshot_rows.is_empty() && snapshot_rows.iter().all(|row| row.selected);

        Ok(GridSnapshot {
            title: self.config.title.clone(),
            search_placeholder: self.config.search_placeholder.clone(),
            term: self.filter.term.clone(),
            columns: self
                .config
                .columns
                .iter()
                .map(|column| column.label.clone())
                .collect(),
            rows: snapshot_rows,
            page: self.page.page,
            page_size: self.page.page_size,
            total_pages: total,
            pagination_enabled: enabled,
            page_size_choices: page_size_choices(filtered_len),
            all_visible_selected,
            selected_count: self.selection.len(),
            can_create: self.can_create(),
            can_select: self.can_select(),
            can_go_previous: self.page.can_go_previous(),
            can_go_next: self.page.can_go_next(total),
        })
    }
}
