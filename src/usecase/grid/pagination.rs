use crate::domain::entities::grid::{GridError, PageState};
use crate::usecase::grid::filter::RowView;

pub const PAGE_SIZE_PRESETS: [usize; 3] = [5, 10, 25];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSizeChoice {
    pub label: String,
    pub size: usize,
}

pub fn total_pages(row_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    row_count.div_ceil(page_size)
}

/// The rows shown for `state`, or the whole filtered view when paging is off.
pub fn paginate<'a, T>(
    filtered: RowView<'a, T>,
    state: PageState,
    enabled: bool,
) -> RowView<'a, T> {
    if !enabled {
        return filtered;
    }
    let start = state.page.saturating_sub(1).saturating_mul(state.page_size);
    filtered.window(start, state.page_size)
}

/// Presets plus an "All" entry sized to the filtered row count.
pub fn page_size_choices(filtered_len: usize) -> Vec<PageSizeChoice> {
    PAGE_SIZE_PRESETS
        .iter()
        .map(|size| PageSizeChoice {
            label: size.to_string(),
            size: *size,
        })
        .chain(std::iter::once(PageSizeChoice {
            label: "All".to_string(),
            size: filtered_len.max(1),
        }))
        .collect()
}

impl PageState {
    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        if total_pages == 0 {
            return;
        }
        self.page = (self.page + 1).min(total_pages);
    }

    /// Any size change sends the view back to the first page.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), GridError> {
        if page_size == 0 {
            return Err(GridError::InvalidPageSize(page_size));
        }
        self.page_size = page_size;
        self.page = 1;
        Ok(())
    }

    pub fn can_go_previous(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self, total_pages: usize) -> bool {
        total_pages > 0 && self.page != total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page: usize, page_size: usize) -> PageState {
        PageState { page, page_size }
    }

    #[test]
    fn total_pages_rounds_up_and_is_zero_for_empty() {
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(8, 5), 2);
        assert_eq!(total_pages(26, 25), 2);
    }

    #[test]
    fn paginate_slices_last_page_short() {
        let rows: Vec<u32> = (1..=8).collect();

        let first: Vec<u32> = paginate(RowView::Slice(rows.as_slice()), page(1, 5), true)
            .iter()
            .copied()
            .collect();
        let second: Vec<u32> = paginate(RowView::Slice(rows.as_slice()), page(2, 5), true)
            .iter()
            .copied()
            .collect();

        assert_eq!(first, vec![1, 2, 3, 4, 5]);
        assert_eq!(second, vec![6, 7, 8]);
        assert!(paginate(RowView::Slice(rows.as_slice()), page(3, 5), true).is_empty());
    }

    #[test]
    fn disabled_pagination_ignores_page_state() {
        let rows: Vec<u32> = (1..=8).collect();

        let view = paginate(RowView::Slice(rows.as_slice()), page(4, 2), false);

        assert_eq!(view.len(), 8);
    }

    #[test]
    fn previous_page_stops_at_one() {
        let mut state = page(1, 5);
        state.previous_page();
        assert_eq!(state.page, 1);

        let mut state = page(3, 5);
        state.previous_page();
        assert_eq!(state.page, 2);
    }

    #[test]
    fn next_page_clamps_and_ignores_empty_sets() {
        let mut state = page(2, 5);
        state.next_page(2);
        assert_eq!(state.page, 2);

        let mut state = page(1, 5);
        state.next_page(0);
        assert_eq!(state.page, 1, "next_page is a no-op without pages");

        let mut state = page(4, 5);
        state.next_page(2);
        assert_eq!(state.page, 2, "a stale page is pulled back to the last page");
    }

    #[test]
    fn set_page_size_always_resets_page() {
        let mut state = page(2, 5);
        state.set_page_size(10).expect("page size should be accepted");
        assert_eq!(state, page(1, 10));

        let mut state = page(1, 5);
        state.set_page_size(5).expect("page size should be accepted");
        assert_eq!(state, page(1, 5));
    }

    #[test]
    fn set_page_size_rejects_zero() {
        let mut state = page(3, 5);

        let result = state.set_page_size(0);

        assert_eq!(result, Err(GridError::InvalidPageSize(0)));
        assert_eq!(state, page(3, 5), "rejected size leaves state untouched");
    }

    #[test]
    fn page_size_choices_include_all_rows() {
        let choices = page_size_choices(8);
        let sizes: Vec<usize> = choices.iter().map(|choice| choice.size).collect();

        assert_eq!(sizes, vec![5, 10, 25, 8]);
        assert_eq!(choices[3].label, "All");
        assert_eq!(page_size_choices(0)[3].size, 1);
    }
}
