use std::slice;

use crate::domain::entities::grid::{ColumnSpec, GridRecord};

/// Borrowed view over a caller-owned dataset.
///
/// `Slice` is a contiguous window of the dataset itself, `Picked` holds the
/// rows that survived a filter in their original relative order.
#[derive(Debug)]
pub enum RowView<'a, T> {
    Slice(&'a [T]),
    Picked(Vec<&'a T>),
}

impl<'a, T> RowView<'a, T> {
    pub fn len(&self) -> usize {
        match self {
            RowView::Slice(rows) => rows.len(),
            RowView::Picked(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> RowViewIter<'_, 'a, T> {
        match self {
            RowView::Slice(rows) => RowViewIter::Slice(rows.iter()),
            RowView::Picked(rows) => RowViewIter::Picked(rows.iter()),
        }
    }

    /// Rows `[start, start + len)`, clipped to what is available.
    pub fn window(&self, start: usize, len: usize) -> RowView<'a, T> {
        let total = self.len();
        let start = start.min(total);
        let end = start.saturating_add(len).min(total);
        match self {
            RowView::Slice(rows) => RowView::Slice(&rows[start..end]),
            RowView::Picked(rows) => RowView::Picked(rows[start..end].to_vec()),
        }
    }
}

pub enum RowViewIter<'v, 'a, T> {
    Slice(slice::Iter<'a, T>),
    Picked(slice::Iter<'v, &'a T>),
}

impl<'a, T> Iterator for RowViewIter<'_, 'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            RowViewIter::Slice(iter) => iter.next(),
            RowViewIter::Picked(iter) => iter.next().copied(),
        }
    }
}

/// Narrows `rows` to those accepted by `matches`.
///
/// An empty term hands back the dataset itself without consulting `matches`.
pub fn filter_rows<'a, T, F>(rows: &'a [T], term: &str, matches: F) -> RowView<'a, T>
where
    F: Fn(&T, &str) -> bool,
{
    if term.is_empty() {
        return RowView::Slice(rows);
    }
    RowView::Picked(rows.iter().filter(|row| matches(row, term)).collect())
}

/// Case-insensitive substring test across the declared columns.
///
/// `needle` must already be lower-cased.
pub fn row_contains<T: GridRecord>(row: &T, columns: &[ColumnSpec], needle: &str) -> bool {
    columns.iter().any(|column| {
        row.field(&column.key)
            .to_string()
            .to_lowercase()
            .contains(needle)
    })
}
