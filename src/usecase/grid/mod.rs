//! Client-side data grid: search, paging and multi-row selection over a
//! caller-owned dataset.

pub mod engine;
pub mod filter;
pub mod pagination;
pub mod selection;

pub use engine::{DataGrid, GridConfig, GridEvent, GridSnapshot, SnapshotRow};
pub use filter::RowView;
pub use pagination::PageSizeChoice;
pub use selection::SelectionSet;
