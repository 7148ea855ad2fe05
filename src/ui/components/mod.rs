pub mod breadcrumb;
pub mod data_table;
pub mod modal;
pub mod sidebar;
