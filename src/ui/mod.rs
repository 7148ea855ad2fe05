pub mod components;
pub mod navigation;
pub mod pages;
pub mod state;
pub mod styles;
