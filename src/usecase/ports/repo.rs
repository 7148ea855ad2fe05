use thiserror::Error;

use crate::domain::entities::catalog::{Category, Product};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error("catalog store is unavailable: {0}")]
    Unavailable(String),
    #[error("{0}")]
    Message(String),
}

/// Storage for the catalog records shown on the admin pages.
pub trait CatalogRepository: Send + Sync {
    fn list_products(&self) -> Result<Vec<Product>, RepoError>;
    fn insert_product(&self, product: Product) -> Result<(), RepoError>;
    /// Removes every product whose id is listed; returns how many were removed.
    fn delete_products(&self, ids: &[i64]) -> Result<usize, RepoError>;

    fn list_categories(&self) -> Result<Vec<Category>, RepoError>;
    fn insert_category(&self, category: Category) -> Result<(), RepoError>;
    fn delete_categories(&self, ids: &[i64]) -> Result<usize, RepoError>;
}
