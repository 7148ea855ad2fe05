use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::entities::catalog::{Category, NewCategory, NewProduct, Product};
use crate::domain::entities::grid::RowId;
use crate::usecase::ports::repo::{CatalogRepository, RepoError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("name is required")]
    MissingName,
    #[error("price must not be negative")]
    NegativePrice,
    #[error(transparent)]
    Repo(#[from] RepoError),
}

pub struct CatalogService {
    repo: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }

    pub fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.repo.list_products()?)
    }

    pub fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        Ok(self.repo.list_categories()?)
    }

    pub fn create_product(&self, input: NewProduct) -> Result<Product, CatalogError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(CatalogError::MissingName);
        }
        if input.price < 0.0 {
            return Err(CatalogError::NegativePrice);
        }

        let existing = self.repo.list_products()?;
        let product = Product {
            id: next_id(existing.iter().map(|product| product.id)),
            name: name.to_string(),
            category: input.category,
            condition: input.condition,
            description: input.description,
            price: input.price,
            image_url: input.image_url,
        };
        self.repo.insert_product(product.clone())?;
        info!(id = product.id, "product created");
        Ok(product)
    }

    pub fn create_category(&self, input: NewCategory) -> Result<Category, CatalogError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(CatalogError::MissingName);
        }

        let existing = self.repo.list_categories()?;
        let category = Category {
            id: next_id(existing.iter().map(|category| category.id)),
            name: name.to_string(),
            description: input.description,
            image_url: input.image_url,
        };
        self.repo.insert_category(category.clone())?;
        info!(id = category.id, "category created");
        Ok(category)
    }

    pub fn delete_products(&self, ids: &[RowId]) -> Result<usize, CatalogError> {
        let removed = self.repo.delete_products(&numeric_ids(ids))?;
        info!(removed, "products deleted");
        Ok(removed)
    }

    pub fn delete_categories(&self, ids: &[RowId]) -> Result<usize, CatalogError> {
        let removed = self.repo.delete_categories(&numeric_ids(ids))?;
        info!(removed, "categories deleted");
        Ok(removed)
    }
}

fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().map_or(1, |max| max + 1)
}

/// Row ids are the decimal form of the record id; anything else is skipped.
fn numeric_ids(ids: &[RowId]) -> Vec<i64> {
    ids.iter()
        .filter_map(|id| match id.as_str().parse::<i64>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(id = %id, "ignoring non-numeric row id");
                None
            }
        })
        .collect()
}
