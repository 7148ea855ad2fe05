use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::catalog::{sample_categories, sample_products, Category, Product};
use crate::usecase::ports::repo::{CatalogRepository, RepoError};

/// Process-local catalog; contents live as long as the app does.
#[derive(Debug, Default)]
pub struct MemoryCatalogRepo {
    products: Mutex<Vec<Product>>,
    categories: Mutex<Vec<Category>>,
}

impl MemoryCatalogRepo {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products: Mutex::new(products),
            categories: Mutex::new(categories),
        }
    }

    pub fn seeded() -> Self {
        Self::new(sample_products(), sample_categories())
    }
}

fn lock<'a, T>(mutex: &'a Mutex<Vec<T>>, what: &str) -> Result<MutexGuard<'a, Vec<T>>, RepoError> {
    mutex
        .lock()
        .map_err(|_| RepoError::Unavailable(format!("{what} lock poisoned")))
}

fn remove_ids<T>(rows: &mut Vec<T>, ids: &[i64], id_of: impl Fn(&T) -> i64) -> usize {
    let before = rows.len();
    rows.retain(|row| !ids.contains(&id_of(row)));
    before - rows.len()
}

impl CatalogRepository for MemoryCatalogRepo {
    fn list_products(&self) -> Result<Vec<Product>, RepoError> {
        Ok(lock(&self.products, "products")?.clone())
    }

    fn insert_product(&self, product: Product) -> Result<(), RepoError> {
        let mut products = lock(&self.products, "products")?;
        if products.iter().any(|existing| existing.id == product.id) {
            return Err(RepoError::Message(format!(
                "product #{} already exists",
                product.id
            )));
        }
        products.push(product);
        Ok(())
    }

    fn delete_products(&self, ids: &[i64]) -> Result<usize, RepoError> {
        let mut products = lock(&self.products, "products")?;
        Ok(remove_ids(&mut *products, ids, |product| product.id))
    }

    fn list_categories(&self) -> Result<Vec<Category>, RepoError> {
        Ok(lock(&self.categories, "categories")?.clone())
    }

    fn insert_category(&self, category: Category) -> Result<(), RepoError> {
        let mut categories = lock(&self.categories, "categories")?;
        if categories.iter().any(|existing| existing.id == category.id) {
            return Err(RepoError::Message(format!(
                "category #{} already exists",
                category.id
            )));
        }
        categories.push(category);
        Ok(())
    }

    fn delete_categories(&self, ids: &[i64]) -> Result<usize, RepoError> {
        let mut categories = lock(&self.categories, "categories")?;
        Ok(remove_ids(&mut *categories, ids, |category| category.id))
    }
}
