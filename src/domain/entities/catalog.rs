use crate::domain::entities::grid::{CellValue, GridRecord, RowId};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub condition: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

impl Product {
    pub fn row_id(&self) -> RowId {
        RowId::from(self.id)
    }
}

impl GridRecord for Product {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => CellValue::Integer(self.id),
            "name" => CellValue::from(self.name.as_str()),
            "category" => CellValue::from(self.category.as_str()),
            "condition" => CellValue::from(self.condition.as_str()),
            "description" => CellValue::from(self.description.as_str()),
            "price" => CellValue::Decimal(self.price),
            "image_url" => CellValue::from(self.image_url.as_str()),
            _ => CellValue::Empty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image_url: String,
}

impl Category {
    pub fn row_id(&self) -> RowId {
        RowId::from(self.id)
    }
}

impl GridRecord for Category {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => CellValue::Integer(self.id),
            "name" => CellValue::from(self.name.as_str()),
            "description" => CellValue::from(self.description.as_str()),
            "image_url" => CellValue::from(self.image_url.as_str()),
            _ => CellValue::Empty,
        }
    }
}

/// Form payload for a product that has not been assigned an id yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub condition: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
    pub image_url: String,
}

pub const PRODUCT_CONDITIONS: [&str; 3] = ["new", "used", "refurbished"];

pub fn sample_products() -> Vec<Product> {
    [
        (1, "Item A", "Category 1"),
        (2, "Item B", "Category 2"),
        (3, "Item C", "Category 1"),
        (4, "Item D", "Category 3"),
        (5, "Item E", "Category 2"),
        (6, "Item F", "Category 3"),
        (7, "Item G", "Category 1"),
        (8, "Item H", "Category 2"),
    ]
    .into_iter()
    .map(|(id, name, category)| Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        condition: PRODUCT_CONDITIONS[0].to_string(),
        description: String::new(),
        price: 0.0,
        image_url: String::new(),
    })
    .collect()
}

pub fn sample_categories() -> Vec<Category> {
    [
        (1, "Category 1", "Leafy greens"),
        (2, "Category 2", "Root vegetables"),
        (3, "Category 3", "Herbs"),
    ]
    .into_iter()
    .map(|(id, name, description)| Category {
        id,
        name: name.to_string(),
        description: description.to_string(),
        image_url: String::new(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_fields_use_canonical_text() {
        let mut product = sample_products().remove(0);
        product.price = 12.5;

        assert_eq!(product.field("id").to_string(), "1");
        assert_eq!(product.field("price").to_string(), "12.5");
        assert_eq!(product.field("category").to_string(), "Category 1");
        assert_eq!(product.field("missing"), CellValue::Empty);
    }

    #[test]
    fn sample_products_have_unique_ids() {
        let products = sample_products();
        let mut ids: Vec<RowId> = products.iter().map(Product::row_id).collect();
        ids.sort();
        ids.dedup();

        assert_eq!(products.len(), 8);
        assert_eq!(ids.len(), products.len());
    }
}
