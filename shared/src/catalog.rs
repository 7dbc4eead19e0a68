//! Product catalog queries
//!
//! Search, category narrowing and sorting for the storefront product grid.
//! Like order filters, a query is applied to the full cached product list on
//! every change, never to a previously filtered subset.

use crate::models::Product;
use serde::{Deserialize, Serialize};

/// Sort orders offered by the product grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductSort {
    #[default]
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

/// Display query over a cached product list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub search: String,
    pub category_id: Option<String>,
    pub sort: Option<ProductSort>,
}

impl ProductQuery {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category_id(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn with_sort(mut self, sort: ProductSort) -> Self {
        self.sort = Some(sort);
        self
    }

    fn matches(&self, product: &Product) -> bool {
        if let Some(category_id) = self.category_id.as_deref() {
            if !category_id.is_empty()
                && product.category_id.as_deref() != Some(category_id)
            {
                return false;
            }
        }

        let query = self.search.trim().to_lowercase();
        if !query.is_empty() {
            let hit = product.name.to_lowercase().contains(&query)
                || product.description.to_lowercase().contains(&query)
                || product.category.to_lowercase().contains(&query);
            if !hit {
                return false;
            }
        }

        true
    }

    /// Filter and sort a cached product list into a fresh display list
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut visible: Vec<Product> = products
            .iter()
            .filter(|product| self.matches(product))
            .cloned()
            .collect();

        match self.sort {
            Some(ProductSort::PriceAsc) => {
                visible.sort_by(|a, b| a.price.total_cmp(&b.price));
            }
            Some(ProductSort::PriceDesc) => {
                visible.sort_by(|a, b| b.price.total_cmp(&a.price));
            }
            Some(ProductSort::NameAsc) => {
                visible.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            }
            Some(ProductSort::NameDesc) => {
                visible.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase()));
            }
            None => {}
        }

        visible
    }
}
