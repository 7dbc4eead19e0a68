//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
///
/// The list endpoint returns only `{id, name}`; the single-category endpoint
/// additionally carries the product-form template fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    /// Specification field names every product in this category must fill
    #[serde(default)]
    pub spec_names: Vec<String>,
    /// Detail section titles every product in this category must fill
    #[serde(default)]
    pub detail_titles: Vec<String>,
}

/// Category with its product count, used to populate filter dropdowns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryWithCount {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub count: u32,
}

/// Create/update category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
    #[serde(default)]
    pub spec_names: Vec<String>,
    #[serde(default)]
    pub detail_titles: Vec<String>,
}

impl CategoryPayload {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spec_names: Vec::new(),
            detail_titles: Vec::new(),
        }
    }
}
