use serde::{Deserialize, Serialize};

/// A supplement-store inventory item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Supplement {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Whole-rupee price.
    pub price: i64,
    pub category: String,
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Supplement {
    /// Case-insensitive match against name, description and category, used by
    /// the store search boxes.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q)
            || self.description.to_lowercase().contains(&q)
            || self.category.to_lowercase().contains(&q)
    }
}
