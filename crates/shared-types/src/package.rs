use serde::{Deserialize, Serialize};

/// A membership fee package.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeePackage {
    pub id: String,
    pub name: String,
    pub duration_months: u32,
    /// Whole-rupee price for the full duration.
    pub price: i64,
    pub features: Vec<String>,
}
