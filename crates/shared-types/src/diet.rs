use serde::{Deserialize, Serialize};

/// One meal within a diet plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    pub name: String,
    pub items: Vec<String>,
    /// Display time, e.g. "7:00 AM".
    pub time: String,
}

/// A nutrition plan offered to members.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DietPlan {
    pub id: String,
    pub name: String,
    pub description: String,
    pub calories: u32,
    pub meals: Vec<Meal>,
}
