//! Restaurant Category Model

use serde::{Deserialize, Serialize};

/// Restaurant category (e.g. "Pizza", "Sushi")
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RestaurantCategory {
    pub id: i64,
    pub name: String,
    pub created_at: i64,
    pub updated_at: i64,
}
