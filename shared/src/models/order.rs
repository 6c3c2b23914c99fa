//! Order Model
//!
//! Only what the restaurant side needs: an order is pending until
//! `delivered_at` is set.

use serde::{Deserialize, Serialize};

/// Customer order placed at a restaurant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub created_at: i64,
    pub started_at: Option<i64>,
    pub sent_at: Option<i64>,
    pub delivered_at: Option<i64>,
    pub price: f64,
    pub address: String,
    pub shipping_costs: f64,
    pub restaurant_id: i64,
    pub user_id: i64,
}
