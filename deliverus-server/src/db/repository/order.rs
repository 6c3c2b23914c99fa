//! Order Repository
//!
//! Orders are written elsewhere in the platform; the restaurant side only
//! reads the ones still pending.

use super::RepoResult;
use shared::models::Order;
use sqlx::SqlitePool;

/// Orders of a restaurant with no delivery timestamp, oldest first
pub async fn find_pending(pool: &SqlitePool, restaurant_id: i64) -> RepoResult<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>(
        "SELECT id, created_at, started_at, sent_at, delivered_at, price, address, \
         shipping_costs, restaurant_id, user_id \
         FROM orders WHERE restaurant_id = ? AND delivered_at IS NULL \
         ORDER BY created_at ASC",
    )
    .bind(restaurant_id)
    .fetch_all(pool)
    .await?;
    Ok(orders)
}
