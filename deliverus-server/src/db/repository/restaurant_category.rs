//! Restaurant Category Repository

use super::RepoResult;
use shared::models::RestaurantCategory;
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<RestaurantCategory>> {
    let categories = sqlx::query_as::<_, RestaurantCategory>(
        "SELECT id, name, created_at, updated_at FROM restaurant_categories ORDER BY name",
    )
    .fetch_all(pool)
    .await?;
    Ok(categories)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<RestaurantCategory>> {
    let category = sqlx::query_as::<_, RestaurantCategory>(
        "SELECT id, name, created_at, updated_at FROM restaurant_categories WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(category)
}
