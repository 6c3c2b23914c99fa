//! Restaurant Repository

use super::{RepoError, RepoResult};
use shared::models::{
    Restaurant, RestaurantCategory, RestaurantCreate, RestaurantStatus, RestaurantSummary,
    RestaurantUpdate,
};
use shared::util::now_millis;
use sqlx::SqlitePool;

const COLUMNS: &str = "r.id, r.name, r.description, r.address, r.postal_code, r.url, \
    r.shipping_costs, r.average_service_minutes, r.email, r.phone, r.logo, r.hero_image, \
    r.status, r.promotion, r.restaurant_category_id, r.user_id, r.created_at, r.updated_at";

/// Status in declaration order: online, offline, closed, temporarily closed
const STATUS_RANK: &str = "CASE r.status WHEN 'online' THEN 0 WHEN 'offline' THEN 1 \
    WHEN 'closed' THEN 2 ELSE 3 END";

#[derive(sqlx::FromRow)]
struct SummaryRow {
    #[sqlx(flatten)]
    restaurant: Restaurant,
    category_name: Option<String>,
    category_created_at: Option<i64>,
    category_updated_at: Option<i64>,
}

impl From<SummaryRow> for RestaurantSummary {
    fn from(row: SummaryRow) -> Self {
        let category = row.category_name.map(|name| RestaurantCategory {
            id: row.restaurant.restaurant_category_id,
            name,
            created_at: row.category_created_at.unwrap_or_default(),
            updated_at: row.category_updated_at.unwrap_or_default(),
        });
        RestaurantSummary::from_restaurant(row.restaurant, category)
    }
}

async fn find_summaries(
    pool: &SqlitePool,
    filter: &str,
    order_by: &str,
    user_id: Option<i64>,
) -> RepoResult<Vec<RestaurantSummary>> {
    let sql = format!(
        "SELECT {COLUMNS}, rc.name AS category_name, rc.created_at AS category_created_at, \
         rc.updated_at AS category_updated_at \
         FROM restaurants r \
         LEFT JOIN restaurant_categories rc ON rc.id = r.restaurant_category_id \
         {filter} ORDER BY {order_by}"
    );
    let mut query = sqlx::query_as::<_, SummaryRow>(&sql);
    if let Some(user_id) = user_id {
        query = query.bind(user_id);
    }
    let rows = query.fetch_all(pool).await?;
    Ok(rows.into_iter().map(RestaurantSummary::from).collect())
}

/// Every restaurant with its category, by category name
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<RestaurantSummary>> {
    find_summaries(pool, "", "rc.name ASC, r.id ASC", None).await
}

/// Restaurants owned by `user_id`, by status then name
pub async fn find_by_owner(pool: &SqlitePool, user_id: i64) -> RepoResult<Vec<RestaurantSummary>> {
    let order_by = format!("{STATUS_RANK} ASC, r.name ASC");
    find_summaries(pool, "WHERE r.user_id = ?", &order_by, Some(user_id)).await
}

/// One restaurant as a public summary (category attached)
pub async fn find_summary(pool: &SqlitePool, id: i64) -> RepoResult<Option<RestaurantSummary>> {
    let sql = format!(
        "SELECT {COLUMNS}, rc.name AS category_name, rc.created_at AS category_created_at, \
         rc.updated_at AS category_updated_at \
         FROM restaurants r \
         LEFT JOIN restaurant_categories rc ON rc.id = r.restaurant_category_id \
         WHERE r.id = ?"
    );
    let row = sqlx::query_as::<_, SummaryRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(RestaurantSummary::from))
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Restaurant>> {
    let sql = format!("SELECT {COLUMNS} FROM restaurants r WHERE r.id = ?");
    let restaurant = sqlx::query_as::<_, Restaurant>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(restaurant)
}

async fn fetch_existing(pool: &SqlitePool, id: i64) -> RepoResult<Restaurant> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Restaurant {id}")))
}

/// Insert a restaurant owned by `user_id`
pub async fn create(pool: &SqlitePool, user_id: i64, data: RestaurantCreate) -> RepoResult<Restaurant> {
    let now = now_millis();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO restaurants (name, description, address, postal_code, url, shipping_costs, \
         average_service_minutes, email, phone, logo, hero_image, status, promotion, \
         restaurant_category_id, user_id, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 0, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(&data.address)
    .bind(&data.postal_code)
    .bind(&data.url)
    .bind(data.shipping_costs)
    .bind(data.average_service_minutes)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.logo)
    .bind(&data.hero_image)
    .bind(data.status.unwrap_or_default())
    .bind(data.restaurant_category_id)
    .bind(user_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create restaurant".into()))
}

/// Apply the fields present in `data`
pub async fn update(pool: &SqlitePool, id: i64, data: RestaurantUpdate) -> RepoResult<Restaurant> {
    let rows = sqlx::query(
        "UPDATE restaurants SET \
         name = COALESCE(?1, name), \
         description = COALESCE(?2, description), \
         address = COALESCE(?3, address), \
         postal_code = COALESCE(?4, postal_code), \
         url = COALESCE(?5, url), \
         shipping_costs = COALESCE(?6, shipping_costs), \
         average_service_minutes = COALESCE(?7, average_service_minutes), \
         email = COALESCE(?8, email), \
         phone = COALESCE(?9, phone), \
         logo = COALESCE(?10, logo), \
         hero_image = COALESCE(?11, hero_image), \
         restaurant_category_id = COALESCE(?12, restaurant_category_id), \
         updated_at = ?13 \
         WHERE id = ?14",
    )
    .bind(data.name)
    .bind(data.description)
    .bind(data.address)
    .bind(data.postal_code)
    .bind(data.url)
    .bind(data.shipping_costs)
    .bind(data.average_service_minutes)
    .bind(data.email)
    .bind(data.phone)
    .bind(data.logo)
    .bind(data.hero_image)
    .bind(data.restaurant_category_id)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Restaurant {id}")));
    }
    fetch_existing(pool, id).await
}

pub async fn update_status(
    pool: &SqlitePool,
    id: i64,
    status: RestaurantStatus,
) -> RepoResult<Restaurant> {
    let rows = sqlx::query("UPDATE restaurants SET status = ?, updated_at = ? WHERE id = ?")
        .bind(status)
        .bind(now_millis())
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Restaurant {id}")));
    }
    fetch_existing(pool, id).await
}

pub async fn set_promotion(pool: &SqlitePool, id: i64, promotion: bool) -> RepoResult<Restaurant> {
    let rows = sqlx::query("UPDATE restaurants SET promotion = ?, updated_at = ? WHERE id = ?")
        .bind(promotion)
        .bind(now_millis())
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Restaurant {id}")));
    }
    fetch_existing(pool, id).await
}

/// Delete a restaurant; products and orders go with it
///
/// Returns `false` when nothing was deleted.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM restaurants WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
