//! Product Repository

use super::RepoResult;
use shared::models::{Product, ProductCategory};
use sqlx::SqlitePool;

/// Menu of a restaurant, each product with its category, by `order`
pub async fn find_by_restaurant(pool: &SqlitePool, restaurant_id: i64) -> RepoResult<Vec<Product>> {
    #[derive(sqlx::FromRow)]
    struct Row {
        #[sqlx(flatten)]
        product: Product,
        category_name: Option<String>,
        category_created_at: Option<i64>,
        category_updated_at: Option<i64>,
    }

    let rows = sqlx::query_as::<_, Row>(
        r#"SELECT p.id, p.name, p.description, p.price, p.image, p."order", p.availability,
                  p.restaurant_id, p.product_category_id, p.created_at, p.updated_at,
                  pc.name AS category_name, pc.created_at AS category_created_at,
                  pc.updated_at AS category_updated_at
           FROM products p
           LEFT JOIN product_categories pc ON pc.id = p.product_category_id
           WHERE p.restaurant_id = ?
           ORDER BY p."order" ASC, p.id ASC"#,
    )
    .bind(restaurant_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| {
            let mut product = r.product;
            product.product_category = r.category_name.map(|name| ProductCategory {
                id: product.product_category_id,
                name,
                created_at: r.category_created_at.unwrap_or_default(),
                updated_at: r.category_updated_at.unwrap_or_default(),
            });
            product
        })
        .collect())
}
