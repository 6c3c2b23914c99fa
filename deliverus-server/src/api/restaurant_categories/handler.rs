//! Restaurant Category API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::restaurant_category;
use shared::AppResult;
use shared::models::RestaurantCategory;

/// GET /restaurantCategories
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<RestaurantCategory>>> {
    let categories = restaurant_category::find_all(&state.pool).await?;
    Ok(Json(categories))
}
