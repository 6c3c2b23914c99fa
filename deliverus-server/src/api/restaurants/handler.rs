//! Restaurant API Handlers

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{order, product, restaurant, restaurant_category};
use crate::security_log;
use crate::utils::validation::{validate_restaurant_create, validate_restaurant_update};
use shared::models::{
    CanChangeStatus, PromoteRequest, Restaurant, RestaurantCreate, RestaurantDetail,
    RestaurantSummary, RestaurantUpdate, StatusChange, StatusTransitionError,
};
use shared::{AppError, AppResult, ErrorCode};
use sqlx::SqlitePool;

const COULD_NOT_DELETE: &str = "Could not delete restaurant.";

async fn load(pool: &SqlitePool, id: i64) -> AppResult<Restaurant> {
    restaurant::find_by_id(pool, id)
        .await?
        .ok_or_else(AppError::restaurant_not_found)
}

/// Load a restaurant the caller must own
async fn load_owned(pool: &SqlitePool, id: i64, user: &CurrentUser) -> AppResult<Restaurant> {
    let restaurant = load(pool, id).await?;
    ensure_owner(&restaurant, user)?;
    Ok(restaurant)
}

fn ensure_owner(restaurant: &Restaurant, user: &CurrentUser) -> AppResult<()> {
    if restaurant.is_owned_by(user.id) {
        return Ok(());
    }
    security_log!(
        "WARN",
        "not_owner",
        restaurant_id = restaurant.id,
        user_id = user.id
    );
    Err(AppError::not_owner())
}

async fn ensure_category_exists(pool: &SqlitePool, category_id: i64) -> AppResult<()> {
    restaurant_category::find_by_id(pool, category_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::new(ErrorCode::RestaurantCategoryNotFound))
}

/// GET /restaurants - all restaurants, by category name
pub async fn index(State(state): State<ServerState>) -> AppResult<Json<Vec<RestaurantSummary>>> {
    let restaurants = restaurant::find_all(&state.pool).await?;
    Ok(Json(restaurants))
}

/// GET /users/myrestaurants - the caller's restaurants, by status then name
pub async fn index_owner(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<RestaurantSummary>>> {
    let restaurants = restaurant::find_by_owner(&state.pool, user.id).await?;
    Ok(Json(restaurants))
}

/// GET /restaurants/{restaurant_id} - detail with menu
pub async fn show(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<RestaurantDetail>> {
    let summary = restaurant::find_summary(&state.pool, id)
        .await?
        .ok_or_else(AppError::restaurant_not_found)?;
    let products = product::find_by_restaurant(&state.pool, id).await?;
    Ok(Json(RestaurantDetail {
        restaurant: summary,
        products,
    }))
}

/// POST /restaurants - create, owned by the caller
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<RestaurantCreate>,
) -> AppResult<Json<Restaurant>> {
    validate_restaurant_create(&payload)?;
    ensure_category_exists(&state.pool, payload.restaurant_category_id).await?;

    let created = restaurant::create(&state.pool, user.id, payload).await?;
    tracing::info!(
        restaurant_id = created.id,
        user_id = user.id,
        username = %user.username,
        "Restaurant created"
    );
    Ok(Json(created))
}

/// PUT /restaurants/{restaurant_id} - update (owner only)
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<RestaurantUpdate>,
) -> AppResult<Json<Restaurant>> {
    load_owned(&state.pool, id, &user).await?;
    validate_restaurant_update(&payload)?;
    if let Some(category_id) = payload.restaurant_category_id {
        ensure_category_exists(&state.pool, category_id).await?;
    }

    let updated = restaurant::update(&state.pool, id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /restaurants/{restaurant_id} - delete (owner only)
///
/// A missing restaurant is not an error: the body says nothing was deleted.
pub async fn destroy(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<String>> {
    let Some(existing) = restaurant::find_by_id(&state.pool, id).await? else {
        return Ok(Json(COULD_NOT_DELETE.to_string()));
    };
    ensure_owner(&existing, &user)?;

    let message = if restaurant::delete(&state.pool, id).await? {
        tracing::info!(restaurant_id = id, user_id = user.id, "Restaurant deleted");
        format!("Successfully deleted restaurant id.{id}")
    } else {
        COULD_NOT_DELETE.to_string()
    };
    Ok(Json(message))
}

/// GET /restaurants/{restaurant_id}/status - whether the status may be toggled now
pub async fn can_change_status(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<CanChangeStatus>> {
    let restaurant = load(&state.pool, id).await?;
    let pending = order::find_pending(&state.pool, id).await?;
    let can_change = restaurant.status.can_change(pending.len() as i64)?;
    Ok(Json(CanChangeStatus { can_change }))
}

/// PATCH /restaurants/{restaurant_id}/status - toggle online/offline (owner only)
///
/// The body is read after the ownership check; a missing or unknown status
/// is an invalid transition.
pub async fn update_status(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    body: Bytes,
) -> AppResult<Json<Restaurant>> {
    let current = load_owned(&state.pool, id, &user).await?;
    let requested = serde_json::from_slice::<StatusChange>(&body)
        .map_err(|_| StatusTransitionError::InvalidTransition)?
        .status;

    let pending = order::find_pending(&state.pool, id).await?;
    let next = current
        .status
        .transition_to(requested, pending.len() as i64)
        .inspect_err(|e| {
            tracing::debug!(
                restaurant_id = id,
                pending_orders = pending.len(),
                error = %e,
                "Status change rejected"
            );
        })?;

    let updated = restaurant::update_status(&state.pool, id, next).await?;
    tracing::info!(
        restaurant_id = id,
        from = %current.status,
        to = %next,
        "Restaurant status changed"
    );
    Ok(Json(updated))
}

/// PATCH /restaurants/{restaurant_id}/promote - set the promotion flag (owner only)
///
/// The body is optional; anything other than `{"promote": false}` promotes.
pub async fn promote(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    body: Bytes,
) -> AppResult<Json<Restaurant>> {
    load_owned(&state.pool, id, &user).await?;
    let request = serde_json::from_slice::<PromoteRequest>(&body).unwrap_or_default();
    let updated =
        restaurant::set_promotion(&state.pool, id, request.promote.unwrap_or(true)).await?;
    Ok(Json(updated))
}
