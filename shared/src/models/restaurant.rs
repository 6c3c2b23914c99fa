//! Restaurant Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::{Product, RestaurantCategory};
use crate::error::{AppError, ErrorCode};

/// Restaurant operating status
///
/// Serialized exactly as stored: `online`, `offline`, `closed`,
/// `temporarily closed`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum RestaurantStatus {
    Online,
    #[default]
    Offline,
    Closed,
    #[serde(rename = "temporarily closed")]
    #[cfg_attr(feature = "db", sqlx(rename = "temporarily closed"))]
    TemporarilyClosed,
}

/// Why a status change was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatusTransitionError {
    #[error("Cannot change status of a closed or temporarily closed restaurant")]
    Locked,
    #[error("Invalid status transition")]
    InvalidTransition,
    #[error("Cannot change status with pending orders")]
    PendingOrders,
}

impl From<StatusTransitionError> for AppError {
    fn from(err: StatusTransitionError) -> Self {
        let code = match err {
            StatusTransitionError::Locked => ErrorCode::RestaurantStatusLocked,
            StatusTransitionError::InvalidTransition => ErrorCode::InvalidStatusTransition,
            StatusTransitionError::PendingOrders => ErrorCode::RestaurantHasPendingOrders,
        };
        AppError::new(code)
    }
}

impl RestaurantStatus {
    pub const ALL: [RestaurantStatus; 4] = [
        RestaurantStatus::Online,
        RestaurantStatus::Offline,
        RestaurantStatus::Closed,
        RestaurantStatus::TemporarilyClosed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Closed => "closed",
            Self::TemporarilyClosed => "temporarily closed",
        }
    }

    /// Closed and temporarily closed restaurants never change status
    /// through the owner endpoints.
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Closed | Self::TemporarilyClosed)
    }

    /// Whether a change from `self` is currently allowed, ignoring the target.
    ///
    /// Mirrors what the owner UI asks before offering the toggle.
    pub fn can_change(&self, pending_orders: i64) -> Result<bool, StatusTransitionError> {
        if self.is_locked() {
            return Err(StatusTransitionError::Locked);
        }
        Ok(pending_orders == 0)
    }

    /// Apply a requested transition.
    ///
    /// Only online -> offline and offline -> online are legal, and only with
    /// zero pending orders.
    pub fn transition_to(
        self,
        target: RestaurantStatus,
        pending_orders: i64,
    ) -> Result<RestaurantStatus, StatusTransitionError> {
        match (self, target) {
            (Self::Online, Self::Offline) | (Self::Offline, Self::Online) => {
                if pending_orders > 0 {
                    Err(StatusTransitionError::PendingOrders)
                } else {
                    Ok(target)
                }
            }
            _ => Err(StatusTransitionError::InvalidTransition),
        }
    }
}

impl fmt::Display for RestaurantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown status string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown restaurant status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for RestaurantStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// Restaurant entity, as stored
///
/// Carries `user_id`, so it is only returned to the owner (create, update,
/// status and promotion changes). Public listings use [`RestaurantSummary`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub postal_code: String,
    pub url: Option<String>,
    pub shipping_costs: f64,
    pub average_service_minutes: Option<f64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub logo: Option<String>,
    pub hero_image: Option<String>,
    pub status: RestaurantStatus,
    pub promotion: bool,
    pub restaurant_category_id: i64,
    pub user_id: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Restaurant {
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

/// Public restaurant listing entry (no owning user)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSummary {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub postal_code: String,
    pub url: Option<String>,
    pub shipping_costs: f64,
    pub average_service_minutes: Option<f64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub logo: Option<String>,
    pub hero_image: Option<String>,
    pub status: RestaurantStatus,
    pub promotion: bool,
    pub restaurant_category_id: i64,
    pub created_at: i64,
    pub updated_at: i64,
    pub restaurant_category: Option<RestaurantCategory>,
}

impl RestaurantSummary {
    /// Drop the owning user and attach the category
    pub fn from_restaurant(r: Restaurant, category: Option<RestaurantCategory>) -> Self {
        Self {
            id: r.id,
            name: r.name,
            description: r.description,
            address: r.address,
            postal_code: r.postal_code,
            url: r.url,
            shipping_costs: r.shipping_costs,
            average_service_minutes: r.average_service_minutes,
            email: r.email,
            phone: r.phone,
            logo: r.logo,
            hero_image: r.hero_image,
            status: r.status,
            promotion: r.promotion,
            restaurant_category_id: r.restaurant_category_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
            restaurant_category: category,
        }
    }
}

/// Public restaurant detail: summary plus its products
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDetail {
    #[serde(flatten)]
    pub restaurant: RestaurantSummary,
    pub products: Vec<Product>,
}

/// Create restaurant payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantCreate {
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub postal_code: String,
    pub url: Option<String>,
    pub shipping_costs: f64,
    pub average_service_minutes: Option<f64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub logo: Option<String>,
    pub hero_image: Option<String>,
    pub restaurant_category_id: i64,
    pub status: Option<RestaurantStatus>,
}

/// Update restaurant payload (absent fields are left untouched)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub url: Option<String>,
    pub shipping_costs: Option<f64>,
    pub average_service_minutes: Option<f64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub logo: Option<String>,
    pub hero_image: Option<String>,
    pub restaurant_category_id: Option<i64>,
}

/// `PATCH /restaurants/{id}/status` body
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatusChange {
    pub status: RestaurantStatus,
}

/// `PATCH /restaurants/{id}/promote` body
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PromoteRequest {
    pub promote: Option<bool>,
}

/// `GET /restaurants/{id}/status` response
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CanChangeStatus {
    pub can_change: bool,
}
