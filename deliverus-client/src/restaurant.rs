//! Restaurant endpoints

use shared::models::{
    CanChangeStatus, PromoteRequest, Restaurant, RestaurantCategory, RestaurantCreate, RestaurantDetail,
    RestaurantStatus, RestaurantSummary, RestaurantUpdate, StatusChange,
};

use crate::{ClientResult, HttpClient};

/// Typed calls for the restaurant resource
///
/// Owner calls (`get_all`, `create`, `update`, `remove`, the status and
/// promotion calls) need a client with a token.
#[derive(Debug, Clone, Copy)]
pub struct RestaurantClient<'a> {
    http: &'a HttpClient,
}

impl<'a> RestaurantClient<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Restaurants owned by the authenticated user
    pub async fn get_all(&self) -> ClientResult<Vec<RestaurantSummary>> {
        self.http.get("users/myrestaurants").await
    }

    /// Every restaurant, public
    pub async fn list_public(&self) -> ClientResult<Vec<RestaurantSummary>> {
        self.http.get("restaurants").await
    }

    pub async fn get_detail(&self, id: i64) -> ClientResult<RestaurantDetail> {
        self.http.get(&format!("restaurants/{id}")).await
    }

    pub async fn get_restaurant_categories(&self) -> ClientResult<Vec<RestaurantCategory>> {
        self.http.get("restaurantCategories").await
    }

    pub async fn create(&self, data: &RestaurantCreate) -> ClientResult<Restaurant> {
        self.http.post("restaurants", data).await
    }

    pub async fn update(&self, id: i64, data: &RestaurantUpdate) -> ClientResult<Restaurant> {
        self.http.put(&format!("restaurants/{id}"), data).await
    }

    /// Returns the server's message, including "Could not delete restaurant."
    pub async fn remove(&self, id: i64) -> ClientResult<String> {
        self.http.delete(&format!("restaurants/{id}")).await
    }

    pub async fn can_change_status(&self, id: i64) -> ClientResult<bool> {
        let res: CanChangeStatus = self.http.get(&format!("restaurants/{id}/status")).await?;
        Ok(res.can_change)
    }

    pub async fn update_status(&self, id: i64, status: RestaurantStatus) -> ClientResult<Restaurant> {
        self.http
            .patch(&format!("restaurants/{id}/status"), &StatusChange { status })
            .await
    }

    pub async fn promote(&self, id: i64, promote: bool) -> ClientResult<Restaurant> {
        self.http
            .patch(
                &format!("restaurants/{id}/promote"),
                &PromoteRequest {
                    promote: Some(promote),
                },
            )
            .await
    }
}

impl HttpClient {
    /// Restaurant endpoints over this client
    pub fn restaurants(&self) -> RestaurantClient<'_> {
        RestaurantClient::new(self)
    }
}
