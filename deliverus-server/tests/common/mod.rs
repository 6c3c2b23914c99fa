//! Test harness: the full app over an in-memory database

#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use deliverus_server::db::repository::restaurant;
use deliverus_server::{Config, DbService, ServerState, build_app};
use http::{Method, Request, StatusCode, header};
use serde_json::Value;
use shared::models::{RestaurantCreate, RestaurantStatus};
use tower::ServiceExt;

pub struct TestApp {
    pub state: ServerState,
    pub router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl TestApp {
    pub async fn new() -> Self {
        let config = Config::with_overrides("sqlite::memory:", 0).expect("test config");
        let db = DbService::in_memory().await.expect("in-memory database");
        let state = ServerState::new(config, db);
        let router = build_app().with_state(state.clone());
        Self { state, router }
    }

    pub fn token(&self, user_id: i64) -> String {
        self.state
            .jwt_service
            .generate_token(user_id, &format!("owner{user_id}"), "owner")
            .expect("token")
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        TestResponse {
            status,
            headers,
            body: body.to_vec(),
        }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn category_id(&self, name: &str) -> i64 {
        sqlx::query_scalar("SELECT id FROM restaurant_categories WHERE name = ?")
            .bind(name)
            .fetch_one(&self.state.pool)
            .await
            .unwrap()
    }

    pub async fn product_category_id(&self, name: &str) -> i64 {
        sqlx::query_scalar("SELECT id FROM product_categories WHERE name = ?")
            .bind(name)
            .fetch_one(&self.state.pool)
            .await
            .unwrap()
    }

    /// Insert a restaurant directly and force its status
    pub async fn seed_restaurant(
        &self,
        owner: i64,
        name: &str,
        category: &str,
        status: RestaurantStatus,
    ) -> i64 {
        let data = RestaurantCreate {
            name: name.to_string(),
            description: Some(format!("{name} description")),
            address: "Av. Reina Mercedes s/n".to_string(),
            postal_code: "41012".to_string(),
            url: None,
            shipping_costs: 2.5,
            average_service_minutes: Some(30.0),
            email: None,
            phone: None,
            logo: None,
            hero_image: None,
            restaurant_category_id: self.category_id(category).await,
            status: Some(status),
        };
        restaurant::create(&self.state.pool, owner, data)
            .await
            .unwrap()
            .id
    }

    pub async fn seed_order(&self, restaurant_id: i64, delivered: bool) -> i64 {
        let delivered_at = delivered.then_some(1_700_000_900_000_i64);
        sqlx::query_scalar(
            "INSERT INTO orders (created_at, started_at, sent_at, delivered_at, price, address, \
             shipping_costs, restaurant_id, user_id) \
             VALUES (1700000000000, NULL, NULL, ?, 20.0, 'Calle Betis 5', 2.5, ?, 99) RETURNING id",
        )
        .bind(delivered_at)
        .bind(restaurant_id)
        .fetch_one(&self.state.pool)
        .await
        .unwrap()
    }

    pub async fn seed_product(&self, restaurant_id: i64, name: &str, order: i64, category: &str) -> i64 {
        let category_id = self.product_category_id(category).await;
        sqlx::query_scalar(
            r#"INSERT INTO products (name, description, price, image, "order", availability,
                                     restaurant_id, product_category_id)
               VALUES (?, NULL, 9.5, NULL, ?, 1, ?, ?) RETURNING id"#,
        )
        .bind(name)
        .bind(order)
        .bind(restaurant_id)
        .bind(category_id)
        .fetch_one(&self.state.pool)
        .await
        .unwrap()
    }
}
