// deliverus-client/tests/restaurant_client.rs
// RestaurantClient against the real server router on an ephemeral port

use deliverus_client::models::{RestaurantCreate, RestaurantStatus, RestaurantUpdate};
use deliverus_client::{ClientConfig, ClientError, HttpClient};
use deliverus_server::{Config, DbService, ServerState, build_app};

const OWNER: i64 = 10;
const OTHER: i64 = 20;

struct Harness {
    base_url: String,
    state: ServerState,
}

impl Harness {
    async fn start() -> Self {
        let config = Config::with_overrides("sqlite::memory:", 0).unwrap();
        let db = DbService::in_memory().await.unwrap();
        let state = ServerState::new(config, db);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = build_app().with_state(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    fn anonymous(&self) -> HttpClient {
        ClientConfig::new(&self.base_url)
            .with_timeout(5)
            .build_http_client()
            .unwrap()
    }

    fn as_user(&self, user_id: i64) -> HttpClient {
        let token = self
            .state
            .jwt_service
            .generate_token(user_id, "owner", "owner")
            .unwrap();
        self.anonymous().with_token(token)
    }

    async fn add_pending_order(&self, restaurant_id: i64) {
        sqlx::query(
            "INSERT INTO orders (created_at, price, address, shipping_costs, restaurant_id, user_id) \
             VALUES (1700000000000, 12.0, 'Calle Tetuán 2', 1.0, ?, 99)",
        )
        .bind(restaurant_id)
        .execute(&self.state.pool)
        .await
        .unwrap();
    }
}

fn new_restaurant(name: &str, category_id: i64) -> RestaurantCreate {
    RestaurantCreate {
        name: name.to_string(),
        description: Some("Cocina casera".to_string()),
        address: "Plaza Nueva 1".to_string(),
        postal_code: "41001".to_string(),
        url: Some("https://example.org".to_string()),
        shipping_costs: 2.0,
        average_service_minutes: Some(20.0),
        email: Some("hola@example.org".to_string()),
        phone: Some("954000000".to_string()),
        logo: None,
        hero_image: None,
        restaurant_category_id: category_id,
        status: Some(RestaurantStatus::Online),
    }
}

#[tokio::test]
async fn test_owner_lifecycle() {
    let harness = Harness::start().await;
    let owner = harness.as_user(OWNER);
    let api = owner.restaurants();

    let categories = api.get_restaurant_categories().await.unwrap();
    let category = categories.iter().find(|c| c.name == "Spanish").unwrap();

    let created = api.create(&new_restaurant("La Bodeguita", category.id)).await.unwrap();
    assert_eq!(created.user_id, OWNER);
    assert_eq!(created.status, RestaurantStatus::Online);
    assert!(!created.promotion);

    let mine = api.get_all().await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].restaurant_category.as_ref().unwrap().name, "Spanish");

    let updated = api
        .update(
            created.id,
            &RestaurantUpdate {
                name: Some("La Bodeguita de Triana".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "La Bodeguita de Triana");

    assert!(api.can_change_status(created.id).await.unwrap());
    let offline = api
        .update_status(created.id, RestaurantStatus::Offline)
        .await
        .unwrap();
    assert_eq!(offline.status, RestaurantStatus::Offline);

    let promoted = api.promote(created.id, true).await.unwrap();
    assert!(promoted.promotion);

    let detail = harness.anonymous().restaurants().get_detail(created.id).await.unwrap();
    assert_eq!(detail.restaurant.name, "La Bodeguita de Triana");
    assert!(detail.products.is_empty());

    let message = api.remove(created.id).await.unwrap();
    assert_eq!(message, format!("Successfully deleted restaurant id.{}", created.id));

    let message = api.remove(created.id).await.unwrap();
    assert_eq!(message, "Could not delete restaurant.");
}

#[tokio::test]
async fn test_public_listing() {
    let harness = Harness::start().await;
    let owner = harness.as_user(OWNER);
    let api = owner.restaurants();
    let categories = api.get_restaurant_categories().await.unwrap();

    api.create(&new_restaurant("Uno", categories[0].id)).await.unwrap();
    api.create(&new_restaurant("Dos", categories[1].id)).await.unwrap();

    let public = harness.anonymous().restaurants().list_public().await.unwrap();
    assert_eq!(public.len(), 2);
}

#[tokio::test]
async fn test_errors_map_to_variants() {
    let harness = Harness::start().await;
    let owner = harness.as_user(OWNER);
    let intruder = harness.as_user(OTHER);
    let categories = owner.restaurants().get_restaurant_categories().await.unwrap();
    let created = owner
        .restaurants()
        .create(&new_restaurant("Private", categories[0].id))
        .await
        .unwrap();

    // 401 without a token
    let err = harness.anonymous().restaurants().get_all().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));

    // 403 for somebody else's restaurant
    let err = intruder.restaurants().promote(created.id, true).await.unwrap_err();
    match err {
        ClientError::Forbidden(msg) => {
            assert_eq!(msg, "Not enough privileges. This entity does not belong to you")
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // 404 for a missing restaurant
    let err = owner.restaurants().get_detail(9999).await.unwrap_err();
    match err {
        ClientError::NotFound(msg) => assert_eq!(msg, "Restaurant not found"),
        other => panic!("unexpected error: {other:?}"),
    }

    // 400 for a blocked transition
    harness.add_pending_order(created.id).await;
    assert!(!owner.restaurants().can_change_status(created.id).await.unwrap());
    let err = owner
        .restaurants()
        .update_status(created.id, RestaurantStatus::Offline)
        .await
        .unwrap_err();
    match err {
        ClientError::Validation(msg) => assert_eq!(msg, "Cannot change status with pending orders"),
        other => panic!("unexpected error: {other:?}"),
    }
}
