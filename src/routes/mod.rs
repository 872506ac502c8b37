pub mod influ_products;
pub mod products;
pub mod profiles;

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(profiles::routes())
        .merge(influ_products::routes())
        .merge(products::routes())
}

/// The full application: catalog routes under `/api`, CORS and request
/// tracing on everything.
pub fn app(state: AppState) -> Router {
    let api = create_router()
        .route("/", get(|| async { "Influencer catalog API" }))
        .route("/health", get(health_check));

    Router::new()
        .nest("/api", api)
        .layer(middleware::from_fn(cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use axum::response::Response;
    use chrono::{TimeZone, Utc};
    use mockall::predicate::eq;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::models::{InfluProduct, Influencer, Product, Timestamp};
    use crate::store::MockCatalogStore;

    fn influencer() -> Influencer {
        let ts = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single().map(Timestamp::from);
        Influencer {
            id: 1,
            name: "A".into(),
            description: None,
            dp: None,
            created_at: ts,
            updated_at: ts,
        }
    }

    fn listing() -> InfluProduct {
        InfluProduct {
            id: 10,
            influ_id: Some(1),
            poster: None,
            name: "Picks".into(),
            created_at: None,
            updated_at: None,
            influencer: Some(influencer()),
        }
    }

    fn product() -> Product {
        Product {
            id: 100,
            influ_product_id: Some(10),
            image: None,
            description: None,
            price: Some(9.99),
            likes: Some(3),
            name: "Jacket".into(),
            created_at: None,
            updated_at: None,
            influ_product: Some(listing()),
        }
    }

    async fn send(store: MockCatalogStore, method: Method, uri: &str) -> Response {
        app(AppState::new(store))
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn get_json(store: MockCatalogStore, uri: &str) -> (StatusCode, Value) {
        let response = send(store, Method::GET, uri).await;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn profiles_are_wrapped_in_envelope() {
        let mut store = MockCatalogStore::new();
        store
            .expect_list_influencers()
            .times(1)
            .returning(|| Ok(vec![influencer()]));

        let (status, body) = get_json(store, "/api/profiles").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"][0]["id"], json!(1));
        assert_eq!(body["data"][0]["name"], json!("A"));
        assert_eq!(body["data"][0]["created_at"], json!("2025-01-01T00:00:00Z"));
        assert!(body["data"][0].get("influencer").is_none());
    }

    #[tokio::test]
    async fn empty_store_yields_empty_array() {
        let mut store = MockCatalogStore::new();
        store.expect_list_influencers().returning(|| Ok(Vec::new()));

        let (status, body) = get_json(store, "/api/profiles").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true, "data": [] }));
    }

    #[tokio::test]
    async fn store_failure_is_generic_500() {
        let mut store = MockCatalogStore::new();
        store
            .expect_list_influ_products()
            .returning(|| Err(sqlx::Error::PoolTimedOut));

        let (status, body) = get_json(store, "/api/influ-products").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to fetch influencer products" }));
    }

    #[tokio::test]
    async fn influ_products_embed_influencer() {
        let mut store = MockCatalogStore::new();
        store
            .expect_list_influ_products()
            .returning(|| Ok(vec![listing()]));

        let (status, body) = get_json(store, "/api/influ-products").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["id"], json!(10));
        assert_eq!(body["data"][0]["influencer"]["id"], json!(1));
    }

    #[tokio::test]
    async fn products_by_listing_passes_listing_id() {
        let mut store = MockCatalogStore::new();
        store
            .expect_list_products_by_influ_product()
            .with(eq(10))
            .times(1)
            .returning(|_| Ok(vec![product()]));

        let (status, body) = get_json(store, "/api/products/10").await;
        assert_eq!(status, StatusCode::OK);
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["id"], json!(100));
    }

    #[tokio::test]
    async fn non_numeric_listing_id_matches_nothing() {
        let mut store = MockCatalogStore::new();
        store.expect_list_products_by_influ_product().never();

        let (status, body) = get_json(store, "/api/products/abc").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true, "data": [] }));
    }

    #[tokio::test]
    async fn product_by_id_returns_nested_chain() {
        let mut store = MockCatalogStore::new();
        store
            .expect_get_product()
            .with(eq(100))
            .returning(|_| Ok(Some(product())));

        let (status, body) = get_json(store, "/api/product/100").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"]["id"], json!(100));
        assert_eq!(body["data"]["influ_product"]["id"], json!(10));
        assert_eq!(body["data"]["influ_product"]["influencer"]["id"], json!(1));
        assert_eq!(body["data"]["influ_product"]["influencer"]["name"], json!("A"));
    }

    #[tokio::test]
    async fn missing_product_is_404() {
        let mut store = MockCatalogStore::new();
        store.expect_get_product().with(eq(999)).returning(|_| Ok(None));

        let (status, body) = get_json(store, "/api/product/999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Product not found" }));
    }

    #[tokio::test]
    async fn non_numeric_product_id_is_404() {
        let mut store = MockCatalogStore::new();
        store.expect_get_product().never();

        let (status, _) = get_json(store, "/api/product/latest").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn product_query_failure_is_500() {
        let mut store = MockCatalogStore::new();
        store
            .expect_get_product()
            .returning(|_| Err(sqlx::Error::PoolClosed));

        let (status, body) = get_json(store, "/api/product/5").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to fetch product" }));
    }

    #[tokio::test]
    async fn options_on_catalog_route_is_204() {
        let store = MockCatalogStore::new();
        let response = send(store, Method::OPTIONS, "/api/product/100").await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn health_check_is_ok() {
        let response = send(MockCatalogStore::new(), Method::GET, "/api/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
