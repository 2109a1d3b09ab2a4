//! Integration tests for the cart service, using the in-memory catalog fake.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use cart::CartStore;
use clients::InMemoryCatalog;
use common::{Money, ProductId};
use tower::ServiceExt;

fn setup() -> (axum::Router, CartStore, InMemoryCatalog) {
    let store = CartStore::new();
    let catalog = InMemoryCatalog::new();
    catalog.insert(ProductId::new(1), Money::from_cents(99_999));
    let app = cart::create_app(store.clone(), Arc::new(catalog.clone()));
    (app, store, catalog)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn add_request(user_id: u64, product_id: u64, quantity: u32) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/cart/add")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({
                "user_id": user_id,
                "product_id": product_id,
                "quantity": quantity
            })
            .to_string(),
        ))
        .unwrap()
}

#[tokio::test]
async fn add_creates_row() {
    let (app, _, _) = setup();

    let response = app.oneshot(add_request(1, 1, 2)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["quantity"], 2);
}

#[tokio::test]
async fn add_existing_pair_merges_quantity() {
    let (app, store, _) = setup();

    app.clone().oneshot(add_request(1, 1, 2)).await.unwrap();
    let response = app.oneshot(add_request(1, 1, 3)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["quantity"], 5);

    // one merged row, not two
    assert_eq!(store.list(common::UserId::new(1)).await.len(), 1);
}

#[tokio::test]
async fn add_unknown_product_is_404() {
    let (app, store, _) = setup();

    let response = app.oneshot(add_request(1, 42, 1)).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(store.list(common::UserId::new(1)).await.is_empty());
}

#[tokio::test]
async fn add_zero_quantity_is_400() {
    let (app, _, _) = setup();

    let response = app.oneshot(add_request(1, 1, 0)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn add_with_unreachable_catalog_is_502() {
    let (app, _, catalog) = setup();
    catalog.set_fail(true);

    let response = app.oneshot(add_request(1, 1, 1)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn list_remove_and_clear() {
    let (app, _, catalog) = setup();
    catalog.insert(ProductId::new(2), Money::from_cents(500));

    app.clone().oneshot(add_request(1, 1, 1)).await.unwrap();
    app.clone().oneshot(add_request(1, 2, 2)).await.unwrap();

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/cart/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/cart/1/item/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/cart/1/item/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/cart/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::builder().uri("/cart/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}
