//! Integration tests for the inventory service.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::ProductId;
use inventory::StockStore;
use tower::ServiceExt;

async fn setup_seeded() -> (axum::Router, StockStore) {
    let store = StockStore::new();
    store.seed_defaults().await;
    (inventory::create_app(store.clone()), store)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn deduct_request(items: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/inventory/deduct")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::json!({ "items": items }).to_string()))
        .unwrap()
}

#[tokio::test]
async fn get_stock_for_seeded_product() {
    let (app, _) = setup_seeded().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/inventory/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["product_id"], 1);
    assert_eq!(json["stock"], 10);
}

#[tokio::test]
async fn get_stock_for_unknown_product_is_404() {
    let (app, _) = setup_seeded().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/inventory/99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deduct_happy_path() {
    let (app, store) = setup_seeded().await;

    let response = app
        .oneshot(deduct_request(serde_json::json!([
            { "product_id": 1, "quantity": 3 }
        ])))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.get(ProductId::new(1)).await, Some(7));
}

#[tokio::test]
async fn deduct_insufficient_stock_names_offender_and_changes_nothing() {
    let (app, store) = setup_seeded().await;

    let response = app
        .oneshot(deduct_request(serde_json::json!([
            { "product_id": 1, "quantity": 3 },
            { "product_id": 2, "quantity": 99 }
        ])))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["product_id"], 2);

    assert_eq!(store.get(ProductId::new(1)).await, Some(10));
    assert_eq!(store.get(ProductId::new(2)).await, Some(20));
}

#[tokio::test]
async fn deduct_rejects_batch_whose_repeated_lines_exceed_stock() {
    let (app, store) = setup_seeded().await;

    // product 1 has 10 in stock; two 6-quantity lines must be refused
    let response = app
        .oneshot(deduct_request(serde_json::json!([
            { "product_id": 1, "quantity": 6 },
            { "product_id": 1, "quantity": 6 }
        ])))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["product_id"], 1);
    assert_eq!(store.get(ProductId::new(1)).await, Some(10));
}

#[tokio::test]
async fn deduct_unknown_product_is_404_with_offender() {
    let (app, store) = setup_seeded().await;

    let response = app
        .oneshot(deduct_request(serde_json::json!([
            { "product_id": 42, "quantity": 1 }
        ])))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["product_id"], 42);
    assert_eq!(store.get(ProductId::new(1)).await, Some(10));
}

#[tokio::test]
async fn set_stock_creates_row() {
    let (app, store) = setup_seeded().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/inventory/7")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::json!({ "stock": 4 }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.get(ProductId::new(7)).await, Some(4));
}
