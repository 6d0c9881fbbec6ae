//! Integration tests for catalog browsing.
//!
//! Run with: cargo test -p cotton-row-integration-tests

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use cotton_row_integration_tests::TestContext;
use reqwest::StatusCode;
use serde_json::Value;

async fn get_json(ctx: &TestContext, path: &str) -> (StatusCode, Value) {
    let resp = ctx.client.get(ctx.url(path)).send().await.unwrap();
    let status = resp.status();
    (status, resp.json().await.unwrap())
}

#[tokio::test]
async fn test_health_endpoints() {
    let ctx = TestContext::spawn().await;

    let resp = ctx.client.get(ctx.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");

    let resp = ctx.client.get(ctx.url("/health/ready")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_default_listing_is_newest_first() {
    let ctx = TestContext::spawn().await;
    let (status, body) = get_json(&ctx, "/api/products").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["total"], 16);
    assert_eq!(body["limit"], 10);
    assert_eq!(body["skip"], 0);
    assert_eq!(body["pages"], 2);
    assert_eq!(body["products"].as_array().unwrap().len(), 10);
    assert_eq!(body["products"][0]["id"], "16");
}

#[tokio::test]
async fn test_cheapest_product_first() {
    let ctx = TestContext::spawn().await;
    let (_, body) = get_json(&ctx, "/api/products?sortBy=price-low&limit=1").await;

    assert_eq!(body["products"][0]["name"], "Classic Cropped Tee");
    assert_eq!(body["products"][0]["price"].as_f64(), Some(399.0));
}

#[tokio::test]
async fn test_filters_combine() {
    let ctx = TestContext::spawn().await;
    let (_, body) = get_json(
        &ctx,
        "/api/products?category=Pants&minPrice=1000&sortBy=price-high&limit=50",
    )
    .await;

    let products = body["products"].as_array().unwrap();
    assert!(!products.is_empty());
    assert!(products.iter().all(|p| p["category"] == "Pants"));
    assert!(products.iter().all(|p| p["price"].as_f64().unwrap() >= 1000.0));

    let prices: Vec<f64> = products.iter().map(|p| p["price"].as_f64().unwrap()).collect();
    assert!(prices.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(body["total"].as_u64().unwrap(), products.len() as u64);
}

#[tokio::test]
async fn test_search_and_skip_past_end() {
    let ctx = TestContext::spawn().await;

    let (_, body) = get_json(&ctx, "/api/products?search=DENIM").await;
    let products = body["products"].as_array().unwrap();
    assert!(!products.is_empty());
    assert!(products.iter().all(|p| {
        let haystack = format!("{} {}", p["name"], p["description"]).to_lowercase();
        haystack.contains("denim")
    }));

    let (status, body) = get_json(&ctx, "/api/products?skip=100").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["products"], Value::Array(vec![]));
    assert_eq!(body["total"], 16);
}

#[tokio::test]
async fn test_invalid_limit_is_rejected() {
    let ctx = TestContext::spawn().await;
    let (status, body) = get_json(&ctx, "/api/products?limit=0").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_product_detail_and_missing_product() {
    let ctx = TestContext::spawn().await;

    let (status, body) = get_json(&ctx, "/api/products/12").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"]["name"], "Casual Chino Pants");

    let (status, body) = get_json(&ctx, "/api/products/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product not found");
}

#[tokio::test]
async fn test_categories() {
    let ctx = TestContext::spawn().await;
    let (_, body) = get_json(&ctx, "/api/categories").await;

    let categories = body["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0]["name"], "T-Shirts");
    assert_eq!(categories[0]["productCount"], 8);
    assert_eq!(categories[1]["slug"], "pants");
}
