mod common;

use axum::http::StatusCode;
use common::TestApp;

#[tokio::test]
async fn menu_lists_every_category_and_item() {
    let app = TestApp::spawn();

    let response = app.get("/api/menu").await;
    assert_eq!(response.status, StatusCode::OK);

    let body = response.json();
    let categories = body["categories"].as_object().unwrap();
    assert_eq!(categories.len(), 25);

    let items: usize = categories
        .values()
        .map(|items| items.as_array().unwrap().len())
        .sum();
    assert_eq!(items, 144);

    let desserts = categories["Desserts"].as_array().unwrap();
    assert!(desserts.iter().all(|item| item["price"].is_null()));

    let espresso = &categories["Hot"][0];
    assert_eq!(espresso["name"], "Espresso");
    assert_eq!(espresso["price"], 210);
    assert_eq!(espresso["price"].to_string(), "210");
    assert_eq!(espresso["category"], "Hot");
    assert_eq!(espresso["description"], "");
    assert_eq!(espresso["dietary"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn menu_is_deterministic_and_ordered() {
    let app = TestApp::spawn();

    let first = app.get("/api/menu").await.text();
    let second = app.get("/api/menu").await.text();
    assert_eq!(first, second);

    let other_app = TestApp::spawn();
    assert_eq!(other_app.get("/api/menu").await.text(), first);

    let fresh = first.find("\"Fresh Squeeze\"").unwrap();
    let cold = first.find("\"Cold\"").unwrap();
    let pawsome = first.find("\"Pawsome\"").unwrap();
    assert!(fresh < cold && cold < pawsome);
}
