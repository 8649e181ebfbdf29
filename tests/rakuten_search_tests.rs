//! Rakuten search adapter tests against a local stand-in provider.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use winegift::{ProductSearchService, RakutenProductSearch, SearchFilter, SearchProductsUseCase};

type Captured = Arc<Mutex<Vec<HashMap<String, String>>>>;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });
    format!("http://{addr}/search")
}

fn item(name: &str, price: i64, url: &str) -> Value {
    json!({
        "Item": {
            "itemName": name,
            "itemPrice": price,
            "itemUrl": url,
            "mediumImageUrls": [{ "imageUrl": format!("{url}/image.jpg") }]
        }
    })
}

async fn fake_provider(body: Value) -> (String, Captured) {
    let captured: Captured = Arc::default();
    let app = Router::new()
        .route(
            "/search",
            get(
                move |State(captured): State<Captured>,
                      Query(params): Query<HashMap<String, String>>| {
                    let body = body.clone();
                    async move {
                        captured.lock().unwrap().push(params);
                        Json(body)
                    }
                },
            ),
        )
        .with_state(captured.clone());
    (serve(app).await, captured)
}

#[tokio::test]
async fn test_two_items_are_returned_in_order() {
    let (url, _) = fake_provider(json!({
        "Items": [
            item("ChateauX 2018", 4980, "https://item.example/1"),
            item("ChateauX 2019", 5500, "https://item.example/2"),
        ]
    }))
    .await;
    let search = RakutenProductSearch::new("app-id", url);

    let listings = search
        .search(&SearchFilter::new("ChateauX"))
        .await
        .expect("Search failed");

    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].name(), "ChateauX 2018");
    assert_eq!(listings[0].price(), 4980);
    assert_eq!(listings[0].image_url(), "https://item.example/1/image.jpg");
    assert_eq!(listings[1].page_url(), "https://item.example/2");
}

#[tokio::test]
async fn test_results_are_capped_at_three() {
    let items: Vec<Value> = (0..6)
        .map(|i| item(&format!("Wine {i}"), 1000 + i, &format!("https://item.example/{i}")))
        .collect();
    let (url, _) = fake_provider(json!({ "Items": items })).await;
    let use_case = SearchProductsUseCase::new(Arc::new(RakutenProductSearch::new("app-id", url)));

    let listings = use_case.search("Wine").await.expect("Search failed");

    assert_eq!(listings.len(), 3);
    assert_eq!(listings[2].name(), "Wine 2");
}

#[tokio::test]
async fn test_missing_items_is_empty_result() {
    let (url, _) = fake_provider(json!({ "count": 0, "page": 1 })).await;
    let search = RakutenProductSearch::new("app-id", url);

    let listings = search
        .search(&SearchFilter::new("ChateauX"))
        .await
        .expect("Missing Items should not be an error");

    assert!(listings.is_empty());
}

#[tokio::test]
async fn test_query_parameters_on_the_wire() {
    let (url, captured) = fake_provider(json!({ "Items": [] })).await;
    let search = RakutenProductSearch::new("app-123", url);

    search
        .search(&SearchFilter::new("ワイン ChateauX"))
        .await
        .expect("Search failed");

    let calls = captured.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let params = &calls[0];
    assert_eq!(params.get("format").map(String::as_str), Some("json"));
    assert_eq!(params.get("keyword").map(String::as_str), Some("ワイン ChateauX"));
    assert_eq!(params.get("applicationId").map(String::as_str), Some("app-123"));
    assert_eq!(params.get("hits").map(String::as_str), Some("3"));
    assert!(!params.contains_key("minPrice"));
    assert!(!params.contains_key("maxPrice"));
}

#[tokio::test]
async fn test_keyword_is_truncated_to_128_characters() {
    let (url, captured) = fake_provider(json!({ "Items": [] })).await;
    let search = RakutenProductSearch::new("", url);

    search
        .search(&SearchFilter::new("x".repeat(200)))
        .await
        .expect("Search failed");

    let calls = captured.lock().unwrap();
    let keyword = calls[0].get("keyword").expect("keyword missing");
    assert_eq!(keyword.chars().count(), 128);
}

#[tokio::test]
async fn test_price_bounds_only_sent_as_pair() {
    let (url, captured) = fake_provider(json!({ "Items": [] })).await;
    let search = RakutenProductSearch::new("", url);

    search
        .search(&SearchFilter::new("x").with_price_range(Some(3000), None))
        .await
        .expect("Search failed");
    search
        .search(&SearchFilter::new("x").with_price_range(Some(3000), Some(9000)))
        .await
        .expect("Search failed");

    let calls = captured.lock().unwrap();
    assert!(!calls[0].contains_key("minPrice"));
    assert!(!calls[0].contains_key("maxPrice"));
    assert_eq!(calls[1].get("minPrice").map(String::as_str), Some("3000"));
    assert_eq!(calls[1].get("maxPrice").map(String::as_str), Some("9000"));
}

#[tokio::test]
async fn test_non_200_status_is_search_error() {
    let app = Router::new().route(
        "/search",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
    );
    let url = serve(app).await;
    let search = RakutenProductSearch::new("app-id", url);

    let err = search
        .search(&SearchFilter::new("ChateauX"))
        .await
        .expect_err("503 should fail");

    assert!(err.is_search_error());
    assert_eq!(err.status_code(), Some(503));
    assert!(err.to_string().contains("maintenance"));
}

#[tokio::test]
async fn test_non_200_success_status_is_search_error() {
    let app = Router::new().route(
        "/search",
        get(|| async { (StatusCode::ACCEPTED, Json(json!({ "Items": [] }))) }),
    );
    let url = serve(app).await;
    let search = RakutenProductSearch::new("app-id", url);

    let err = search
        .search(&SearchFilter::new("ChateauX"))
        .await
        .expect_err("202 should fail");

    assert_eq!(err.status_code(), Some(202));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);
    let search = RakutenProductSearch::new("app-id", format!("http://{addr}/search"));

    let err = search
        .search(&SearchFilter::new("ChateauX"))
        .await
        .expect_err("Closed port should fail");

    assert!(err.is_search_error());
    assert_eq!(err.status_code(), None);
    assert!(matches!(
        err,
        winegift::DomainError::SearchService(winegift::SearchServiceError::Transport(_))
    ));
}
