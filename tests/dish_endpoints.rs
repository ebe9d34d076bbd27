//! Dish endpoint tests

mod common;

use axum::http::StatusCode;
use common::{empty, get, ids, numbers, seeded};
use serde_json::json;

#[tokio::test]
async fn test_list_returns_all_dishes() {
    let fixture = seeded();
    let (status, body) = get(fixture.router(), "/dishes").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["dishes"]), vec![1, 2, 3, 4]);
}

/// The dish list has no empty check.
#[tokio::test]
async fn test_list_empty_table_is_200() {
    let fixture = empty();
    let (status, body) = get(fixture.router(), "/dishes").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"dishes": []}));
}

#[tokio::test]
async fn test_details_returns_dish() {
    let fixture = seeded();
    let (status, body) = get(fixture.router(), "/dishes/details/3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dish"]["id"], 3);
    assert_eq!(body["dish"]["name"], "Veg Sushi Roll");
}

#[tokio::test]
async fn test_details_unknown_id_is_404() {
    let fixture = seeded();
    let (status, body) = get(fixture.router(), "/dishes/details/99").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Dish not found"}));
}

#[tokio::test]
async fn test_details_non_numeric_id_is_400() {
    let fixture = seeded();
    let (status, body) = get(fixture.router(), "/dishes/details/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "Invalid dish ID"}));
}

/// Ids are parsed as whole integers; a numeric prefix does not count.
#[tokio::test]
async fn test_details_numeric_prefix_is_400() {
    let fixture = seeded();
    let (status, body) = get(fixture.router(), "/dishes/details/1abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "Invalid dish ID"}));
}

/// A path segment that is not valid UTF-8 is rejected with the JSON body.
#[tokio::test]
async fn test_details_undecodable_id_is_json_400() {
    let fixture = seeded();
    let (status, body) = get(fixture.router(), "/dishes/details/%FF").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "Invalid dish ID"}));
}

#[tokio::test]
async fn test_filter_by_is_veg() {
    let fixture = seeded();

    let (status, body) = get(fixture.router(), "/dishes/filter?isVeg=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["dishes"]), vec![1, 3]);

    let (status, body) = get(fixture.router(), "/dishes/filter?isVeg=0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["dishes"]), vec![2, 4]);
}

/// Without `isVeg` every dish matches.
#[tokio::test]
async fn test_filter_without_param_returns_all() {
    let fixture = seeded();
    let (status, body) = get(fixture.router(), "/dishes/filter").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["dishes"]), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_filter_on_empty_table_is_404() {
    let fixture = empty();
    let (status, body) = get(fixture.router(), "/dishes/filter?isVeg=1").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No dishes match the given filter");
}

#[tokio::test]
async fn test_filter_unrecognized_token_is_400() {
    let fixture = seeded();
    let (status, body) = get(fixture.router(), "/dishes/filter?isVeg=maybe").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid value for isVeg: maybe");
}

#[tokio::test]
async fn test_sort_by_price_non_decreasing() {
    let fixture = seeded();
    let (status, body) = get(fixture.router(), "/dishes/sort-by-price").await;

    assert_eq!(status, StatusCode::OK);
    let prices = numbers(&body["dishes"], "price");
    assert_eq!(prices.len(), 4);
    assert!(prices.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[tokio::test]
async fn test_sort_by_price_empty_table_is_200() {
    let fixture = empty();
    let (status, body) = get(fixture.router(), "/dishes/sort-by-price").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"dishes": []}));
}
