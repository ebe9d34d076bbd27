//! Restaurant HTTP Routes

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::filter::{FlagFilter, ParamMode};
use crate::query::{Column, SortDirection, SqlValue, Table};

use super::errors::ApiError;
use super::response::{require_rows, RestaurantResponse, RestaurantsResponse};
use super::server::route_not_found;
use super::state::QueryState;

const NO_RESTAURANTS: &str = "No restaurants found";
const NO_RESTAURANT: &str = "No restaurant found";
const NO_CUISINE_MATCH: &str = "No restaurants found for this cuisine";
const NO_FILTER_MATCH: &str = "No restaurants match the given filters";

/// All three flags must be supplied; a missing one fails the request with 500.
pub const RESTAURANT_FILTER: FlagFilter = FlagFilter::new(
    ParamMode::RequireAll,
    &[
        ("isVeg", Column::IsVeg),
        ("hasOutdoorSeating", Column::HasOutdoorSeating),
        ("isLuxury", Column::IsLuxury),
    ],
);

type SharedState = Arc<QueryState>;

/// Create restaurant routes
pub fn restaurant_routes(state: SharedState) -> Router {
    Router::new()
        .route(
            "/restaurants",
            get(list_restaurants).fallback(route_not_found),
        )
        .route(
            "/restaurants/details/:id",
            get(restaurant_details).fallback(route_not_found),
        )
        .route(
            "/restaurants/cuisine/:cuisine",
            get(restaurants_by_cuisine).fallback(route_not_found),
        )
        .route(
            "/restaurants/filter",
            get(filter_restaurants).fallback(route_not_found),
        )
        .route(
            "/restaurants/sort-by-rating",
            get(restaurants_by_rating).fallback(route_not_found),
        )
        .with_state(state)
}

async fn list_restaurants(
    State(state): State<SharedState>,
) -> Result<Json<RestaurantsResponse>, ApiError> {
    let rows = state.db.fetch_all(Table::Restaurants).await?;
    let restaurants = require_rows(rows, NO_RESTAURANTS)?;
    Ok(Json(RestaurantsResponse { restaurants }))
}

/// An undecodable or non-integer id can never match, so it is reported as a
/// lookup miss.
async fn restaurant_details(
    State(state): State<SharedState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<RestaurantResponse>, ApiError> {
    let Ok(Path(id)) = id else {
        return Err(ApiError::NotFound(NO_RESTAURANT));
    };
    let id: i64 = id.parse().map_err(|_| ApiError::NotFound(NO_RESTAURANT))?;

    let restaurant = state
        .db
        .get_by_id(Table::Restaurants, id)
        .await?
        .ok_or(ApiError::NotFound(NO_RESTAURANT))?;
    Ok(Json(RestaurantResponse { restaurant }))
}

async fn restaurants_by_cuisine(
    State(state): State<SharedState>,
    cuisine: Result<Path<String>, PathRejection>,
) -> Result<Json<RestaurantsResponse>, ApiError> {
    // A cuisine that is not valid UTF-8 cannot be stored in any row
    let Ok(Path(cuisine)) = cuisine else {
        return Err(ApiError::NotFound(NO_CUISINE_MATCH));
    };
    let rows = state
        .db
        .get_by_column(Table::Restaurants, Column::Cuisine, SqlValue::Text(cuisine))
        .await?;
    let restaurants = require_rows(rows, NO_CUISINE_MATCH)?;
    Ok(Json(RestaurantsResponse { restaurants }))
}

async fn filter_restaurants(
    State(state): State<SharedState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<RestaurantsResponse>, ApiError> {
    let conditions = RESTAURANT_FILTER.conditions(&query)?;
    let rows = state
        .db
        .get_by_predicate(Table::Restaurants, conditions)
        .await?;
    let restaurants = require_rows(rows, NO_FILTER_MATCH)?;
    Ok(Json(RestaurantsResponse { restaurants }))
}

/// An empty table yields an empty list, not a 404.
async fn restaurants_by_rating(
    State(state): State<SharedState>,
) -> Result<Json<RestaurantsResponse>, ApiError> {
    let restaurants = state
        .db
        .get_sorted(Table::Restaurants, Column::Rating, SortDirection::Descending)
        .await?;
    Ok(Json(RestaurantsResponse { restaurants }))
}
