//! Dish HTTP Routes

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::filter::{FlagFilter, ParamMode};
use crate::query::{Column, SortDirection, Table};

use super::errors::ApiError;
use super::response::{require_rows, DishResponse, DishesResponse};
use super::server::route_not_found;
use super::state::QueryState;

const INVALID_DISH_ID: &str = "Invalid dish ID";
const DISH_NOT_FOUND: &str = "Dish not found";
const NO_FILTER_MATCH: &str = "No dishes match the given filter";

/// `isVeg` may be omitted, in which case every dish matches.
pub const DISH_FILTER: FlagFilter =
    FlagFilter::new(ParamMode::OptionalEach, &[("isVeg", Column::IsVeg)]);

type SharedState = Arc<QueryState>;

/// Create dish routes
pub fn dish_routes(state: SharedState) -> Router {
    Router::new()
        .route("/dishes", get(list_dishes).fallback(route_not_found))
        .route(
            "/dishes/details/:id",
            get(dish_details).fallback(route_not_found),
        )
        .route(
            "/dishes/filter",
            get(filter_dishes).fallback(route_not_found),
        )
        .route(
            "/dishes/sort-by-price",
            get(dishes_by_price).fallback(route_not_found),
        )
        .with_state(state)
}

async fn list_dishes(State(state): State<SharedState>) -> Result<Json<DishesResponse>, ApiError> {
    let dishes = state.db.fetch_all(Table::Dishes).await?;
    Ok(Json(DishesResponse { dishes }))
}

async fn dish_details(
    State(state): State<SharedState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<DishResponse>, ApiError> {
    let invalid_id = || ApiError::InvalidInput(INVALID_DISH_ID.to_string());

    let Ok(Path(id)) = id else {
        return Err(invalid_id());
    };
    let id: i64 = id.parse().map_err(|_| invalid_id())?;

    let dish = state
        .db
        .get_by_id(Table::Dishes, id)
        .await?
        .ok_or(ApiError::NotFound(DISH_NOT_FOUND))?;
    Ok(Json(DishResponse { dish }))
}

async fn filter_dishes(
    State(state): State<SharedState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<DishesResponse>, ApiError> {
    let conditions = DISH_FILTER.conditions(&query)?;
    let rows = state.db.get_by_predicate(Table::Dishes, conditions).await?;
    let dishes = require_rows(rows, NO_FILTER_MATCH)?;
    Ok(Json(DishesResponse { dishes }))
}

async fn dishes_by_price(
    State(state): State<SharedState>,
) -> Result<Json<DishesResponse>, ApiError> {
    let dishes = state
        .db
        .get_sorted(Table::Dishes, Column::Price, SortDirection::Ascending)
        .await?;
    Ok(Json(DishesResponse { dishes }))
}
