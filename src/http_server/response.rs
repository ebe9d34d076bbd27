//! # Response Envelopes
//!
//! Every body is a JSON object with a single key naming the resource,
//! or `message` for errors and empty results.

use serde::Serialize;

use crate::query::Row;

use super::errors::ApiError;

#[derive(Debug, Clone, Serialize)]
pub struct RestaurantsResponse {
    pub restaurants: Vec<Row>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RestaurantResponse {
    pub restaurant: Row,
}

#[derive(Debug, Clone, Serialize)]
pub struct DishesResponse {
    pub dishes: Vec<Row>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DishResponse {
    pub dish: Row,
}

/// Error or empty-result body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Turn an empty result into a 404 with `message`
pub fn require_rows(rows: Vec<Row>, message: &'static str) -> Result<Vec<Row>, ApiError> {
    if rows.is_empty() {
        Err(ApiError::NotFound(message))
    } else {
        Ok(rows)
    }
}
