//! # HTTP Server
//!
//! Read-only JSON endpoints over the restaurants and dishes tables.
//!
//! # Endpoints
//!
//! - `GET /restaurants` - All restaurants
//! - `GET /restaurants/details/:id` - One restaurant by id
//! - `GET /restaurants/cuisine/:cuisine` - Restaurants serving a cuisine
//! - `GET /restaurants/filter` - Restaurants by `isVeg`, `hasOutdoorSeating`, `isLuxury`
//! - `GET /restaurants/sort-by-rating` - Restaurants, best rated first
//! - `GET /dishes` - All dishes
//! - `GET /dishes/details/:id` - One dish by id
//! - `GET /dishes/filter` - Dishes by optional `isVeg`
//! - `GET /dishes/sort-by-price` - Dishes, cheapest first

pub mod config;
pub mod dish_routes;
pub mod errors;
pub mod observe;
pub mod response;
pub mod restaurant_routes;
pub mod server;
pub mod state;

pub use config::{ConfigError, HttpServerConfig};
pub use errors::ApiError;
pub use server::HttpServer;
pub use state::QueryState;
