//! HTTP API handlers

mod buildings;
mod estimate;
mod health;

pub use buildings::get_building;
pub use estimate::estimate_price;
pub use health::health_routes;
