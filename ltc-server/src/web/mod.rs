//! Web layer for the bus arrival API.
//!
//! JSON endpoints for the route directory and per-route stop queries.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
