//! Web layer for the schedule service.
//!
//! Provides HTTP endpoints for station and train schedules and for
//! point-to-point search.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
