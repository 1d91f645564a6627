pub mod client;
mod dto;
pub mod fallback;
pub mod fences;
pub mod handlers;
pub mod interpret;
pub mod model;
pub mod prompt;
pub mod recency;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::ai_routes())
}
