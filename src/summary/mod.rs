mod dto;
pub mod handlers;
pub mod nutrition;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::summary_routes())
}
