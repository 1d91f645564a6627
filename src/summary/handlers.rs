use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::{dto::DailySummary, services};
use crate::{
    error::{parse_id, AppError},
    state::AppState,
};

pub fn summary_routes() -> Router<AppState> {
    Router::new().route("/daily-summary/:user_id/:date", get(get_daily_summary))
}

#[instrument(skip(state))]
pub async fn get_daily_summary(
    State(state): State<AppState>,
    Path((user_id, date)): Path<(String, String)>,
) -> Result<Json<DailySummary>, AppError> {
    let user_id = parse_id(&user_id, "User")?;
    Ok(Json(
        services::daily_summary(state.store.as_ref(), user_id, &date).await?,
    ))
}
