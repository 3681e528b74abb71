use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, patch, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/habits", post(handlers::create_habit))
        .route("/api/habits/:id/toggle", patch(handlers::toggle_habit))
        .route("/api/day", get(handlers::get_day))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/calendar", get(handlers::get_calendar))
        .with_state(state)
}
