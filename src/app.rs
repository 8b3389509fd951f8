use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/checklist/toggle", post(handlers::toggle_task))
        .route("/api/stats", put(handlers::update_stat))
        .route("/api/baseline", put(handlers::set_baseline))
        .route("/api/sync", post(handlers::sync_day))
        .route("/api/mood", put(handlers::select_mood))
        .route("/api/win", put(handlers::set_win))
        .route("/api/preferences", put(handlers::set_preferences))
        .route("/api/countdown", get(handlers::get_countdown))
        .route("/api/notifications", get(handlers::drain_notifications))
        .with_state(state)
}
