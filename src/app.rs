use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/goals", post(handlers::submit_goal))
        .route("/session/end", post(handlers::end_session))
        .route("/api/goals", post(handlers::api_submit_goal))
        .route("/api/history", get(handlers::api_history))
        .route("/api/motivation", get(handlers::api_motivation))
        .with_state(state)
}
